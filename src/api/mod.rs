//! # API Client Layer
//!
//! Translates each social-service operation into one HTTP call and
//! normalizes the outcome into a single `Result<T, ApiError>` shape.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_FEED_LIMIT};
pub use error::ApiError;
pub use types::{
    Author, Comment, LoginRequest, LoginResponse, Post, PostData, Profile, RegisterRequest,
    RegisteredUser,
};
