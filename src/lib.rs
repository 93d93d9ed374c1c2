//! # Tideline - Terminal Client for a Social-Posting API
//!
//! A thin client for a remote social-posting service: it authenticates
//! users, renders a feed of posts, and creates, edits, and deletes posts.
//! All business logic lives on the remote side; this crate builds requests
//! and turns responses into terminal views.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   Result<T, ApiError>   ┌──────────────┐   Cards    ┌─────────┐
//! │  API Client  │────────────────────────►│  Controllers │───────────►│  Views  │
//! │  (reqwest)   │                         │  (per page)  │            │ (pure)  │
//! └──────────────┘                         └──────┬───────┘            └─────────┘
//!                                                 │
//!                              Session (injected) │ confirm/prompt/notify
//!                                                 ▼
//!                          ┌───────────────┐  ┌─────────────┐
//!                          │ SessionStore  │  │ Interaction │
//!                          │ (INI file)    │  │ (trait)     │
//!                          └───────────────┘  └─────────────┘
//! ```
//!
//! Every API operation returns one unified `Result<T, ApiError>`; the
//! controllers consume it uniformly and speak to the user only through the
//! `Interaction` trait, so every destructive flow runs under test with
//! canned answers.

pub mod api;
pub mod cmd_args;
pub mod config;
pub mod controllers;
pub mod interaction;
pub mod session;
pub mod views;

// Re-export main types for easy access
pub use api::{ApiClient, ApiError};
pub use interaction::{CannedInteraction, Interaction, TerminalInteraction};
pub use session::{Session, SessionStore};
