//! # Session Layer
//!
//! The authenticated user's token and display name, persisted in an INI
//! file between invocations. Controllers receive a loaded [`Session`] by
//! injection; only the [`SessionStore`] touches the file.

pub mod store;

pub use store::{Session, SessionStore, SessionStoreError};
