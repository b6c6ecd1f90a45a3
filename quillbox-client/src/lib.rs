//! Typed HTTP client for the Quillbox backend API.
//!
//! This is the data access layer a presentation layer builds on: every call
//! attaches the current session token as a bearer credential when one is
//! held, and every non-success response collapses into a single
//! [`ClientError`] with a human-readable message. No retries, no caching;
//! each call is one round trip.

mod client;
mod error;
mod token_store;
mod types;

pub use client::QuillboxClient;
pub use error::ClientError;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::{Note, User};
