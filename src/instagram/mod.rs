//! Remote comment service access.
//!
//! This module parses post URLs, holds credentials and session handles, and
//! wraps the HTTP API used to log in and page through a post's comments.
//! Failures are mapped into [`HarvestError`] variants so callers can tell a
//! session expiry apart from any other failure.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod session;

pub use error::HarvestError;
pub use gateway::{CommentService, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT, InstagramGateway};
pub use locator::{PostId, PostLocator, Shortcode};
pub use models::{CommentPage, Cursor, RawComment};
pub use session::{Credentials, Session};

#[cfg(test)]
pub use gateway::MockCommentService;
