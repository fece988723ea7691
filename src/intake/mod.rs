//! Authentication and comment collection.
//!
//! [`Authenticator`] turns configured credentials into a session and
//! [`CommentCollector`] walks a post's comment pages, re-authenticating on
//! session expiry up to a fixed number of times per run.

mod authenticator;
mod collector;

pub use authenticator::Authenticator;
pub use collector::{CollectorSettings, CommentCollector};
