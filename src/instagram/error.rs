//! Error types exposed by the remote service layer.

use thiserror::Error;

/// Errors surfaced while configuring, talking to the remote service, or
/// writing exports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HarvestError {
    /// No account username was configured.
    #[error("account username is required")]
    MissingUsername,

    /// No account password was configured.
    #[error("account password is required")]
    MissingPassword,

    /// No target post URL was configured.
    #[error("target post URL is required")]
    MissingPostUrl,

    /// The provided URL could not be parsed or does not point at a post.
    #[error("post URL is invalid: {0}")]
    InvalidUrl(String),

    /// The post shortcode contains characters outside the shortcode alphabet
    /// or decodes to an id that does not fit in 64 bits.
    #[error("post shortcode is invalid: {0}")]
    InvalidShortcode(String),

    /// The remote service rejected the credentials.
    #[error("login rejected: {message}")]
    Authentication {
        /// Message returned with the rejection.
        message: String,
    },

    /// The remote service requires an interactive verification step.
    #[error("account verification required: {message}")]
    ChallengeRequired {
        /// Message returned with the challenge.
        message: String,
    },

    /// The session is no longer valid and a fresh login is needed.
    #[error("session expired: {message}")]
    SessionExpired {
        /// Message returned by the service.
        message: String,
    },

    /// The remote service throttled the request.
    #[error("rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Message returned by the service.
        message: String,
    },

    /// Login did not produce a usable session.
    #[error("login failed")]
    LoginFailed,

    /// Collection finished without a single comment.
    #[error("no comments found")]
    NoComments,

    /// The remote service returned an unexpected response.
    #[error("API error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },

    /// Networking failed while calling the remote service.
    #[error("network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl HarvestError {
    /// Returns true when the error means the session must be re-established.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }
}
