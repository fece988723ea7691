//! Gateways for talking to the remote comment service.
//!
//! The [`CommentService`] trait is the seam between the collection pipeline
//! and the network. [`InstagramGateway`] implements it with a blocking HTTP
//! client; tests substitute the generated `MockCommentService`.

mod error_mapping;

use std::time::Duration;

use http::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;

use super::error::HarvestError;
use super::locator::{PostId, PostLocator};
use super::models::{ApiCommentsPage, ApiLoginResponse, CommentPage, Cursor};
use super::session::{Credentials, Session};
use error_mapping::{map_decode_error, map_http_error, map_transport_error};

/// Default API base URL of the remote service.
pub const DEFAULT_API_BASE: &str = "https://i.instagram.com/api/v1";

/// Default HTTP timeout for a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the pipeline consumes from the remote service.
#[cfg_attr(test, mockall::automock)]
pub trait CommentService {
    /// Opens an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Authentication`] or
    /// [`HarvestError::ChallengeRequired`] when the service refuses the login,
    /// and [`HarvestError::Network`] on transport failure.
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, HarvestError>;

    /// Translates a user-facing post URL into the post identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidUrl`] or
    /// [`HarvestError::InvalidShortcode`] when the URL does not name a post.
    fn resolve_post_id(&self, post_url: &str) -> Result<PostId, HarvestError>;

    /// Fetches one page of comments, starting at `cursor` when given.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::SessionExpired`] when the session must be
    /// renewed; any other variant is treated as a generic failure.
    fn fetch_comments_page(
        &self,
        session: &Session,
        post_id: &PostId,
        cursor: Option<Cursor>,
    ) -> Result<CommentPage, HarvestError>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// HTTP gateway backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct InstagramGateway {
    client: Client,
    api_base: String,
}

impl InstagramGateway {
    /// Builds a gateway for the given API base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| HarvestError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base.trim_end_matches('/'))
    }
}

/// Returns the response unchanged when successful, or the mapped error.
fn ensure_success(operation: &str, response: Response) -> Result<Response, HarvestError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(map_http_error(operation, status, &body))
}

impl CommentService for InstagramGateway {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, HarvestError> {
        let payload = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self
            .client
            .post(self.endpoint("accounts/login/"))
            .json(&payload)
            .send()
            .map_err(|error| map_transport_error("login", &error))?;

        let login: ApiLoginResponse = ensure_success("login", response)?
            .json()
            .map_err(|error| map_decode_error("login", &error))?;

        if login.session_id.trim().is_empty() {
            return Err(HarvestError::Authentication {
                message: "login succeeded without a session id".to_owned(),
            });
        }

        Ok(Session::new(login.session_id))
    }

    fn resolve_post_id(&self, post_url: &str) -> Result<PostId, HarvestError> {
        PostLocator::parse(post_url).map(|locator| locator.post_id())
    }

    fn fetch_comments_page(
        &self,
        session: &Session,
        post_id: &PostId,
        cursor: Option<Cursor>,
    ) -> Result<CommentPage, HarvestError> {
        let mut request = self
            .client
            .get(self.endpoint(&format!("media/{post_id}/comments/")))
            .bearer_auth(session.token());
        if let Some(next) = cursor.as_ref() {
            request = request.query(&[("min_id", next.as_str())]);
        }

        let response = request
            .send()
            .map_err(|error| map_transport_error("comments", &error))?;

        ensure_success("comments", response)?
            .json::<ApiCommentsPage>()
            .map(CommentPage::from)
            .map_err(|error| map_decode_error("comments", &error))
    }
}
