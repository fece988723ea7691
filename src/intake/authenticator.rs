//! Session establishment from configured credentials.

use tracing::{error, info};

use crate::instagram::{CommentService, Credentials, HarvestError, Session};

/// Opens sessions against a [`CommentService`] using static credentials.
///
/// Failures never propagate: they are logged and reported as `None`, so the
/// authenticator can be re-run freely on session expiry.
pub struct Authenticator<'client, S>
where
    S: CommentService,
{
    service: &'client S,
    username: Option<String>,
    password: Option<String>,
}

impl<'client, S> Authenticator<'client, S>
where
    S: CommentService,
{
    /// Creates an authenticator for the given service and credentials.
    #[must_use]
    pub const fn new(
        service: &'client S,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            service,
            username,
            password,
        }
    }

    /// Logs in and returns the session handle on success.
    ///
    /// Missing credentials are reported without contacting the service.
    pub fn login(&self) -> Option<Session> {
        let credentials = match self.credentials() {
            Ok(credentials) => credentials,
            Err(missing) => {
                error!("Missing account credentials: {missing}");
                return None;
            }
        };

        match self.service.authenticate(&credentials) {
            Ok(session) => {
                info!("Successfully logged in as {}", credentials.username());
                Some(session)
            }
            Err(failure) => {
                error!("Login failed: {failure}");
                None
            }
        }
    }

    fn credentials(&self) -> Result<Credentials, HarvestError> {
        let username = self.username.as_deref().ok_or(HarvestError::MissingUsername)?;
        let password = self.password.clone().ok_or(HarvestError::MissingPassword)?;
        Credentials::new(username, password)
    }
}
