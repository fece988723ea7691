//! Account credentials and authenticated session handles.

use std::fmt;

use super::error::HarvestError;

/// Account credentials used to open a session.
///
/// The password is never included in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validates that both values are present.
    ///
    /// The username is trimmed; the password is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::MissingUsername`] or
    /// [`HarvestError::MissingPassword`] when the corresponding value is blank.
    pub fn new(username: impl AsRef<str>, password: impl Into<String>) -> Result<Self, HarvestError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HarvestError::MissingUsername);
        }
        let secret = password.into();
        if secret.trim().is_empty() {
            return Err(HarvestError::MissingPassword);
        }
        Ok(Self {
            username: trimmed.to_owned(),
            password: secret,
        })
    }

    /// Borrow the account username.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Borrow the account password.
    #[must_use]
    pub const fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated session handle issued by the remote service.
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    /// Wraps the session token returned by a successful login.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the session token.
    #[must_use]
    pub const fn token(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn trims_username() {
        let credentials = Credentials::new("  alice ", "hunter2").expect("should be valid");
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), "hunter2");
    }

    #[rstest]
    #[case::blank_username("   ", "secret", HarvestError::MissingUsername)]
    #[case::empty_username("", "secret", HarvestError::MissingUsername)]
    #[case::blank_password("alice", " ", HarvestError::MissingPassword)]
    #[case::empty_password("alice", "", HarvestError::MissingPassword)]
    fn rejects_blank_values(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: HarvestError,
    ) {
        let result = Credentials::new(username, password);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn debug_output_hides_the_password() {
        let credentials = Credentials::new("alice", "hunter2").expect("should be valid");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("alice"), "username should be shown: {rendered}");
        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
    }

    #[rstest]
    fn debug_output_hides_the_session_token() {
        let session = Session::new("IGT:2:secret-token");
        assert!(!format!("{session:?}").contains("secret-token"));
    }
}
