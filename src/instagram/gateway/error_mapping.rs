//! Error mapping helpers for the HTTP gateway.

use http::StatusCode;

use crate::instagram::error::HarvestError;

/// Response message the service uses when the session is no longer valid.
const LOGIN_REQUIRED: &str = "login_required";

/// Response messages that demand interactive account verification.
const CHALLENGE_MESSAGES: [&str; 2] = ["challenge_required", "checkpoint_required"];

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Maps a non-success response into a [`HarvestError`].
///
/// The `message` field of the JSON body takes precedence over the status so
/// that session expiry and verification challenges are distinguishable from
/// plain credential rejection.
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> HarvestError {
    let message = extract_api_message(body).unwrap_or_else(|| "unknown error".to_owned());

    if message == LOGIN_REQUIRED {
        return HarvestError::SessionExpired {
            message: format!("{operation} failed: service returned {status} {message}"),
        };
    }

    if CHALLENGE_MESSAGES.contains(&message.as_str()) {
        return HarvestError::ChallengeRequired {
            message: format!("{operation} failed: service returned {status} {message}"),
        };
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return HarvestError::RateLimitExceeded {
            message: format!("{operation} failed: {message}"),
        };
    }

    if is_auth_failure(status) {
        HarvestError::Authentication {
            message: format!("{operation} failed: service returned {status} {message}"),
        }
    } else {
        HarvestError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Maps a transport failure into [`HarvestError::Network`].
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> HarvestError {
    HarvestError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a body decoding failure into [`HarvestError::Api`].
pub(super) fn map_decode_error(operation: &str, error: &reqwest::Error) -> HarvestError {
    HarvestError::Api {
        message: format!("{operation} response decoding failed: {error}"),
    }
}

fn extract_api_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
