//! Data models representing comment pages returned by the remote service.

use serde::Deserialize;

/// Opaque pagination token pointing at the next page of comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a cursor value issued by the remote service.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the cursor value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A comment as returned by the remote service, before normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    /// Comment identifier.
    pub comment_id: String,
    /// Identifier of the commenting account.
    pub user_id: String,
    /// Handle of the commenting account.
    pub username: String,
    /// Comment body.
    pub text: String,
    /// Creation time in seconds since the Unix epoch (UTC).
    pub created_at_utc: i64,
    /// Like count at fetch time.
    pub like_count: u32,
}

/// One page of comments plus the cursor for the following page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPage {
    /// Comments on this page, in service order.
    pub comments: Vec<RawComment>,
    /// Cursor for the next page; `None` once the collection is exhausted.
    pub next_cursor: Option<Cursor>,
}

/// Identifiers arrive as JSON numbers or strings depending on the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum ApiId {
    Number(u64),
    Text(String),
}

impl From<ApiId> for String {
    fn from(value: ApiId) -> Self {
        match value {
            ApiId::Number(number) => number.to_string(),
            ApiId::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLoginResponse {
    pub(super) session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommentsPage {
    #[serde(default)]
    pub(super) comments: Vec<ApiComment>,
    pub(super) next_min_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) pk: ApiId,
    pub(super) user: ApiUser,
    #[serde(default)]
    pub(super) text: String,
    pub(super) created_at_utc: i64,
    #[serde(default)]
    pub(super) comment_like_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) pk: ApiId,
    pub(super) username: String,
}

impl From<ApiComment> for RawComment {
    fn from(value: ApiComment) -> Self {
        Self {
            comment_id: value.pk.into(),
            user_id: value.user.pk.into(),
            username: value.user.username,
            text: value.text,
            created_at_utc: value.created_at_utc,
            like_count: value.comment_like_count,
        }
    }
}

impl From<ApiCommentsPage> for CommentPage {
    fn from(value: ApiCommentsPage) -> Self {
        Self {
            comments: value.comments.into_iter().map(RawComment::from).collect(),
            next_cursor: value
                .next_min_id
                .filter(|cursor| !cursor.is_empty())
                .map(Cursor::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn decodes_numeric_and_string_identifiers() {
        let payload = json!({
            "comments": [
                {
                    "pk": 17_900_000_000_000_001_u64,
                    "user": { "pk": "42", "username": "alice" },
                    "text": "first!",
                    "created_at_utc": 1_700_000_000,
                    "comment_like_count": 3
                },
                {
                    "pk": "17900000000000002",
                    "user": { "pk": 43, "username": "bob" },
                    "text": "second",
                    "created_at_utc": 1_700_000_060
                }
            ],
            "next_min_id": "{\"cached_comments_cursor\": \"17900000000000002\"}"
        });

        let api: ApiCommentsPage = serde_json::from_value(payload).expect("page should decode");
        let page = CommentPage::from(api);

        let ids: Vec<&str> = page.comments.iter().map(|c| c.comment_id.as_str()).collect();
        assert_eq!(ids, vec!["17900000000000001", "17900000000000002"]);
        let users: Vec<&str> = page.comments.iter().map(|c| c.user_id.as_str()).collect();
        assert_eq!(users, vec!["42", "43"]);
        assert!(page.next_cursor.is_some(), "cursor should be kept");
    }

    #[rstest]
    fn missing_like_count_defaults_to_zero() {
        let api: ApiComment = serde_json::from_value(json!({
            "pk": 1,
            "user": { "pk": 2, "username": "carol" },
            "text": "hi",
            "created_at_utc": 0
        }))
        .expect("comment should decode");

        assert_eq!(RawComment::from(api).like_count, 0);
    }

    #[rstest]
    #[case::absent(json!({ "comments": [] }))]
    #[case::null(json!({ "comments": [], "next_min_id": null }))]
    #[case::empty(json!({ "comments": [], "next_min_id": "" }))]
    fn exhausted_pages_have_no_cursor(#[case] payload: serde_json::Value) {
        let api: ApiCommentsPage = serde_json::from_value(payload).expect("page should decode");
        assert_eq!(CommentPage::from(api).next_cursor, None);
    }
}
