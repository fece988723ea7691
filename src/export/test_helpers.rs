//! Record builders shared by export unit tests.

use chrono::DateTime;

use super::model::CommentRecord;

/// Builds a record with the given id, creation time (Unix seconds) and likes.
pub(crate) fn record(comment_id: &str, created_at_utc: i64, likes: u32) -> CommentRecord {
    CommentRecord {
        comment_id: comment_id.to_owned(),
        user_id: format!("user-{comment_id}"),
        username: format!("name_{comment_id}"),
        text: format!("comment {comment_id}"),
        created_at: DateTime::from_timestamp(created_at_utc, 0).unwrap_or_default(),
        likes,
    }
}

/// Builds records whose text exercises quoting and non-ASCII handling.
pub(crate) fn tricky_records() -> Vec<CommentRecord> {
    vec![
        CommentRecord {
            text: "commas, \"quotes\"\nand a newline".to_owned(),
            ..record("1", 1_700_000_000, 3)
        },
        CommentRecord {
            username: "田中".to_owned(),
            text: "コメント 🎉".to_owned(),
            ..record("2", 1_700_000_100, 0)
        },
    ]
}
