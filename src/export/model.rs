//! Export data models for comment output.
//!
//! [`CommentRecord`] is the flat, normalised form of a single comment. Its
//! field order is the column order of every artifact.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instagram::{HarvestError, RawComment};

/// Fixed-precision UTC format used for `created_at` in every artifact.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column labels of every artifact, in [`CommentRecord`] field order.
pub const COLUMN_NAMES: [&str; 6] = [
    "comment_id",
    "user_id",
    "username",
    "text",
    "created_at",
    "likes",
];

/// A comment prepared for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Comment identifier.
    pub comment_id: String,
    /// Identifier of the commenting account.
    pub user_id: String,
    /// Handle of the commenting account at fetch time.
    pub username: String,
    /// Raw comment body.
    pub text: String,
    /// Creation time, rendered as `YYYY-MM-DD HH:MM:SS`.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Like count at fetch time.
    pub likes: u32,
}

impl TryFrom<RawComment> for CommentRecord {
    type Error = HarvestError;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        let created_at =
            DateTime::from_timestamp(raw.created_at_utc, 0).ok_or_else(|| HarvestError::Api {
                message: format!(
                    "comment {} has an out-of-range timestamp {}",
                    raw.comment_id, raw.created_at_utc
                ),
            })?;

        Ok(Self {
            comment_id: raw.comment_id,
            user_id: raw.user_id,
            username: raw.username,
            text: raw.text,
            created_at,
            likes: raw.like_count,
        })
    }
}

/// Locations of the three artifacts written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Row-oriented text artifact.
    pub csv: Utf8PathBuf,
    /// Spreadsheet artifact.
    pub xlsx: Utf8PathBuf,
    /// Structured document artifact.
    pub json: Utf8PathBuf,
}

mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn raw(created_at_utc: i64) -> RawComment {
        RawComment {
            comment_id: "c1".to_owned(),
            user_id: "u1".to_owned(),
            username: "alice".to_owned(),
            text: "héllo 👋".to_owned(),
            created_at_utc,
            like_count: 5,
        }
    }

    #[rstest]
    fn normalises_raw_comment() {
        let record = CommentRecord::try_from(raw(1_700_000_000)).expect("should normalise");

        assert_eq!(record.comment_id, "c1");
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.username, "alice");
        assert_eq!(record.text, "héllo 👋");
        assert_eq!(record.likes, 5);
        assert_eq!(
            record.created_at.format(TIMESTAMP_FORMAT).to_string(),
            "2023-11-14 22:13:20"
        );
    }

    #[rstest]
    fn rejects_out_of_range_timestamp() {
        let result = CommentRecord::try_from(raw(i64::MAX));
        assert!(
            matches!(result, Err(HarvestError::Api { ref message }) if message.contains("c1")),
            "expected Api error naming the comment, got {result:?}"
        );
    }

    #[rstest]
    fn serialises_timestamp_in_fixed_format() {
        let record = CommentRecord::try_from(raw(0)).expect("should normalise");
        let value = serde_json::to_value(&record).expect("should serialise");
        assert_eq!(value.get("created_at"), Some(&serde_json::json!("1970-01-01 00:00:00")));
    }

    #[rstest]
    fn timestamp_survives_deserialisation() {
        let record = CommentRecord::try_from(raw(1_700_000_000)).expect("should normalise");
        let text = serde_json::to_string(&record).expect("should serialise");
        let parsed: CommentRecord = serde_json::from_str(&text).expect("should parse");
        assert_eq!(parsed, record);
    }
}
