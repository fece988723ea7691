//! JSON formatter for exported comments.

use std::io::Write;

use crate::instagram::HarvestError;

use super::model::CommentRecord;

/// Writes records as an indented JSON array in the given order.
///
/// Non-ASCII text is written as-is rather than escaped.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] if serialisation or writing fails.
pub fn write_json<W: Write>(mut writer: W, records: &[CommentRecord]) -> Result<(), HarvestError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(|error| HarvestError::Io {
        message: format!("JSON serialisation failed: {error}"),
    })?;
    writeln!(writer).map_err(|error| HarvestError::Io {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::export::test_helpers::{record, tricky_records};

    fn write_to_string(records: &[CommentRecord]) -> String {
        let mut buffer = Vec::new();
        write_json(&mut buffer, records).expect("should write JSON");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[rstest]
    fn preserves_collection_order() {
        let records = vec![record("b", 0, 0), record("a", 500, 9)];
        let parsed: Vec<CommentRecord> =
            serde_json::from_str(&write_to_string(&records)).expect("should parse");
        assert_eq!(parsed, records);
    }

    #[rstest]
    fn keeps_unicode_unescaped() {
        let output = write_to_string(&tricky_records());
        assert!(output.contains("田中"), "username should be literal: {output}");
        assert!(output.contains("コメント 🎉"), "text should be literal: {output}");
    }

    #[rstest]
    fn uses_record_field_names_and_indentation() {
        let output = write_to_string(&[record("1", 0, 2)]);
        for field in ["comment_id", "user_id", "username", "text", "created_at", "likes"] {
            assert!(output.contains(&format!("\"{field}\"")), "missing {field}");
        }
        assert!(output.contains("\n  {\n    \"comment_id\""), "not indented: {output}");
    }

    #[rstest]
    fn empty_input_is_empty_array() {
        assert_eq!(write_to_string(&[]).trim(), "[]");
    }
}
