//! CSV formatter for exported comments.

use std::io::Write;

use crate::instagram::HarvestError;

use super::model::{COLUMN_NAMES, CommentRecord};

/// Writes a header row followed by one row per record.
///
/// Columns follow the field order of [`CommentRecord`]. The header is
/// written even when `records` is empty. Values containing separators,
/// quotes or newlines are quoted; text is written as UTF-8.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] if serialisation or writing fails.
pub fn write_csv<W: Write>(writer: W, records: &[CommentRecord]) -> Result<(), HarvestError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(COLUMN_NAMES)
        .map_err(|error| HarvestError::Io {
            message: format!("failed to write CSV header: {error}"),
        })?;
    for record in records {
        csv_writer.serialize(record).map_err(|error| HarvestError::Io {
            message: format!("CSV serialisation failed: {error}"),
        })?;
    }
    csv_writer.flush().map_err(|error| HarvestError::Io {
        message: format!("failed to flush CSV output: {error}"),
    })
}
