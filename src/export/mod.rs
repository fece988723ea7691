//! Comment export to CSV, XLSX and JSON.
//!
//! Collected comments are normalised into [`CommentRecord`] values and
//! written as three artifacts sharing one file stem:
//! `comments_<postId>_<YYYYMMDD_HHMMSS>`.
//!
//! # Formats
//!
//! - **CSV**: header row plus one row per comment, in collection order
//! - **XLSX**: a single `Comments` sheet with a styled header, sorted newest
//!   first
//! - **JSON**: an indented array of objects, in collection order
//!
//! All three use the column order of [`CommentRecord`] ([`COLUMN_NAMES`]).
//! CSV and JSON render `created_at` as `YYYY-MM-DD HH:MM:SS` (UTC); the
//! spreadsheet stores it as a date cell displayed in the same layout.

mod delimited;
mod json;
mod model;
mod ordering;
mod spreadsheet;
#[cfg(test)]
mod test_helpers;
mod writer;

pub use delimited::write_csv;
pub use json::write_json;
pub use model::{COLUMN_NAMES, CommentRecord, ExportPaths, TIMESTAMP_FORMAT};
pub use ordering::sort_by_recency;
pub use spreadsheet::{SHEET_NAME, build_workbook};
pub use writer::{DEFAULT_OUTPUT_DIR, ExportWriter, output_stem};
