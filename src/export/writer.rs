//! Writes the three comment artifacts side by side.

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::{Dir, File};
use chrono::{Local, NaiveDateTime};

use crate::instagram::{HarvestError, PostId};
use crate::storage::open_or_create_dir;

use super::delimited::write_csv;
use super::json::write_json;
use super::model::{CommentRecord, ExportPaths};
use super::spreadsheet::build_workbook;

/// Default directory artifacts are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

const STEM_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns the shared file stem `comments_<postId>_<YYYYMMDD_HHMMSS>`.
#[must_use]
pub fn output_stem(post_id: PostId, fetched_at: NaiveDateTime) -> String {
    format!(
        "comments_{post_id}_{}",
        fetched_at.format(STEM_TIMESTAMP_FORMAT)
    )
}

/// Writes CSV, XLSX and JSON artifacts into one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportWriter {
    output_dir: Utf8PathBuf,
}

impl Default for ExportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ExportWriter {
    /// Creates a writer targeting `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory artifacts are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Writes all three artifacts stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Io`] when the directory or any artifact cannot
    /// be written. Artifacts written before the failure are left in place.
    pub fn save_outputs(
        &self,
        records: &[CommentRecord],
        post_id: PostId,
    ) -> Result<ExportPaths, HarvestError> {
        self.save_outputs_at(records, post_id, Local::now().naive_local())
    }

    /// Writes all three artifacts using `fetched_at` in the file stem.
    ///
    /// The CSV and JSON artifacts keep the order of `records`; the
    /// spreadsheet is sorted newest first.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Io`] when the directory or any artifact cannot
    /// be written. Artifacts written before the failure are left in place.
    pub fn save_outputs_at(
        &self,
        records: &[CommentRecord],
        post_id: PostId,
        fetched_at: NaiveDateTime,
    ) -> Result<ExportPaths, HarvestError> {
        let dir = open_or_create_dir(&self.output_dir, "output")?;
        let stem = output_stem(post_id, fetched_at);
        let paths = ExportPaths {
            csv: self.output_dir.join(format!("{stem}.csv")),
            xlsx: self.output_dir.join(format!("{stem}.xlsx")),
            json: self.output_dir.join(format!("{stem}.json")),
        };

        write_buffered(&dir, &paths.csv, |writer| write_csv(writer, records))?;

        let workbook = build_workbook(records)?;
        dir.write(file_name(&paths.xlsx)?, workbook)
            .map_err(|error| HarvestError::Io {
                message: format!("failed to write '{}': {error}", paths.xlsx),
            })?;

        write_buffered(&dir, &paths.json, |writer| write_json(writer, records))?;

        Ok(paths)
    }
}

fn file_name(path: &Utf8Path) -> Result<&str, HarvestError> {
    path.file_name().ok_or_else(|| HarvestError::Io {
        message: format!("invalid output path '{path}': no file name"),
    })
}

fn write_buffered<F>(dir: &Dir, path: &Utf8Path, write: F) -> Result<(), HarvestError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), HarvestError>,
{
    let file = dir
        .create(file_name(path)?)
        .map_err(|error| HarvestError::Io {
            message: format!("failed to create '{path}': {error}"),
        })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().map_err(|error| HarvestError::Io {
        message: format!("failed to flush '{path}': {error}"),
    })
}
