//! XLSX formatter for exported comments.
//!
//! The workbook has a single `Comments` sheet with a styled header row and
//! fixed column widths. Rows are sorted newest first (see
//! [`sort_by_recency`]).

use rust_xlsxwriter::{Color, ExcelDateTime, Format, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::instagram::HarvestError;

use super::model::{COLUMN_NAMES, CommentRecord};
use super::ordering::sort_by_recency;

/// Name of the only worksheet in the workbook.
pub const SHEET_NAME: &str = "Comments";

/// Display width of each column, in record field order.
const COLUMN_WIDTHS: [u16; 6] = [20, 15, 20, 40, 20, 10];

const HEADER_FILL: u32 = 0x00D3_D3D3;

/// Excel number format for the `created_at` cells.
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Builds the workbook and returns the encoded XLSX bytes.
///
/// The input slice is left untouched; a sorted copy is written.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] if the workbook cannot be assembled.
pub fn build_workbook(records: &[CommentRecord]) -> Result<Vec<u8>, HarvestError> {
    let mut sorted = records.to_vec();
    sort_by_recency(&mut sorted);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    write_header(worksheet)?;
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);
    for (index, record) in sorted.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| HarvestError::Io {
            message: "too many rows for a worksheet".to_owned(),
        })?;
        write_row(worksheet, row, record, &datetime_format)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), HarvestError> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);

    for (column, (label, width)) in (0_u16..).zip(COLUMN_NAMES.into_iter().zip(COLUMN_WIDTHS)) {
        worksheet
            .write_string_with_format(0, column, label, &header_format)
            .map_err(xlsx_error)?;
        worksheet
            .set_column_width(column, width)
            .map_err(xlsx_error)?;
    }
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    record: &CommentRecord,
    datetime_format: &Format,
) -> Result<(), HarvestError> {
    let created_at = ExcelDateTime::from_timestamp(record.created_at.timestamp())
        .map_err(xlsx_error)?;
    worksheet
        .write_string(row, 0, &record.comment_id)
        .and_then(|sheet| sheet.write_string(row, 1, &record.user_id))
        .and_then(|sheet| sheet.write_string(row, 2, &record.username))
        .and_then(|sheet| sheet.write_string(row, 3, &record.text))
        .and_then(|sheet| sheet.write_datetime_with_format(row, 4, &created_at, datetime_format))
        .and_then(|sheet| sheet.write_number(row, 5, f64::from(record.likes)))
        .map(|_| ())
        .map_err(xlsx_error)
}

fn xlsx_error(error: XlsxError) -> HarvestError {
    HarvestError::Io {
        message: format!("spreadsheet generation failed: {error}"),
    }
}
