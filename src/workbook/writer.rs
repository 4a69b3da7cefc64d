//! Report workbook encoding.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::config::{DUPLICATE_HEADERS, DUPLICATE_SHEET_NAME, UNIQUE_SHEET_NAME, UNIQUE_URL_HEADER};
use crate::error_handling::ReportError;
use crate::models::Comparison;

/// Encodes a comparison as a two-sheet xlsx workbook.
///
/// Sheet one lists the unique prospects, sheet two the duplicates. Each sheet
/// starts with a header row, except that a sheet with no records is left
/// completely empty.
///
/// # Errors
///
/// Returns `ReportError::Workbook` if a value exceeds xlsx limits or the
/// workbook cannot be serialized.
pub fn write_report(comparison: &Comparison) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();

    write_sheet(
        &mut workbook,
        UNIQUE_SHEET_NAME,
        &[UNIQUE_URL_HEADER],
        comparison.unique.iter().map(|r| vec![r.url.as_str()]),
    )?;
    write_sheet(
        &mut workbook,
        DUPLICATE_SHEET_NAME,
        &DUPLICATE_HEADERS,
        comparison
            .duplicates
            .iter()
            .map(|r| vec![r.url.as_str(), r.matched_domain.as_str()]),
    )?;

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet<'a>(
    workbook: &mut Workbook,
    name: &str,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    let mut rows = rows.peekable();
    if rows.peek().is_none() {
        return Ok(());
    }

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, column(col)?, *header)?;
    }
    for (index, values) in rows.enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, value) in values.into_iter().enumerate() {
            sheet.write_string(row, column(col)?, value)?;
        }
    }
    Ok(())
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}
