//! Export functionality for comparison results.
//!
//! The default output is the two-sheet workbook from [`crate::workbook`].
//! CSV and JSONL flatten both lists into one stream tagged by classification,
//! duplicates first.

mod csv;
mod jsonl;
mod types;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::models::Comparison;
use crate::workbook::write_report;

pub use self::csv::write_csv;
pub use self::jsonl::write_jsonl;
pub use types::{ExportFormat, ExportRecord};

/// Flattens a comparison into export records: duplicates, then unique prospects.
pub fn export_records(comparison: &Comparison) -> impl Iterator<Item = ExportRecord<'_>> {
    let duplicates = comparison.duplicates.iter().map(|r| ExportRecord {
        classification: types::DUPLICATE_CLASSIFICATION,
        url: &r.url,
        matched_domain: Some(&r.matched_domain),
    });
    let unique = comparison.unique.iter().map(|r| ExportRecord {
        classification: types::UNIQUE_CLASSIFICATION,
        url: &r.url,
        matched_domain: None,
    });
    duplicates.chain(unique)
}

/// Writes the comparison to `output` in the requested format.
///
/// # Returns
///
/// Returns the number of records exported, or an error if the file cannot be
/// written.
pub fn export_report(comparison: &Comparison, output: &Path, format: ExportFormat) -> Result<usize> {
    let bytes = match format {
        ExportFormat::Xlsx => write_report(comparison).context("Failed to build report workbook")?,
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(comparison, &mut buf).context("Failed to build CSV report")?;
            buf
        }
        ExportFormat::Jsonl => {
            let mut buf = Vec::new();
            write_jsonl(comparison, &mut buf).context("Failed to build JSONL report")?;
            buf
        }
    };

    std::fs::write(output, bytes)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    let count = comparison.record_count();
    info!("Wrote {} records to {} ({})", count, output.display(), format);
    Ok(count)
}
