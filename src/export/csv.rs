//! CSV export functionality.
//!
//! One row per classified prospect with columns
//! `classification,url,matched_domain`; the domain is blank for unique rows.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use super::export_records;
use crate::models::Comparison;

/// Writes the comparison as CSV, returning the number of data rows.
pub fn write_csv<W: Write>(comparison: &Comparison, out: W) -> Result<usize> {
    let mut writer = Writer::from_writer(out);
    writer
        .write_record(["classification", "url", "matched_domain"])
        .context("Failed to write CSV header")?;

    let mut count = 0;
    for record in export_records(comparison) {
        writer
            .write_record([
                record.classification,
                record.url,
                record.matched_domain.unwrap_or(""),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", record.url))?;
        count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(count)
}
