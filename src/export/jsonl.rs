//! JSONL export functionality.
//!
//! Each line is one classified prospect, e.g.
//! `{"classification":"duplicate","url":"http://a.com/y","matched_domain":"a.com"}`.

use std::io::Write;

use anyhow::{Context, Result};

use super::export_records;
use crate::models::Comparison;

/// Writes the comparison as JSON Lines, returning the number of lines written.
pub fn write_jsonl<W: Write>(comparison: &Comparison, mut out: W) -> Result<usize> {
    let mut count = 0;
    for record in export_records(comparison) {
        let line = serde_json::to_string(&record)
            .with_context(|| format!("Failed to serialize record for {}", record.url))?;
        writeln!(out, "{line}").context("Failed to write JSONL line")?;
        count += 1;
    }
    out.flush().context("Failed to flush JSONL output")?;
    Ok(count)
}
