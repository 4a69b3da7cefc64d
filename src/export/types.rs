//! Export types.

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Report output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Two-sheet workbook (default)
    Xlsx,
    /// One flat table with a classification column
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

/// A flattened report line used by the csv and jsonl exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord<'a> {
    /// `unique` or `duplicate`
    pub classification: &'static str,
    /// The prospect URL
    pub url: &'a str,
    /// The existing domain it matched, for duplicates only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_domain: Option<&'a str>,
}

pub(crate) const UNIQUE_CLASSIFICATION: &str = "unique";
pub(crate) const DUPLICATE_CLASSIFICATION: &str = "duplicate";
