//! prospect_dedup library: spreadsheet URL comparison
//!
//! Extracts every URL from two spreadsheets, reduces each to its root domain,
//! and splits the prospect URLs into those whose domain is new and those whose
//! domain is already present in the existing list.
//!
//! # Example
//!
//! ```no_run
//! use prospect_dedup::compare;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let existing = std::fs::read("clients.xlsx")?;
//! let prospects = std::fs::read("leads.xlsx")?;
//!
//! let comparison = compare(&existing, &prospects)?;
//! println!(
//!     "{} unique, {} duplicate",
//!     comparison.unique.len(),
//!     comparison.duplicates.len()
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod domain;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
mod models;
pub mod partition;
pub mod workbook;

// Re-export public API
pub use app::{print_comparison_statistics, print_simple_summary};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use domain::root_domain;
pub use error_handling::CompareError;
pub use models::{Comparison, ComparisonStats, DuplicateProspect, InputRole, UniqueProspect};
pub use run::{compare, run_comparison, RunReport};

// Internal run module (contains the comparison pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::{Path, PathBuf};

    use crate::config::Config;
    use crate::error_handling::CompareError;
    use crate::export::export_report;
    use crate::extract::urls_from_bytes;
    use crate::models::{Comparison, ComparisonStats, InputRole};
    use crate::partition::{domain_set, partition};

    /// Results of a comparison run driven by a [`Config`].
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// The classified prospects and counters
        pub comparison: Comparison,
        /// Number of records written to the report
        pub records_written: usize,
        /// Where the report was written
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl RunReport {
        /// One-line confirmation naming the record count and the report path.
        pub fn saved_message(&self) -> String {
            format!(
                "Wrote {} record{} to {}",
                self.records_written,
                if self.records_written == 1 { "" } else { "s" },
                self.output.display()
            )
        }
    }

    /// Compares a prospect workbook against an existing workbook.
    ///
    /// Both arguments are the raw bytes of an uploaded spreadsheet. A file
    /// that cannot be decoded contributes no URLs (and is flagged in
    /// [`ComparisonStats`]) instead of failing the comparison.
    ///
    /// # Errors
    ///
    /// Returns `CompareError::MissingInput` if either byte stream is empty.
    pub fn compare(existing: &[u8], prospect: &[u8]) -> Result<Comparison, CompareError> {
        if existing.is_empty() {
            return Err(CompareError::MissingInput(InputRole::Existing));
        }
        if prospect.is_empty() {
            return Err(CompareError::MissingInput(InputRole::Prospect));
        }

        let mut stats = ComparisonStats::default();

        let existing = urls_from_bytes(existing, InputRole::Existing);
        if existing.unreadable {
            stats.mark_unreadable(InputRole::Existing);
        }
        let existing_domains = domain_set(&existing.urls);

        let prospects = urls_from_bytes(prospect, InputRole::Prospect);
        if prospects.unreadable {
            stats.mark_unreadable(InputRole::Prospect);
        }

        let result = partition(&existing_domains, &prospects.urls);

        stats.existing_urls = existing.urls.len();
        stats.existing_domains = existing_domains.len();
        stats.prospect_urls = prospects.urls.len();
        stats.dropped = result.dropped;

        info!(
            "Partitioned {} prospects: {} unique, {} duplicate, {} dropped",
            stats.prospect_urls,
            result.unique.len(),
            result.duplicates.len(),
            result.dropped
        );

        Ok(Comparison {
            unique: result.unique,
            duplicates: result.duplicates,
            stats,
        })
    }

    fn read_input(path: &Path, role: InputRole) -> Result<Vec<u8>> {
        std::fs::read(path)
            .with_context(|| format!("Failed to read {} file: {}", role, path.display()))
    }

    /// Runs a full comparison from files on disk and writes the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, an input file cannot
    /// be read or is empty, or the report cannot be written.
    pub fn run_comparison(config: &Config) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;

        let start_time = std::time::Instant::now();

        let existing = read_input(&config.existing, InputRole::Existing)?;
        let prospect = read_input(&config.prospect, InputRole::Prospect)?;

        let comparison = compare(&existing, &prospect)?;
        let records_written = export_report(&comparison, &config.output, config.format)?;

        Ok(RunReport {
            comparison,
            records_written,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

}
