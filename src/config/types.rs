//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::DEFAULT_REPORT_FILE;
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid value for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use prospect_dedup::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     existing: PathBuf::from("clients.xlsx"),
///     prospect: PathBuf::from("leads.xlsx"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet holding the URLs already on file
    pub existing: PathBuf,

    /// Spreadsheet holding the URLs to check
    pub prospect: PathBuf,

    /// Report output path
    pub output: PathBuf,

    /// Report format
    pub format: ExportFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Print the comparison summary at the end of the run
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            existing: PathBuf::from("existing.xlsx"),
            prospect: PathBuf::from("prospects.xlsx"),
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            format: ExportFormat::Xlsx,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            show_stats: false,
        }
    }
}

impl Config {
    /// Checks the paths for mistakes that would make the run meaningless or
    /// destroy an input.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.existing.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "existing",
                "a path to the existing spreadsheet is required",
            ));
        }
        if self.prospect.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "prospect",
                "a path to the prospect spreadsheet is required",
            ));
        }
        if self.existing == self.prospect {
            return Err(ConfigValidationError::new(
                "prospect",
                "must differ from the existing spreadsheet; comparing a file with itself marks every prospect as a duplicate",
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "output",
                "a report output path is required",
            ));
        }
        if self.output == self.existing || self.output == self.prospect {
            return Err(ConfigValidationError::new(
                "output",
                format!(
                    "'{}' is one of the input files and would be overwritten",
                    self.output.display()
                ),
            ));
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// prospect_dedup clients.xlsx leads.xlsx
///
/// # Custom report path and format
/// prospect_dedup clients.xlsx leads.xlsx --output report.csv --format csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "prospect_dedup",
    version,
    about = "Splits a prospect spreadsheet into unique and already-known domains."
)]
pub struct Opt {
    /// Spreadsheet with the URLs already on file
    #[arg(value_parser)]
    pub existing: PathBuf,

    /// Spreadsheet with the prospect URLs to check
    #[arg(value_parser)]
    pub prospect: PathBuf,

    /// Report output path
    #[arg(short, long, value_parser, default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Report format: xlsx|csv|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print a summary of the comparison at the end of the run
    #[arg(long)]
    pub show_stats: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            existing: opt.existing,
            prospect: opt.prospect,
            output: opt.output,
            format: opt.format,
            log_level: opt.log_level,
            log_format: opt.log_format,
            show_stats: opt.show_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("Unique_Prospects_Report.xlsx"));
        assert_eq!(config.format, ExportFormat::Xlsx);
        assert!(!config.show_stats);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_same_input_twice() {
        let config = Config {
            existing: PathBuf::from("list.xlsx"),
            prospect: PathBuf::from("list.xlsx"),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "prospect");
    }

    #[test]
    fn test_validate_rejects_output_over_input() {
        let config = Config {
            output: PathBuf::from("existing.xlsx"),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "output");
        assert!(err.message.contains("overwritten"));
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = Config {
            existing: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "existing");

        let config = Config {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "output");
    }

    #[test]
    fn test_opt_parses_positional_inputs() {
        let opt = Opt::try_parse_from([
            "prospect_dedup",
            "clients.xlsx",
            "leads.xlsx",
            "--format",
            "jsonl",
            "--show-stats",
        ])
        .unwrap();
        let config = Config::from(opt);
        assert_eq!(config.existing, PathBuf::from("clients.xlsx"));
        assert_eq!(config.prospect, PathBuf::from("leads.xlsx"));
        assert_eq!(config.format, ExportFormat::Jsonl);
        assert_eq!(config.output, PathBuf::from(DEFAULT_REPORT_FILE));
        assert!(config.show_stats);
    }

    #[test]
    fn test_opt_requires_both_inputs() {
        assert!(Opt::try_parse_from(["prospect_dedup", "clients.xlsx"]).is_err());
    }
}
