//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

use crate::models::InputRole;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// An uploaded file could not be decoded as a workbook.
///
/// The extractor recovers from this by treating the file as having no URLs.
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The bytes are not a workbook format we can read.
    #[error("Malformed workbook: {0}")]
    Malformed(#[from] calamine::Error),

    /// The workbook opened but one of its sheets could not be read.
    #[error("Unreadable sheet '{sheet}': {source}")]
    Sheet {
        /// Name of the sheet that failed
        sheet: String,
        /// Decoder error for that sheet
        #[source]
        source: calamine::Error,
    },
}

/// Error types for producing the report workbook.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The xlsx writer rejected a sheet name, a cell, or the final save.
    #[error("Report workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Errors surfaced to the caller of `compare`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// One of the two source files was not supplied or is empty.
    #[error("Missing input: the {0} file is required")]
    MissingInput(InputRole),
}
