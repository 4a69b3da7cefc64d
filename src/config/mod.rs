//! Application configuration and constants.
//!
//! This module provides:
//! - Report layout and extraction constants
//! - Library configuration and its validation
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
