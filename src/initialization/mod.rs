//! Application initialization.
//!
//! The comparison core holds no shared resources; the only process-wide setup
//! is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
