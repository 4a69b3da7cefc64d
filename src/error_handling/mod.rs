//! Error handling.
//!
//! Errors are split by where they are handled:
//! - **Surfaced**: `CompareError` reaches the caller and fails the request
//! - **Recovered**: `ContainerError` is logged and degrades to an empty URL set
//! - **Setup**: `InitializationError` and `ReportError` belong to the front-end

mod types;

// Re-export public API
pub use types::{CompareError, ContainerError, InitializationError, ReportError};
