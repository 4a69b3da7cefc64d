//! Front-end helpers used by the binary.

pub mod statistics;

// Re-export public API
pub use statistics::{print_comparison_statistics, print_simple_summary};
