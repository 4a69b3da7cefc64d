//! Spreadsheet containers.
//!
//! Reading uploaded workbooks into a [`CellGrid`] and writing the two-sheet
//! comparison report. Everything format-specific lives here so the extractor
//! and partitioner only see cell values and records.

mod grid;
mod reader;
mod writer;

pub use grid::{Cell, CellGrid, Sheet};
pub use reader::read_grid;
pub use writer::write_report;
