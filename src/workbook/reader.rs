//! Workbook decoding.
//!
//! Turns uploaded bytes into a [`CellGrid`]. The container format (xlsx, xlsm,
//! xlsb, xls, ods) is sniffed by calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::{debug, warn};

use super::grid::{Cell, CellGrid, Sheet};
use crate::error_handling::ContainerError;

/// Reads every sheet of a workbook into memory.
///
/// A sheet that fails to decode is logged and skipped so the remaining sheets
/// still contribute.
///
/// # Errors
///
/// Returns `ContainerError::Malformed` if the bytes are not a readable workbook.
pub fn read_grid(bytes: &[u8]) -> Result<CellGrid, ContainerError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        match workbook.worksheet_range(&name) {
            Ok(range) => {
                let rows: Vec<Vec<Cell>> = range
                    .rows()
                    .map(|row| row.iter().map(to_cell).collect())
                    .collect();
                debug!("Read sheet '{}' ({} rows)", name, rows.len());
                sheets.push(Sheet::new(name, rows));
            }
            Err(source) => {
                let err = ContainerError::Sheet {
                    sheet: name,
                    source,
                };
                warn!("Skipping sheet: {err}");
            }
        }
    }

    Ok(CellGrid::new(sheets))
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        _ => Cell::Other,
    }
}
