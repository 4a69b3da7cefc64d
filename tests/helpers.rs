// Shared test helpers for building workbooks in memory.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashSet;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use prospect_dedup::Comparison;
use rust_xlsxwriter::Workbook;

/// A cell to place in a generated workbook.
#[allow(dead_code)] // Not every test file uses every variant
pub enum TestCell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

/// Builds xlsx bytes from `(sheet name, rows)` pairs.
pub fn workbook_bytes(sheets: &[(&str, Vec<Vec<TestCell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).expect("valid sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    TestCell::Text(s) => sheet.write_string(r, c, *s),
                    TestCell::Number(n) => sheet.write_number(r, c, *n),
                    TestCell::Bool(b) => sheet.write_boolean(r, c, *b),
                }
                .expect("cell write");
            }
        }
    }
    workbook.save_to_buffer().expect("workbook save")
}

/// Builds a single-sheet workbook with one text cell per row.
pub fn single_column_workbook(values: &[&str]) -> Vec<u8> {
    let rows = values.iter().map(|v| vec![TestCell::Text(v)]).collect();
    workbook_bytes(&[("Sheet1", rows)])
}

/// Reads a report workbook back as sheet name -> rows of strings.
#[allow(dead_code)] // Used by other test files
pub fn read_report(bytes: &[u8]) -> Vec<(String, Vec<Vec<String>>)> {
    let mut workbook =
        open_workbook_auto_from_rs(std::io::Cursor::new(bytes.to_vec())).expect("report opens");
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).expect("sheet range");
        let rows = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect();
        sheets.push((name, rows));
    }
    sheets
}

/// Unique prospect URLs as a set, since output order is not part of the contract.
#[allow(dead_code)]
pub fn unique_set(comparison: &Comparison) -> HashSet<String> {
    comparison.unique.iter().map(|r| r.url.clone()).collect()
}

/// Duplicate `(url, matched_domain)` pairs as a set.
#[allow(dead_code)]
pub fn duplicate_set(comparison: &Comparison) -> HashSet<(String, String)> {
    comparison
        .duplicates
        .iter()
        .map(|r| (r.url.clone(), r.matched_domain.clone()))
        .collect()
}
