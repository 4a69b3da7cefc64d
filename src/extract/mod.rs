//! URL extraction from cell grids.
//!
//! Scans every text cell of every sheet for URL-like substrings and collects
//! the distinct matches. Non-text cells are never converted or searched.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::{info, warn};
use regex::Regex;

use crate::config::URL_PATTERN;
use crate::models::InputRole;
use crate::workbook::{read_grid, CellGrid};

/// Distinct URLs found in one file.
pub type UrlSet = HashSet<String>;

#[allow(clippy::expect_used)] // URL_PATTERN is a compile-time constant
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"));

/// Finds every URL in a single piece of text, trimmed of surrounding whitespace.
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|url| !url.is_empty())
}

/// Collects the distinct URLs from every text cell of the grid.
pub fn extract_urls(grid: &CellGrid) -> UrlSet {
    grid.cells()
        .filter_map(|cell| cell.as_text())
        .flat_map(find_urls)
        .map(str::to_string)
        .collect()
}

/// URLs from one uploaded file, plus whether the file had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Distinct URLs found in text cells
    pub urls: UrlSet,
    /// The bytes could not be decoded and `urls` is empty as a result
    pub unreadable: bool,
}

/// Decodes a workbook and extracts its URLs.
///
/// A malformed workbook does not fail the comparison: it is logged and
/// reported as an empty, unreadable extraction.
pub fn urls_from_bytes(bytes: &[u8], role: InputRole) -> Extraction {
    match read_grid(bytes) {
        Ok(grid) => {
            let urls = extract_urls(&grid);
            info!(
                "Found {} distinct URLs in {} file ({} sheets)",
                urls.len(),
                role,
                grid.sheets.len()
            );
            Extraction {
                urls,
                unreadable: false,
            }
        }
        Err(e) => {
            warn!("Could not read {role} file, treating it as empty: {e}");
            Extraction {
                urls: UrlSet::new(),
                unreadable: true,
            }
        }
    }
}
