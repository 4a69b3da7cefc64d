//! In-memory cell grid of one spreadsheet.

/// A single cell value as read from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell
    Empty,
    /// String cell; the only kind searched for URLs
    Text(String),
    /// Integer or floating point cell
    Number(f64),
    /// Boolean cell
    Bool(bool),
    /// Dates, durations and formula errors
    Other,
}

impl Cell {
    /// Returns the cell's string content, or `None` for every non-text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// One named sheet: rows of columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    /// Sheet name as shown on its tab
    pub name: String,
    /// Rows of the used range, each a list of columns
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates a sheet from its name and rows.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }
}

/// All sheets of a workbook, in workbook order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGrid {
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

impl CellGrid {
    /// Creates a grid from its sheets.
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Iterates every cell of every sheet.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.sheets.iter().flat_map(Sheet::cells)
    }

    /// Names of all sheets, in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}
