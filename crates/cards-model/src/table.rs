#![deny(unsafe_code)]

/// A raw spreadsheet cell, before any card normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Already-split values; array columns pass these through untouched.
    List(Vec<String>),
    Missing,
}

impl CellValue {
    /// Only a true empty cell counts as missing. `0`, `false` and non-empty
    /// text are values.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text form of a scalar cell, as used when splitting delimited columns.
    ///
    /// Returns `None` for `Missing` and `List` cells.
    pub fn text_form(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Float(value) => Some(format_float(*value)),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            Self::List(_) | Self::Missing => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// Integral floats keep a trailing `.0` so they read as floats when split.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// One data row; cells are positional and line up with [`InputTable::columns`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_missing)
    }
}

/// The whole input sheet: header-defined columns plus data rows in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl InputTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with `Missing` and dropping cells
    /// beyond the header width.
    pub fn push_row(&mut self, mut row: Row) {
        row.cells.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell lookup by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}
