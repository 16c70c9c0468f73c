//! CSV reading with per-column number inference.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use cards_model::{CellValue, InputTable, Row};

use crate::cells::text_cell;
use crate::error::{IngestError, Result};
use crate::header::{build_headers, strip_bom};
use crate::options::LoadOptions;

/// Inferred type of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

/// Read a CSV file into an input table.
///
/// The first non-blank record is the header. Later records are data rows,
/// including ones made only of separators such as `,,`. A column whose
/// present cells all parse as integers, finite floats or booleans takes that
/// type; an integer column with blank cells becomes a float column.
pub fn read_csv_table(path: &Path, options: &LoadOptions) -> Result<InputTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;

    let mut raw_header: Option<Vec<String>> = None;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if raw_header.is_none() {
            if !row.iter().all(String::is_empty) {
                raw_header = Some(row);
            }
        } else if !is_empty_line(&row) {
            raw_rows.push(row);
        }
    }
    let Some(raw_header) = raw_header else {
        return Ok(InputTable::default());
    };

    let headers = build_headers(
        raw_header
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let value = if idx == 0 { strip_bom(value) } else { value };
                Some(value.to_string())
            })
            .collect(),
    );
    let width = headers.len();
    let mut cells: Vec<Vec<CellValue>> = raw_rows
        .iter()
        .map(|row| {
            (0..width)
                .map(|idx| text_cell(row.get(idx).map_or("", String::as_str), options))
                .collect()
        })
        .collect();

    for (idx, name) in headers.iter().enumerate() {
        let kind = infer_column_kind(cells.iter().map(|row| &row[idx]));
        if kind != ColumnKind::Text {
            debug!(column = %name, kind = ?kind, "typed csv column");
            for row in &mut cells {
                row[idx] = convert_cell(&row[idx], kind);
            }
        }
    }

    let mut table = InputTable::new(headers);
    for row in cells {
        table.push_row(Row::new(row));
    }
    Ok(table)
}

/// Pick the narrowest type that every present cell in a column fits.
pub fn infer_column_kind<'a, I>(cells: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let (mut present, mut missing) = (0usize, false);
    let (mut integers, mut floats, mut bools) = (0usize, 0usize, 0usize);
    for cell in cells {
        let CellValue::Text(value) = cell else {
            missing |= cell.is_missing();
            continue;
        };
        present += 1;
        let trimmed = value.trim();
        if trimmed.parse::<i64>().is_ok() {
            integers += 1;
        }
        if parse_finite(trimmed).is_some() {
            floats += 1;
        }
        if parse_bool(trimmed).is_some() {
            bools += 1;
        }
    }
    if present == 0 {
        ColumnKind::Text
    } else if integers == present && !missing {
        ColumnKind::Integer
    } else if floats == present {
        ColumnKind::Float
    } else if bools == present {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

fn convert_cell(cell: &CellValue, kind: ColumnKind) -> CellValue {
    let CellValue::Text(value) = cell else {
        return cell.clone();
    };
    let trimmed = value.trim();
    let converted = match kind {
        ColumnKind::Integer => trimmed.parse::<i64>().ok().map(CellValue::Integer),
        ColumnKind::Float => parse_finite(trimmed).map(CellValue::Float),
        ColumnKind::Bool => parse_bool(trimmed).map(CellValue::Bool),
        ColumnKind::Text => None,
    };
    converted.unwrap_or_else(|| cell.clone())
}

/// A line holding at most one blank field carries no cells at all.
fn is_empty_line(row: &[String]) -> bool {
    row.len() <= 1 && row.iter().all(|field| field.trim().is_empty())
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|value| CellValue::from(*value)).collect()
    }

    #[test]
    fn integers_with_gaps_are_floats() {
        let mut cells = texts(&["1", " 2"]);
        assert_eq!(infer_column_kind(&cells), ColumnKind::Integer);
        cells.push(CellValue::Missing);
        assert_eq!(infer_column_kind(&cells), ColumnKind::Float);
    }

    #[test]
    fn mixed_numbers_are_floats() {
        assert_eq!(infer_column_kind(&texts(&["1", "2.5"])), ColumnKind::Float);
    }

    #[test]
    fn infinity_stays_text() {
        assert_eq!(infer_column_kind(&texts(&["1", "inf"])), ColumnKind::Text);
    }

    #[test]
    fn booleans_and_text() {
        assert_eq!(infer_column_kind(&texts(&["True", "false"])), ColumnKind::Bool);
        assert_eq!(infer_column_kind(&texts(&["1", "x"])), ColumnKind::Text);
        assert_eq!(infer_column_kind(&[CellValue::Missing]), ColumnKind::Text);
    }
}
