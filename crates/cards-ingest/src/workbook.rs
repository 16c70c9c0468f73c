//! Spreadsheet workbook reading (xlsx, xlsm, xlsb, xls, ods).

use std::path::Path;

use calamine::{CellErrorType, Data, DataType, Range, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, warn};

use cards_model::{CellValue, InputTable, Row};

use crate::cells::{number_cell, text_cell};
use crate::error::{IngestError, Result};
use crate::header::build_headers;
use crate::options::LoadOptions;

/// Read one worksheet into an input table.
///
/// The first non-blank row is the header. Every later row inside the used
/// range is a data row, blank or not; only trailing blank rows are dropped.
pub fn read_workbook_table(path: &Path, options: &LoadOptions) -> Result<InputTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet_names = workbook.sheet_names();
    let index = match &options.sheet {
        Some(name) => sheet_names.iter().position(|sheet| sheet == name),
        None => (!sheet_names.is_empty()).then_some(0),
    };
    let Some(index) = index else {
        return Err(IngestError::NoSheet {
            path: path.to_path_buf(),
            sheet: options.sheet.clone().unwrap_or_else(|| "(first)".to_string()),
        });
    };
    let sheet = &sheet_names[index];
    if sheet_names.len() > 1 && options.sheet.is_none() {
        debug!(sheet = %sheet, available = sheet_names.len(), "reading first worksheet");
    }
    let range = workbook
        .worksheet_range_at(index)
        .ok_or_else(|| IngestError::NoSheet {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet {sheet}: {e}"),
        })?;
    Ok(range_to_table(&range, options))
}

/// Convert a worksheet range into an input table.
pub fn range_to_table(range: &Range<Data>, options: &LoadOptions) -> InputTable {
    // Columns left of the used range are still columns of the sheet.
    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows().map(|cells| {
        let mut row: Vec<CellValue> = vec![CellValue::Missing; offset];
        row.extend(cells.iter().map(|cell| workbook_cell(cell, options)));
        (cells, Row::new(row))
    });

    let Some((header_cells, _)) = rows.find(|(_, row)| !row.is_blank()) else {
        warn!("worksheet has no header row");
        return InputTable::default();
    };
    let mut raw_headers: Vec<Option<String>> = vec![None; offset];
    raw_headers.extend(header_cells.iter().map(header_text));
    let mut table = InputTable::new(build_headers(raw_headers));

    let mut data: Vec<Row> = rows.map(|(_, row)| row).collect();
    while data.last().is_some_and(Row::is_blank) {
        data.pop();
    }
    for row in data {
        table.push_row(row);
    }
    promote_numeric_columns(&mut table);
    table
}

/// Give purely numeric columns a single number type.
///
/// Whole numbers stay integers only when every cell in the column is a
/// whole number. A blank cell or a fractional value anywhere in an
/// otherwise numeric column turns the whole column into floats, so a year
/// column with gaps writes `2024.0`. Columns that also hold text or
/// booleans keep each cell as read.
fn promote_numeric_columns(table: &mut InputTable) {
    for (idx, name) in table.columns.iter().enumerate() {
        let (mut numbers, mut fractional, mut missing) = (0usize, false, false);
        let mut numeric = true;
        for row in &table.rows {
            match row.get(idx) {
                Some(CellValue::Integer(_)) => numbers += 1,
                Some(CellValue::Float(_)) => {
                    numbers += 1;
                    fractional = true;
                }
                Some(CellValue::Missing) | None => missing = true,
                Some(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric || numbers == 0 || !(fractional || missing) {
            continue;
        }
        debug!(column = %name, "numeric column read as floats");
        for cell in table.rows.iter_mut().filter_map(|row| row.cells.get_mut(idx)) {
            if let CellValue::Integer(value) = *cell {
                *cell = CellValue::Float(value as f64);
            }
        }
    }
}

/// Convert one workbook cell.
pub fn workbook_cell(cell: &Data, options: &LoadOptions) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(value) => text_cell(value, options),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => number_cell(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(datetime) => CellValue::Text(format_datetime(datetime)),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::Text(value.clone()),
        Data::Error(CellErrorType::NA) => CellValue::Missing,
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

/// Dates without a time of day print as `YYYY-MM-DD`.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 && datetime.nanosecond() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => Some(value.clone()),
        Data::Float(value) => number_cell(*value).text_form(),
        other => Some(other.to_string()),
    }
}
