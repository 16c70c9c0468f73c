//! Raw cell conversion shared by the workbook and CSV readers.

use cards_model::CellValue;

use crate::options::LoadOptions;

/// Text values read as empty cells when sentinel detection is on.
pub const NA_SENTINELS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Exact, case-sensitive sentinel match; surrounding whitespace is significant.
pub fn is_na_sentinel(value: &str) -> bool {
    NA_SENTINELS.contains(&value)
}

/// Text cell, or `Missing` for an empty or sentinel value.
pub fn text_cell(value: &str, options: &LoadOptions) -> CellValue {
    if value.is_empty() || (options.na_sentinels && is_na_sentinel(value)) {
        CellValue::Missing
    } else {
        CellValue::Text(value.to_string())
    }
}

/// Spreadsheets store every number as a float; whole numbers come back as
/// integers.
pub fn number_cell(value: f64) -> CellValue {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        CellValue::Integer(value as i64)
    } else {
        CellValue::Float(value)
    }
}
