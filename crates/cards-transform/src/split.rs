//! Comma splitting for array columns.

use cards_model::CellValue;

/// Convert a delimited cell into a clean list.
///
/// Missing cells give an empty list and pre-split cells are returned as they
/// are. Any other scalar is split on `,` with each piece trimmed and empty
/// pieces dropped. Commas cannot be escaped.
///
/// # Examples
///
/// ```
/// use cards_model::CellValue;
/// use cards_transform::split_to_array;
///
/// assert_eq!(split_to_array(&CellValue::from(" a , ,b ")), vec!["a", "b"]);
/// assert!(split_to_array(&CellValue::Missing).is_empty());
/// ```
pub fn split_to_array(value: &CellValue) -> Vec<String> {
    match value {
        CellValue::Missing => Vec::new(),
        CellValue::List(values) => values.clone(),
        scalar => scalar
            .text_form()
            .map(|text| split_text(&text))
            .unwrap_or_default(),
    }
}

/// Split raw text on commas, trimming pieces and dropping empty ones.
pub fn split_text(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
