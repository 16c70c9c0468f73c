//! Card assembly: one card per input row.

use cards_model::{ArrayColumn, Card, CellValue, FieldValue, InputTable, Row};
use tracing::{debug, trace};

use crate::normalization::normalize_array_column;
use crate::split::split_to_array;

/// Build every card in input row order. No row is skipped.
pub fn build_cards(table: &InputTable) -> Vec<Card> {
    let array_columns: Vec<&str> = table
        .columns
        .iter()
        .map(String::as_str)
        .filter(|name| ArrayColumn::from_name(name).is_some())
        .collect();
    debug!(
        rows = table.len(),
        columns = table.columns.len(),
        array_columns = ?array_columns,
        "building cards"
    );
    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            trace!(row = index, "building card");
            build_card(&table.columns, row)
        })
        .collect()
}

/// Build a single card from a row whose cells line up with `columns`.
pub fn build_card(columns: &[String], row: &Row) -> Card {
    let mut card = Card::with_capacity(columns.len());
    for (index, name) in columns.iter().enumerate() {
        let cell = row.get(index).unwrap_or(&CellValue::Missing);
        let value = match ArrayColumn::from_name(name) {
            Some(column) => FieldValue::List(array_field(column, cell)),
            None => scalar_field(cell),
        };
        card.insert(name.as_str(), value);
    }
    card
}

/// Split then normalize one array column cell.
pub fn array_field(column: ArrayColumn, cell: &CellValue) -> Vec<String> {
    normalize_array_column(column, split_to_array(cell))
}

/// Copy a scalar cell without coercion; only a missing cell becomes `""`.
pub fn scalar_field(cell: &CellValue) -> FieldValue {
    match cell {
        CellValue::Missing => FieldValue::empty_text(),
        CellValue::Text(value) => FieldValue::Text(value.clone()),
        CellValue::Integer(value) => FieldValue::Integer(*value),
        CellValue::Float(value) => FieldValue::Float(*value),
        CellValue::Bool(value) => FieldValue::Bool(*value),
        CellValue::List(values) => FieldValue::List(values.clone()),
    }
}
