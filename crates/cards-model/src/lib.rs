pub mod card;
pub mod columns;
pub mod table;
pub mod vocab;

pub use card::{Card, FieldValue};
pub use columns::{ARRAY_COLUMNS, ArrayColumn};
pub use table::{CellValue, InputTable, Row};
pub use vocab::{TOPIC_ENTRIES, USER_ENTRIES, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_serializes_in_insertion_order() {
        let mut card = Card::new();
        card.insert("title", FieldValue::Text("Guide".to_string()));
        card.insert("users", FieldValue::List(vec!["patients".to_string()]));
        card.insert("id", FieldValue::Integer(7));
        let json = serde_json::to_string(&card).expect("serialize card");
        assert_eq!(json, r#"{"title":"Guide","users":["patients"],"id":7}"#);
    }

    #[test]
    fn non_finite_float_is_a_serialization_error() {
        let mut card = Card::new();
        card.insert("score", FieldValue::Float(f64::NAN));
        assert!(serde_json::to_string(&card).is_err());
    }

    #[test]
    fn table_pads_short_rows() {
        let mut table = InputTable::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(Row::new(vec![CellValue::from("x")]));
        assert_eq!(table.cell(0, "b"), Some(&CellValue::Missing));
    }
}
