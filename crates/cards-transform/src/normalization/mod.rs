//! Vocabulary normalization for array columns.
//!
//! - **users**: audience shorthand expansion, no de-duplication
//! - **topics**: topic label expansion with first-occurrence de-duplication

pub mod topics;
pub mod users;

use cards_model::ArrayColumn;

pub use topics::{dedupe_preserving_order, normalize_topics};
pub use users::normalize_users;

/// Apply the normalization step that belongs to an array column.
///
/// `category` and `language` are split only and pass through unchanged.
pub fn normalize_array_column(column: ArrayColumn, values: Vec<String>) -> Vec<String> {
    match column {
        ArrayColumn::Users => normalize_users(values),
        ArrayColumn::Topics => normalize_topics(values),
        ArrayColumn::Category | ArrayColumn::Language => values,
    }
}
