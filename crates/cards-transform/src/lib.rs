//! Card transformation utilities.
//!
//! - **split**: comma splitting for array columns
//! - **normalization**: user and topic vocabulary expansion
//! - **builder**: per-row card assembly

pub mod builder;
pub mod normalization;
pub mod split;

pub use builder::{array_field, build_card, build_cards, scalar_field};
pub use normalization::{normalize_array_column, normalize_topics, normalize_users};
pub use split::{split_text, split_to_array};
