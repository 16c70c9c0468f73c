//! Tests for user and topic vocabulary normalization.

use cards_model::ArrayColumn;
use cards_transform::{normalize_array_column, normalize_topics, normalize_users};
use proptest::prelude::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn users_expand_case_insensitively() {
    assert_eq!(
        normalize_users(strings(&["PTS", "hcps", "xyz"])),
        vec!["patients", "clinicians", "xyz"]
    );
}

#[test]
fn unmapped_users_keep_original_casing() {
    assert_eq!(
        normalize_users(strings(&["Cps", "Researchers", " pts"])),
        vec!["carepartners", "Researchers", " pts"]
    );
}

#[test]
fn users_are_not_deduplicated() {
    assert_eq!(
        normalize_users(strings(&["pts", "PTS", "pts"])),
        vec!["patients", "patients", "patients"]
    );
}

#[test]
fn topics_collapse_duplicates_after_mapping() {
    assert_eq!(
        normalize_topics(strings(&["Feeding", "feeding", "Unknown Topic"])),
        vec!["Feeding Assistance Decisions", "Unknown Topic"]
    );
}

#[test]
fn topics_lookup_trims_key() {
    assert_eq!(
        normalize_topics(strings(&["  legacy work ", "Benefits/Timing/Who Provides"])),
        vec!["Legacy Work", "Benefits, Timing, and Who Provides It"]
    );
}

#[test]
fn topics_keep_first_seen_order() {
    assert_eq!(
        normalize_topics(strings(&["differences", "definitions", "Differences"])),
        vec![
            "How Palliative Care and Hospice are Different",
            "Definitions"
        ]
    );
}

#[test]
fn category_and_language_pass_through() {
    let values = strings(&["pts", "feeding", "pts"]);
    assert_eq!(
        normalize_array_column(ArrayColumn::Category, values.clone()),
        values
    );
    assert_eq!(
        normalize_array_column(ArrayColumn::Language, values.clone()),
        values
    );
}

proptest! {
    #[test]
    fn users_preserve_length(values in proptest::collection::vec("[a-zA-Z ]{0,8}", 0..12)) {
        let len = values.len();
        prop_assert_eq!(normalize_users(values).len(), len);
    }

    #[test]
    fn topics_never_repeat(values in proptest::collection::vec("(feeding|Feeding|definitions|other|Other)", 0..12)) {
        let result = normalize_topics(values);
        let mut seen = std::collections::BTreeSet::new();
        for value in &result {
            prop_assert!(seen.insert(value.clone()));
        }
    }
}
