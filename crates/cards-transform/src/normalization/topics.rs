//! Topic label expansion.

use std::collections::BTreeSet;

use cards_model::Vocabulary;

/// Expand shorthand topic labels into their display phrases, then drop
/// repeats keeping the first occurrence.
///
/// The lookup key is the trimmed, lowercased value. A value with no mapping
/// is kept exactly as given, surrounding whitespace included.
pub fn normalize_topics(values: Vec<String>) -> Vec<String> {
    dedupe_preserving_order(values.into_iter().map(expand_topic))
}

fn expand_topic(value: String) -> String {
    let key = value.trim().to_lowercase();
    match Vocabulary::Topics.lookup(&key) {
        Some(mapped) => mapped.to_string(),
        None => value,
    }
}

/// Stable de-duplication by exact string equality.
pub fn dedupe_preserving_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = BTreeSet::new();
    let mut result = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            result.push(value);
        }
    }
    result
}
