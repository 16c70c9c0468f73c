//! Audience shorthand expansion.

use cards_model::Vocabulary;

/// Expand user shorthand (`pts`, `cps`, `hcps`) to display terms.
///
/// Lookup is case-insensitive; unmapped values keep their original text,
/// casing included. Output has the same length and order as the input.
pub fn normalize_users(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(normalize_user).collect()
}

fn normalize_user(value: String) -> String {
    match Vocabulary::Users.lookup(&value.to_lowercase()) {
        Some(mapped) => mapped.to_string(),
        None => value,
    }
}
