//! Header row naming.

use std::collections::BTreeSet;

use tracing::debug;

/// Turn raw header cells into unique column names.
///
/// Blank cells become `Unnamed: <index>`. A repeated name gets a `.1`, `.2`,
/// ... suffix, skipping any suffix already taken. Names are otherwise kept
/// verbatim.
pub fn build_headers(raw: Vec<Option<String>>) -> Vec<String> {
    let mut taken: BTreeSet<String> = BTreeSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (index, cell) in raw.into_iter().enumerate() {
        let base = match cell {
            Some(name) if !name.is_empty() => name,
            _ => format!("Unnamed: {index}"),
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while taken.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        if name != base {
            debug!(column = index, original = %base, renamed = %name, "renamed duplicate header");
        }
        taken.insert(name.clone());
        headers.push(name);
    }
    headers
}

/// Strip a UTF-8 byte order mark from the first header cell.
pub fn strip_bom(value: &str) -> &str {
    value.strip_prefix('\u{feff}').unwrap_or(value)
}
