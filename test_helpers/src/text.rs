//! Inspection helpers for generated property documents.

/// Keys of a property document in line order.
///
/// Lines without `=` are ignored.
#[must_use]
pub fn document_keys(document: &str) -> Vec<&str> {
    document
        .split('\n')
        .filter_map(|line| line.split_once('=').map(|(key, _)| key))
        .collect()
}

/// Whether the lines of `document` are in ascending key order with no
/// repeated keys.
#[must_use]
pub fn is_sorted_by_key(document: &str) -> bool {
    document_keys(document)
        .windows(2)
        .all(|pair| matches!(pair, [a, b] if a < b))
}

/// Removes Unicode bidi isolate markers a Fluent bundle inserts around
/// placeables when isolation is enabled.
#[must_use]
pub fn strip_isolates(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(*ch, '\u{2068}' | '\u{2069}'))
        .collect()
}
