//! Unit tests for the property codec.

use rstest::rstest;

use super::ConfigLayer;

#[test]
fn skips_lines_without_separator() {
    let layer = ConfigLayer::parse("a=1\nbadline\nb=2");
    let expected: ConfigLayer = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(layer, expected);
}

#[rstest]
#[case("key=a=b", "key", "a=b")]
#[case("empty=", "empty", "")]
#[case("=orphan", "", "orphan")]
#[case(" spaced = value ", " spaced ", " value ")]
fn splits_at_first_separator(#[case] line: &str, #[case] key: &str, #[case] value: &str) {
    let layer = ConfigLayer::parse(line);
    assert_eq!(layer.len(), 1);
    assert_eq!(layer.get(key), Some(value));
}

#[test]
fn last_duplicate_wins() {
    let layer = ConfigLayer::parse("a=1\na=2");
    assert_eq!(layer.get("a"), Some("2"));
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("no separators here")]
fn degenerate_documents_parse_empty(#[case] text: &str) {
    assert!(ConfigLayer::parse(text).is_empty());
}

#[test]
fn serialises_sorted_without_trailing_newline() {
    let layer: ConfigLayer = [("zeta", "1"), ("alpha", "2"), ("mid", "3")]
        .into_iter()
        .collect();
    assert_eq!(layer.to_document(), "alpha=2\nmid=3\nzeta=1");
    assert_eq!(layer.to_string(), layer.to_document());
}

#[test]
fn empty_layer_serialises_to_empty_string() {
    assert_eq!(ConfigLayer::new().to_document(), "");
}
