//! Tests for the Unicode symbol table

use glyphlint::core::models::Severity;
use glyphlint::core::symbols::{DenylistError, SymbolCategory, SymbolTable, is_modifier};

#[test]
fn test_builtin_covers_supplementary_plane() {
    let table = SymbolTable::builtin();
    // Emoticons, transport, supplemental symbols, extended-A
    for c in ['\u{1F600}', '\u{1F680}', '\u{1F97A}', '\u{1FAE0}'] {
        let entry = table.classify(c).unwrap_or_else(|| panic!("{c:?} should be denylisted"));
        assert_eq!(entry.category, SymbolCategory::Emoji);
    }
}

#[test]
fn test_builtin_separates_symbols_from_emoji() {
    let table = SymbolTable::builtin();
    assert_eq!(table.classify('\u{2764}').unwrap().category, SymbolCategory::DisallowedSymbol);
    assert_eq!(table.classify('\u{1F525}').unwrap().category, SymbolCategory::Emoji);
}

#[test]
fn test_ordinary_text_is_never_classified() {
    let table = SymbolTable::builtin();
    for c in ['a', 'Z', '0', '_', ' ', '\n', '\u{00E9}', '\u{4E2D}', '\u{0416}'] {
        assert!(table.classify(c).is_none(), "{c:?} must not be flagged");
    }
}

#[test]
fn test_range_boundaries_are_inclusive() {
    let table = SymbolTable::builtin();
    assert!(table.classify('\u{1F600}').is_some());
    assert!(table.classify('\u{1F64F}').is_some());
    assert!(table.classify('\u{1F650}').is_none());
}

#[test]
fn test_modifier_code_points() {
    assert!(is_modifier('\u{200D}'));
    assert!(is_modifier('\u{FE0F}'));
    assert!(is_modifier('\u{FE00}'));
    assert!(is_modifier('\u{1F3FB}'));
    assert!(is_modifier('\u{1F3FF}'));
    assert!(!is_modifier('\u{1F600}'));
    assert!(!is_modifier('a'));
}

#[test]
fn test_parse_single_codepoint_and_ranges() {
    let table = SymbolTable::parse(
        "2764 symbol warning Heavy Heart\n\
         1F600..1F64F emoji info\n\
         2600-26FF symbol critical\n",
    )
    .expect("valid denylist");

    assert_eq!(table.entries().len(), 3);
    assert_eq!(table.classify('\u{2764}').unwrap().label.as_deref(), Some("Heavy Heart"));
    assert_eq!(table.classify('\u{1F601}').unwrap().base_severity, Severity::Info);
    assert_eq!(table.classify('\u{26A0}').unwrap().base_severity, Severity::Critical);
}

#[test]
fn test_parse_accepts_prefixed_hex_and_comments() {
    let table = SymbolTable::parse(
        "# comment line\n\
         \n\
         U+1F680..U+1F6FF emoji warning\n\
         0x2705 symbol info\n",
    )
    .expect("valid denylist");
    assert!(table.classify('\u{1F680}').is_some());
    assert!(table.classify('\u{2705}').is_some());
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    let err = SymbolTable::parse("1F600..1F64F emoji warning\nnonsense\n").unwrap_err();
    assert!(matches!(err, DenylistError::Malformed { line: 2, .. }));

    let err = SymbolTable::parse("1F600 sticker warning\n").unwrap_err();
    assert!(matches!(err, DenylistError::InvalidField { line: 1, .. }));
}

#[test]
fn test_empty_denylist_flags_nothing() {
    let table = SymbolTable::parse("").expect("empty denylist is valid");
    assert!(table.classify('\u{1F600}').is_none());
    assert!(table.entries().is_empty());
}
