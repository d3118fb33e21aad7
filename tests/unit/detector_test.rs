//! Tests for the violation detector and scan entry point

use glyphlint::core::models::{ContextKind, LanguageFamily, Severity};
use glyphlint::core::services::scan::{Allowlist, ScanError, ScanOptions, scan_bytes, scan_text};
use glyphlint::core::symbols::SymbolTable;

fn scan(text: &str, family: LanguageFamily) -> glyphlint::Report {
    scan_text("test.src", text, family, SymbolTable::builtin(), &ScanOptions::default())
        .expect("scan succeeds")
}

#[test]
fn test_clean_input_yields_empty_report_not_absence() {
    let report = scan("def ok():\n    return 'plain ascii'\n", LanguageFamily::PyLike);
    assert_eq!(report.file, "test.src");
    assert!(report.violations.is_empty());
    assert_eq!(report.counts.total(), 0);
    assert_eq!(report.max_severity, None);
}

#[test]
fn test_violations_strictly_ordered_by_line_then_column() {
    let text = "# \u{1F525} then \u{1F680}\nx = \"\u{1F31F}\"\n# \u{1F4A1}\n";
    let report = scan(text, LanguageFamily::PyLike);
    let positions: Vec<(usize, usize)> =
        report.violations.iter().map(|v| (v.line, v.column)).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(positions, sorted, "positions must be unique and ascending");
    assert_eq!(positions.len(), 4);
}

#[test]
fn test_multi_code_point_sequences_are_single_violations() {
    // flag (2 regional indicators), ZWJ couple (3 cps + joiner), thumbs up + skin tone
    let text = "# \u{1F1EB}\u{1F1F7} \u{1F469}\u{200D}\u{1F680} \u{1F44D}\u{1F3FC}\n";
    let report = scan(text, LanguageFamily::PyLike);
    assert_eq!(report.violations.len(), 3);
    assert_eq!(report.violations[0].span.code_points.len(), 2);
    assert_eq!(report.violations[1].span.code_points.len(), 3);
    assert_eq!(report.violations[2].span.code_points.len(), 2);
}

#[test]
fn test_same_emoji_severity_depends_on_context() {
    let comment = scan("# status \u{1F600}\n", LanguageFamily::PyLike);
    assert_eq!(comment.violations[0].context, ContextKind::LineComment);
    assert_eq!(comment.violations[0].severity, Severity::Warning);

    let ident = scan("user_\u{1F600}_count = 42\n", LanguageFamily::PyLike);
    assert_eq!(ident.violations[0].context, ContextKind::Identifier);
    assert_eq!(ident.violations[0].severity, Severity::Critical);
}

#[test]
fn test_mixed_comment_and_identifier_contexts() {
    let text = "// \u{1F525} fast\nfunction ok_\u{1F4F1}_fn(){}";
    let report = scan(text, LanguageFamily::Generic);
    assert_eq!(report.violations.len(), 2);

    let first = &report.violations[0];
    assert_eq!(first.line, 1);
    assert_eq!(first.span.grapheme, "\u{1F525}");
    assert_eq!(first.context, ContextKind::LineComment);
    assert_eq!(first.severity, Severity::Warning);

    let second = &report.violations[1];
    assert_eq!(second.line, 2);
    assert_eq!(second.span.grapheme, "\u{1F4F1}");
    assert_eq!(second.context, ContextKind::Identifier);
    assert_eq!(second.severity, Severity::Critical);
}

#[test]
fn test_string_literal_emoji_keeps_base_severity() {
    let report = scan("msg = \"Welcome! \u{1F31F}\"\n", LanguageFamily::PyLike);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].context, ContextKind::StringLiteral);
    assert_eq!(report.violations[0].severity, Severity::Warning);
}

#[test]
fn test_input_too_large_gives_error_not_partial_report() {
    let options = ScanOptions { max_bytes: 4, ..ScanOptions::default() };
    let result = scan_text(
        "big.py",
        "# \u{1F680}\n",
        LanguageFamily::PyLike,
        SymbolTable::builtin(),
        &options,
    );
    match result {
        Err(ScanError::InputTooLarge { size, limit }) => {
            assert!(size > limit);
            assert_eq!(limit, 4);
        },
        other => panic!("expected InputTooLarge, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_gives_encoding_error() {
    let result = scan_bytes(
        "bad.py",
        b"# ok\xff\xfe",
        LanguageFamily::PyLike,
        SymbolTable::builtin(),
        &ScanOptions::default(),
    );
    assert!(matches!(result, Err(ScanError::Encoding(_))));
}

#[test]
fn test_allowlist_marks_but_keeps_violations() {
    let options = ScanOptions {
        allowlist: Allowlist {
            comments: vec!["\u{2705}".to_string()],
            ..Allowlist::default()
        },
        ..ScanOptions::default()
    };
    let report = scan_text(
        "demo.py",
        "# \u{2705} whitelisted\n# \u{1F680} not\n",
        LanguageFamily::PyLike,
        SymbolTable::builtin(),
        &options,
    )
    .expect("scan succeeds");

    assert_eq!(report.violations.len(), 2, "allowlisted occurrences are still recorded");
    assert!(report.violations[0].allowed);
    assert!(!report.violations[1].allowed);
    assert_eq!(report.max_blocking_severity(), Some(Severity::Warning));
}

#[test]
fn test_custom_denylist_controls_classification() {
    let table = SymbolTable::parse("1F680..1F6FF emoji critical Transport\n").unwrap();
    let report = scan_text(
        "demo.py",
        "# \u{1F680} and \u{1F600}\n",
        LanguageFamily::PyLike,
        &table,
        &ScanOptions::default(),
    )
    .expect("scan succeeds");

    // Only the rocket is listed; the grinning face is not in this table
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].severity, Severity::Critical);
    assert_eq!(report.violations[0].label.as_deref(), Some("Transport"));
}

#[test]
fn test_fixture_style_python_demo() {
    let text = "\
def process():
    # \u{1F680} should trigger warning
    status = \"Welcome! \u{1F31F}\"
    user_\u{1F600}_count = 42
    return status
";
    let report = scan(text, LanguageFamily::PyLike);
    assert_eq!(report.violations.len(), 3);
    assert_eq!(report.violations[0].context, ContextKind::LineComment);
    assert_eq!(report.violations[1].context, ContextKind::StringLiteral);
    assert_eq!(report.violations[2].context, ContextKind::Identifier);
    assert_eq!(report.counts.critical, 1);
    assert_eq!(report.counts.warning, 2);
    assert_eq!(report.max_severity, Some(Severity::Critical));
}
