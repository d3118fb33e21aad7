//! Tests for report aggregation

use glyphlint::core::models::{
    CodePointSpan, ContextKind, Report, Severity, SeverityCounts, Violation,
};
use glyphlint::core::symbols::SymbolCategory;

fn violation(line: usize, column: usize, severity: Severity) -> Violation {
    Violation {
        span: CodePointSpan::new(0, "\u{1F680}"),
        context: ContextKind::LineComment,
        category: SymbolCategory::Emoji,
        severity,
        line,
        column,
        label: None,
        allowed: false,
        line_content: String::new(),
    }
}

#[test]
fn test_clean_file_produces_report_with_zero_counts() {
    let report = Report::aggregate("clean.rs", Vec::new());
    assert!(report.is_clean());
    assert_eq!(report.counts, SeverityCounts::default());
    assert_eq!(report.allowed_count, 0);
    assert_eq!(report.max_severity, None);
    assert_eq!(report.max_blocking_severity(), None);
}

#[test]
fn test_aggregate_sorts_and_keeps_every_violation() {
    let input = vec![
        violation(5, 2, Severity::Info),
        violation(1, 8, Severity::Warning),
        violation(1, 3, Severity::Critical),
        violation(2, 1, Severity::Info),
    ];
    let report = Report::aggregate("demo.py", input);

    assert_eq!(report.violations.len(), 4, "aggregation never drops violations");
    let positions: Vec<_> = report.violations.iter().map(|v| (v.line, v.column)).collect();
    assert_eq!(positions, vec![(1, 3), (1, 8), (2, 1), (5, 2)]);
}

#[test]
fn test_highest_severity_wins() {
    let report = Report::aggregate(
        "demo.py",
        vec![violation(1, 1, Severity::Info), violation(2, 1, Severity::Warning)],
    );
    assert_eq!(report.max_severity, Some(Severity::Warning));

    let report = Report::aggregate(
        "demo.py",
        vec![violation(1, 1, Severity::Critical), violation(2, 1, Severity::Info)],
    );
    assert_eq!(report.max_severity, Some(Severity::Critical));
}

#[test]
fn test_counts_per_tier() {
    let report = Report::aggregate(
        "demo.py",
        vec![
            violation(1, 1, Severity::Info),
            violation(2, 1, Severity::Warning),
            violation(3, 1, Severity::Warning),
            violation(4, 1, Severity::Critical),
        ],
    );
    assert_eq!(report.counts.info, 1);
    assert_eq!(report.counts.warning, 2);
    assert_eq!(report.counts.critical, 1);
    assert_eq!(report.counts.total(), 4);
}

#[test]
fn test_allowed_violations_excluded_from_blocking_severity() {
    let mut allowed = violation(1, 1, Severity::Critical);
    allowed.allowed = true;
    let report = Report::aggregate("demo.py", vec![allowed, violation(2, 1, Severity::Info)]);

    assert_eq!(report.allowed_count, 1);
    assert_eq!(report.max_severity, Some(Severity::Critical));
    assert_eq!(report.max_blocking_severity(), Some(Severity::Info));
}

#[test]
fn test_report_serializes_to_json() {
    let report = Report::aggregate("demo.py", vec![violation(1, 4, Severity::Warning)]);
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["file"], "demo.py");
    assert_eq!(json["violations"][0]["line"], 1);
    assert_eq!(json["violations"][0]["severity"], "warning");
    assert_eq!(json["violations"][0]["context"], "line_comment");
    assert_eq!(json["counts"]["warning"], 1);
}
