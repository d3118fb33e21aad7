//! Per-file scan reports
//!
//! Aggregates the detector's violations into a stable, sorted report. The
//! report is a superset view: nothing is filtered or dropped, allowlisted
//! occurrences included.

use serde::{Deserialize, Serialize};

use super::{Severity, Violation};

/// Violation counts per severity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Number of info violations
    pub info: usize,
    /// Number of warning violations
    pub warning: usize,
    /// Number of critical violations
    pub critical: usize,
}

impl SeverityCounts {
    /// Total across all tiers
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info + self.warning + self.critical
    }

    fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Info => self.info += 1,
            Severity::Warning => self.warning += 1,
            Severity::Critical => self.critical += 1,
        }
    }
}

/// Result of scanning one file
///
/// A clean file still produces a report (empty violations, zero counts);
/// callers distinguish "clean" from "not scanned" by presence of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Identifier of the scanned file (path or label)
    pub file: String,
    /// Violations sorted by ascending (line, column)
    pub violations: Vec<Violation>,
    /// Summary counts per severity
    pub counts: SeverityCounts,
    /// How many violations matched an allowlist entry
    pub allowed_count: usize,
    /// Highest severity present, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_severity: Option<Severity>,
}

impl Report {
    /// Aggregate violations into a report
    ///
    /// Sorts by (line, column) and computes summary counts. Does not drop
    /// or mutate individual violations.
    #[must_use]
    pub fn aggregate(file: impl Into<String>, mut violations: Vec<Violation>) -> Self {
        violations.sort_by_key(|v| (v.line, v.column));

        let mut counts = SeverityCounts::default();
        let mut allowed_count = 0;
        let mut max_severity = None;

        for v in &violations {
            counts.bump(v.severity);
            if v.allowed {
                allowed_count += 1;
            }
            max_severity = max_severity.max(Some(v.severity));
        }

        Self {
            file: file.into(),
            violations,
            counts,
            allowed_count,
            max_severity,
        }
    }

    /// Whether the file had no flagged symbols at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Highest severity among violations that did not match an allowlist entry
    #[must_use]
    pub fn max_blocking_severity(&self) -> Option<Severity> {
        self.violations.iter().filter(|v| !v.allowed).map(|v| v.severity).max()
    }
}
