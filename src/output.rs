//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON, plus the markdown report
//! and GitHub annotation formats used in CI.

use colored::Colorize;
use serde::Serialize;

use crate::config::Mode;
use crate::core::models::{Report, Severity, SeverityCounts, Violation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A file that could not be scanned
#[derive(Debug, Clone, Serialize)]
pub struct ScanFailure {
    /// The file that failed
    pub file: String,
    /// Why the scan aborted
    pub error: String,
}

/// Result of a whole scan run
#[derive(Debug, Serialize)]
pub struct ScanRunResult {
    /// Whether the run passed under the configured mode
    pub passed: bool,
    /// Number of files scanned (including clean ones)
    pub files_scanned: usize,
    /// When the scan ran (RFC3339)
    pub timestamp: String,
    /// Violation totals across all files
    pub totals: SeverityCounts,
    /// How many violations matched an allowlist entry
    pub allowed_count: usize,
    /// Per-file reports that contain violations
    pub reports: Vec<Report>,
    /// Files that failed to scan
    pub errors: Vec<ScanFailure>,
}

impl ScanRunResult {
    /// Assemble the run result from per-file reports
    ///
    /// Clean reports count toward `files_scanned` but are not carried in
    /// `reports`; presence of the run result itself distinguishes a clean
    /// run from no run.
    #[must_use]
    pub fn new(
        reports: Vec<Report>,
        errors: Vec<ScanFailure>,
        files_scanned: usize,
        mode: Mode,
    ) -> Self {
        let mut totals = SeverityCounts::default();
        let mut allowed_count = 0;
        let mut blocking = None;

        for report in &reports {
            totals.info += report.counts.info;
            totals.warning += report.counts.warning;
            totals.critical += report.counts.critical;
            allowed_count += report.allowed_count;
            blocking = blocking.max(report.max_blocking_severity());
        }

        let threshold = match mode {
            Mode::Strict => Severity::Warning,
            Mode::Permissive => Severity::Critical,
        };
        let passed = errors.is_empty() && blocking.is_none_or(|s| s < threshold);

        let reports = reports.into_iter().filter(|r| !r.is_clean()).collect();

        Self {
            passed,
            files_scanned,
            timestamp: chrono::Utc::now().to_rfc3339(),
            totals,
            allowed_count,
            reports,
            errors,
        }
    }

    /// Process exit code: 0 = pass, 1 = violations, 2 = scan error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if !self.errors.is_empty() {
            2
        } else if self.passed {
            0
        } else {
            1
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Scanned {} file(s)\n", self.files_scanned);

        for report in &self.reports {
            println!("{}", report.file.bold());
            for v in &report.violations {
                println!("  {}:{}  {}  {}", v.line, v.column, severity_tag(v.severity), describe(v));
            }
            println!();
        }

        for failure in &self.errors {
            println!("{} {}: {}", "error:".red().bold(), failure.file, failure.error);
        }

        if self.totals.total() == 0 && self.errors.is_empty() {
            println!("{}", "No disallowed symbols found.".green());
            return;
        }

        println!(
            "{} violation(s): {} critical, {} warning, {} info ({} allowlisted)",
            self.totals.total(),
            self.totals.critical,
            self.totals.warning,
            self.totals.info,
            self.allowed_count
        );

        if self.passed {
            println!("{}", "PASSED".green().bold());
        } else {
            println!("{}", "FAILED".red().bold());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Emit GitHub Actions annotations, one line per non-allowlisted violation
    pub fn render_annotations(&self) {
        for report in &self.reports {
            for v in report.violations.iter().filter(|v| !v.allowed) {
                let level = match v.severity {
                    Severity::Critical => "error",
                    Severity::Warning => "warning",
                    Severity::Info => "notice",
                };
                println!(
                    "::{level} file={},line={},col={}::Symbol '{}' (U+{}) found in {}",
                    report.file,
                    v.line,
                    v.column,
                    v.span.grapheme,
                    v.span.hex(),
                    v.context
                );
            }
        }
    }

    /// Render the run as a markdown report
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Symbol Scan Report\n\n");
        out.push_str(&format!("**Scan Time:** {}\n", self.timestamp));
        out.push_str(&format!("**Files Scanned:** {}\n", self.files_scanned));
        out.push_str(&format!("**Violations:** {}\n", self.totals.total()));
        out.push_str(&format!("**Allowlisted:** {}\n\n", self.allowed_count));

        if self.reports.is_empty() && self.errors.is_empty() {
            out.push_str("No disallowed symbols found.\n");
            return out;
        }

        for report in &self.reports {
            out.push_str(&format!("## `{}`\n\n", report.file));
            for v in &report.violations {
                out.push_str(&format!(
                    "- **{}:{}** `{}` (U+{}) in {} - {}{}\n",
                    v.line,
                    v.column,
                    v.span.grapheme,
                    v.span.hex(),
                    v.context,
                    v.severity,
                    if v.allowed { " (allowlisted)" } else { "" }
                ));
            }
            out.push('\n');
        }

        if !self.errors.is_empty() {
            out.push_str("## Scan errors\n\n");
            for failure in &self.errors {
                out.push_str(&format!("- `{}`: {}\n", failure.file, failure.error));
            }
        }

        out
    }
}

fn severity_tag(severity: Severity) -> String {
    match severity {
        Severity::Critical => "CRITICAL".red().bold().to_string(),
        Severity::Warning => "WARNING".yellow().to_string(),
        Severity::Info => "INFO".blue().to_string(),
    }
}

fn describe(v: &Violation) -> String {
    let label = v.label.as_deref().unwrap_or("symbol");
    let allowed = if v.allowed { " (allowlisted)" } else { "" };
    format!("'{}' U+{} [{}] in {}{}", v.span.grapheme, v.span.hex(), label, v.context, allowed)
}

/// Result of listing the active symbol table
#[derive(Debug, Serialize)]
pub struct RulesResult {
    /// Where the table came from ("builtin" or a file path)
    pub source: String,
    /// The denylisted ranges
    pub entries: Vec<RuleEntry>,
}

/// One denylist range as displayed
#[derive(Debug, Serialize)]
pub struct RuleEntry {
    /// Range rendered as hex (e.g. "1F600..1F64F")
    pub range: String,
    /// Category name
    pub category: String,
    /// Default severity
    pub severity: String,
    /// Human label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RulesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        println!("Symbol table ({}):\n", self.source);
        for entry in &self.entries {
            println!(
                "  {:<16} {:<18} {:<9} {}",
                entry.range,
                entry.category,
                entry.severity,
                entry.label.as_deref().unwrap_or("")
            );
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
