//! Scan entry point
//!
//! `scan_text` is the core contract: a pure function of (text, symbol table,
//! options) producing one report per file. No shared mutable state, so
//! callers may scan many files in parallel against the same table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::detector;
use super::scanner;
use crate::core::models::{ContextKind, LanguageFamily, Report, Severity};
use crate::core::symbols::SymbolTable;

/// Default size guard: files above this are rejected, not partially scanned
pub const DEFAULT_MAX_BYTES: usize = 2 * 1024 * 1024;

/// Errors that abort the scan of a single file
///
/// These surface as a per-file error result, never a partial report, and
/// never abort a multi-file run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input exceeded the configured size guard
    #[error("input is {size} bytes, exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Actual input size
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Input was not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Exact grapheme strings tolerated per context
///
/// Mirrors the conventional allowlist of status marks in comments. An
/// allowlisted occurrence is still recorded, it just does not block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowlist {
    /// Graphemes allowed inside comments
    #[serde(default)]
    pub comments: Vec<String>,
    /// Graphemes allowed inside string literals
    #[serde(default)]
    pub strings: Vec<String>,
    /// Graphemes allowed inside identifiers
    #[serde(default)]
    pub identifiers: Vec<String>,
}

impl Allowlist {
    /// Whether a grapheme is tolerated in the given context
    ///
    /// Matches the exact cluster or the cluster with variation selectors
    /// stripped, so a listed `✅` also covers `✅\u{FE0F}`.
    #[must_use]
    pub fn is_allowed(&self, grapheme: &str, context: ContextKind) -> bool {
        let list = match context {
            ContextKind::LineComment | ContextKind::BlockComment => &self.comments,
            ContextKind::StringLiteral => &self.strings,
            ContextKind::Identifier => &self.identifiers,
            ContextKind::PlainCode => return false,
        };
        let stripped: String =
            grapheme.chars().filter(|c| !matches!(c, '\u{FE00}'..='\u{FE0F}')).collect();
        list.iter().any(|a| a == grapheme || *a == stripped)
    }
}

/// Optional severity overrides per context
///
/// Applied before identifier escalation; identifiers are always critical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityOverrides {
    /// Severity for comment contexts (line and block)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Severity>,
    /// Severity for string literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings: Option<Severity>,
    /// Severity for plain code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Severity>,
}

impl SeverityOverrides {
    /// Effective severity for a context given the table's base severity
    #[must_use]
    pub fn apply(&self, context: ContextKind, base: Severity) -> Severity {
        let overridden = match context {
            ContextKind::LineComment | ContextKind::BlockComment => self.comments,
            ContextKind::StringLiteral => self.strings,
            ContextKind::PlainCode => self.code,
            ContextKind::Identifier => None,
        };
        overridden.unwrap_or(base)
    }
}

/// Knobs for one scan invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Size guard in bytes
    pub max_bytes: usize,
    /// Tolerated graphemes per context
    pub allowlist: Allowlist,
    /// Per-context severity overrides
    pub severity_overrides: SeverityOverrides,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            allowlist: Allowlist::default(),
            severity_overrides: SeverityOverrides::default(),
        }
    }
}

/// Scan one file's text and produce its report
///
/// Pure computation: the only shared input is the read-only symbol table.
/// A clean file produces a report with an empty violation list, not an
/// absent report.
pub fn scan_text(
    file: &str,
    text: &str,
    family: LanguageFamily,
    table: &SymbolTable,
    options: &ScanOptions,
) -> Result<Report, ScanError> {
    if text.len() > options.max_bytes {
        return Err(ScanError::InputTooLarge { size: text.len(), limit: options.max_bytes });
    }

    let index = scanner::scan_contexts(text, family);
    let violations = detector::detect(text, &index, table, options);
    Ok(Report::aggregate(file, violations))
}

/// Scan raw bytes, validating the encoding first
///
/// Invalid UTF-8 aborts the scan for this file with an encoding error.
pub fn scan_bytes(
    file: &str,
    bytes: &[u8],
    family: LanguageFamily,
    table: &SymbolTable,
    options: &ScanOptions,
) -> Result<Report, ScanError> {
    if bytes.len() > options.max_bytes {
        return Err(ScanError::InputTooLarge { size: bytes.len(), limit: options.max_bytes });
    }
    let text = std::str::from_utf8(bytes)?;
    scan_text(file, text, family, table, options)
}
