//! Violation records
//!
//! A violation is one logical occurrence of a denylisted symbol: one grapheme
//! cluster, even when that cluster is several code points (flags, skin tones,
//! ZWJ sequences).

use serde::{Deserialize, Serialize};

use super::{ContextKind, Severity};
use crate::core::symbols::SymbolCategory;

/// A span in source text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains a byte offset
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// One grapheme cluster of denylisted content
///
/// Invariant: `span.start < span.end`, and modifier code points (ZWJ,
/// variation selectors, skin tones) are merged into the base symbol's span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointSpan {
    /// Byte span in the source text
    pub span: Span,
    /// The code points making up the cluster
    pub code_points: Vec<u32>,
    /// The cluster as text
    pub grapheme: String,
}

impl CodePointSpan {
    /// Build a span from a grapheme cluster at a byte offset
    #[must_use]
    pub fn new(start: usize, grapheme: &str) -> Self {
        Self {
            span: Span::new(start, start + grapheme.len()),
            code_points: grapheme.chars().map(u32::from).collect(),
            grapheme: grapheme.to_string(),
        }
    }

    /// Code points rendered as space-separated hex (e.g. "1F525" or "1F468 200D 1F469")
    #[must_use]
    pub fn hex(&self) -> String {
        self.code_points.iter().map(|cp| format!("{cp:04X}")).collect::<Vec<_>>().join(" ")
    }
}

/// One flagged symbol occurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Where the symbol occurs
    pub span: CodePointSpan,
    /// Syntactic context at the occurrence
    pub context: ContextKind,
    /// Denylist category of the base symbol
    pub category: SymbolCategory,
    /// Effective severity after context escalation
    pub severity: Severity,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters from line start
    pub column: usize,
    /// Short human label for the symbol, if the table has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the occurrence matched an allowlist entry
    pub allowed: bool,
    /// The trimmed content of the offending line
    pub line_content: String,
}
