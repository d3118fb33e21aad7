//! Unicode symbol table
//!
//! A denylist of code-point ranges classified as emoji or disallowed
//! decorative symbols, each with a default severity. Code points not listed
//! are never flagged. The table is loaded once (built-in or from a denylist
//! file) and shared read-only across scans.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::Severity;

/// Denylist category of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolCategory {
    /// Emoji proper (pictographs, emoticons, transport, flags, ...)
    Emoji,
    /// Non-emoji decorative Unicode (dingbats, misc symbols)
    DisallowedSymbol,
}

impl std::fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emoji => write!(f, "emoji"),
            Self::DisallowedSymbol => write!(f, "disallowed_symbol"),
        }
    }
}

impl std::str::FromStr for SymbolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emoji" => Ok(Self::Emoji),
            "symbol" | "disallowed" | "disallowed_symbol" => Ok(Self::DisallowedSymbol),
            _ => Err(format!("Invalid symbol category: {s}. Use: emoji, symbol")),
        }
    }
}

/// One denylisted code-point range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// First code point of the range (inclusive)
    pub start: u32,
    /// Last code point of the range (inclusive)
    pub end: u32,
    /// Denylist category
    pub category: SymbolCategory,
    /// Severity before context escalation
    pub base_severity: Severity,
    /// Short human label for the range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SymbolEntry {
    /// Whether the range covers a code point
    #[must_use]
    pub const fn covers(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}

/// Errors from parsing a denylist file
#[derive(Debug, Error)]
pub enum DenylistError {
    /// A line did not have the `<range> <category> <severity>` shape
    #[error("line {line}: expected '<hex-range> <category> <severity> [label]', got '{text}'")]
    Malformed {
        /// 1-based line number in the denylist file
        line: usize,
        /// The offending line
        text: String,
    },

    /// A code point was not valid hex
    #[error("line {line}: invalid code point '{text}'")]
    InvalidCodePoint {
        /// 1-based line number in the denylist file
        line: usize,
        /// The offending token
        text: String,
    },

    /// Category or severity token was not recognized
    #[error("line {line}: {message}")]
    InvalidField {
        /// 1-based line number in the denylist file
        line: usize,
        /// What was wrong
        message: String,
    },

    /// A range was inverted or overlapped a previous entry
    #[error("line {line}: invalid range {start:04X}..{end:04X}")]
    InvalidRange {
        /// 1-based line number in the denylist file
        line: usize,
        /// Range start
        start: u32,
        /// Range end
        end: u32,
    },
}

/// The process-wide denylist of symbol ranges
///
/// Ranges are sorted and non-overlapping, so classification is a binary
/// search. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

/// Built-in ranges: (start, end, category, severity, label)
///
/// Mirrors the Unicode blocks commonly denylisted in source code. Skin-tone
/// modifiers, ZWJ and variation selectors are deliberately absent: they are
/// handled as modifiers of the preceding base symbol, never standalone.
const BUILTIN_RANGES: &[(u32, u32, SymbolCategory, Severity, &str)] = &[
    (0x2600, 0x26FF, SymbolCategory::DisallowedSymbol, Severity::Warning, "Miscellaneous Symbols"),
    (0x2700, 0x27BF, SymbolCategory::DisallowedSymbol, Severity::Warning, "Dingbats"),
    (0x1F1E6, 0x1F1FF, SymbolCategory::Emoji, Severity::Warning, "Regional Indicators"),
    (0x1F300, 0x1F5FF, SymbolCategory::Emoji, Severity::Warning, "Symbols and Pictographs"),
    (0x1F600, 0x1F64F, SymbolCategory::Emoji, Severity::Warning, "Emoticons"),
    (0x1F680, 0x1F6FF, SymbolCategory::Emoji, Severity::Warning, "Transport and Map"),
    (0x1F900, 0x1F9FF, SymbolCategory::Emoji, Severity::Warning, "Supplemental Symbols"),
    (0x1FA70, 0x1FAFF, SymbolCategory::Emoji, Severity::Warning, "Symbols Extended-A"),
];

static BUILTIN: OnceLock<SymbolTable> = OnceLock::new();

impl SymbolTable {
    /// The built-in table, constructed once per process
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            let entries = BUILTIN_RANGES
                .iter()
                .map(|&(start, end, category, base_severity, label)| SymbolEntry {
                    start,
                    end,
                    category,
                    base_severity,
                    label: Some(label.to_string()),
                })
                .collect();
            Self { entries }
        })
    }

    /// Build a table from explicit entries
    ///
    /// Entries are sorted by range start; overlapping ranges are rejected.
    pub fn from_entries(mut entries: Vec<SymbolEntry>) -> Result<Self, DenylistError> {
        entries.sort_by_key(|e| e.start);
        for pair in entries.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(DenylistError::InvalidRange {
                    line: 0,
                    start: pair[1].start,
                    end: pair[1].end,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a denylist file
    ///
    /// One entry per line: `<hex-codepoint|hex-start..hex-end> <category>
    /// <severity> [label...]`. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, DenylistError> {
        let mut entries = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let (Some(range), Some(category), Some(severity)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(DenylistError::Malformed { line, text: trimmed.to_string() });
            };

            let (start, end) = parse_range(range, line)?;
            if start > end || char::from_u32(end).is_none() {
                return Err(DenylistError::InvalidRange { line, start, end });
            }

            let category: SymbolCategory = category
                .parse()
                .map_err(|message| DenylistError::InvalidField { line, message })?;
            let base_severity: Severity = severity
                .parse()
                .map_err(|message| DenylistError::InvalidField { line, message })?;

            let label = {
                let rest = fields.collect::<Vec<_>>().join(" ");
                if rest.is_empty() { None } else { Some(rest) }
            };

            entries.push(SymbolEntry { start, end, category, base_severity, label });
        }

        Self::from_entries(entries)
    }

    /// Classify a code point against the denylist
    ///
    /// Returns `None` for anything not listed - the table is a denylist,
    /// not an allowlist, so unknown code points are never violations.
    #[must_use]
    pub fn classify(&self, c: char) -> Option<&SymbolEntry> {
        let cp = u32::from(c);
        let idx = self.entries.partition_point(|e| e.end < cp);
        self.entries.get(idx).filter(|e| e.covers(cp))
    }

    /// All entries, sorted by range start
    #[must_use]
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }
}

/// Whether a code point modifies the preceding base symbol
///
/// Covers zero-width joiners, variation selectors and skin-tone modifiers.
/// These never count as standalone violations; they extend the span of the
/// grapheme cluster they belong to.
#[must_use]
pub const fn is_modifier(c: char) -> bool {
    matches!(c, '\u{200D}' | '\u{FE00}'..='\u{FE0F}' | '\u{1F3FB}'..='\u{1F3FF}')
}

fn parse_range(token: &str, line: usize) -> Result<(u32, u32), DenylistError> {
    let parse_cp = |s: &str| {
        u32::from_str_radix(s.trim_start_matches("U+").trim_start_matches("0x"), 16).map_err(
            |_| DenylistError::InvalidCodePoint { line, text: s.to_string() },
        )
    };

    if let Some((lo, hi)) = token.split_once("..") {
        Ok((parse_cp(lo)?, parse_cp(hi)?))
    } else if let Some((lo, hi)) = token.split_once('-') {
        Ok((parse_cp(lo)?, parse_cp(hi)?))
    } else {
        let cp = parse_cp(token)?;
        Ok((cp, cp))
    }
}
