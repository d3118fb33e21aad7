//! Syntactic context kinds
//!
//! The lexical scanner assigns exactly one context to every byte of input.
//! Context determines how damaging a flagged symbol is: an emoji in a comment
//! is cosmetic, the same emoji in an identifier breaks tooling downstream.

use serde::{Deserialize, Serialize};

/// The syntactic region containing a span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    /// Inside a line comment (`// ...` or `# ...`)
    LineComment,
    /// Inside a block comment (`/* ... */`)
    BlockComment,
    /// Inside a string literal (any quote style)
    StringLiteral,
    /// Inside an identifier token (variable, function, export name)
    Identifier,
    /// Plain code outside comments, strings and identifiers
    PlainCode,
}

impl ContextKind {
    /// Whether this context escalates violations to critical
    #[must_use]
    pub const fn escalates(self) -> bool {
        matches!(self, Self::Identifier)
    }
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineComment => write!(f, "line_comment"),
            Self::BlockComment => write!(f, "block_comment"),
            Self::StringLiteral => write!(f, "string_literal"),
            Self::Identifier => write!(f, "identifier"),
            Self::PlainCode => write!(f, "code"),
        }
    }
}
