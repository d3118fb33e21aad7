//! Language family hints
//!
//! The scanner does not parse languages, it only needs to know which comment
//! and string delimiters apply. A handful of families cover the common cases;
//! anything unrecognized falls back to the permissive generic rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Language family selecting the delimiter rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFamily {
    /// Permissive rules: `//`, `/* */`, `#`, all three quote styles
    #[default]
    Generic,
    /// C-style: `//`, `/* */`, double/single/backtick quotes
    CLike,
    /// Python-style: `#` comments, double/single quotes
    PyLike,
    /// Shell-style: `#` comments, double/single quotes
    Shell,
}

/// Delimiter rules for one language family
#[derive(Debug, Clone, Copy)]
pub struct DelimiterRules {
    /// Tokens that start a comment running to end of line
    pub line_comments: &'static [&'static str],
    /// Block comment open/close pair, if the family has one
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Whether block comments nest (depth-counted)
    pub block_nesting: bool,
    /// Characters that open and close a string literal
    pub string_quotes: &'static [char],
}

impl LanguageFamily {
    /// Delimiter rules for this family
    #[must_use]
    pub const fn rules(self) -> DelimiterRules {
        match self {
            Self::Generic => DelimiterRules {
                line_comments: &["//", "#"],
                block_comment: Some(("/*", "*/")),
                block_nesting: false,
                string_quotes: &['"', '\'', '`'],
            },
            Self::CLike => DelimiterRules {
                line_comments: &["//"],
                block_comment: Some(("/*", "*/")),
                block_nesting: false,
                string_quotes: &['"', '\'', '`'],
            },
            Self::PyLike => DelimiterRules {
                line_comments: &["#"],
                block_comment: None,
                block_nesting: false,
                string_quotes: &['"', '\''],
            },
            Self::Shell => DelimiterRules {
                line_comments: &["#"],
                block_comment: None,
                block_nesting: false,
                string_quotes: &['"', '\''],
            },
        }
    }

    /// Guess the family from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "py" | "pyi" => Self::PyLike,
            "js" | "jsx" | "ts" | "tsx" | "java" | "c" | "h" | "cc" | "cpp" | "cxx" | "hpp"
            | "cs" | "go" | "rs" | "swift" | "kt" | "kts" | "scala" | "php" => Self::CLike,
            "sh" | "bash" | "zsh" | "rb" | "pl" | "yaml" | "yml" | "toml" => Self::Shell,
            _ => Self::Generic,
        }
    }

    /// Parse a hint string, falling back to `Generic` for unknown values
    ///
    /// Unsupported hints are a recoverable condition, not an error.
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        hint.parse().unwrap_or_else(|_| {
            log::warn!("unsupported language hint '{hint}', falling back to generic rules");
            Self::Generic
        })
    }
}

impl std::fmt::Display for LanguageFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::CLike => write!(f, "clike"),
            Self::PyLike => write!(f, "pylike"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

impl std::str::FromStr for LanguageFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" | "unknown" => Ok(Self::Generic),
            "clike" | "c" | "cpp" | "java" | "javascript" | "typescript" | "rust" | "go" => {
                Ok(Self::CLike)
            },
            "pylike" | "python" => Ok(Self::PyLike),
            "shell" | "sh" | "bash" | "ruby" | "yaml" => Ok(Self::Shell),
            _ => Err(format!("Unknown language family: {s}")),
        }
    }
}
