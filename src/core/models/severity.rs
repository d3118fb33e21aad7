//! Violation severity levels
//!
//! Defines how serious a flagged symbol occurrence is.

use serde::{Deserialize, Serialize};

/// Violation severity levels
///
/// Ordered so that aggregate severity is a plain `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - shown but never blocks
    Info,
    /// Warning - shown prominently, blocks in strict mode
    #[default]
    Warning,
    /// Critical - always blocks (e.g. symbols inside identifiers)
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "critical" | "error" => Ok(Self::Critical),
            _ => Err(format!("Invalid severity: {s}. Use: info, warning, critical")),
        }
    }
}
