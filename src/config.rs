//! Scan configuration
//!
//! Loads `.glyphlint.toml` from the scanned root (or an explicit path) and
//! turns it into the options the core scan consumes. Missing file means
//! defaults; a malformed file is a hard error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::models::Severity;
use crate::core::services::scan::{Allowlist, DEFAULT_MAX_BYTES, ScanOptions, SeverityOverrides};

/// Name of the per-project config file
pub const CONFIG_FILE: &str = ".glyphlint.toml";

/// Enforcement mode for the scan run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Violations of severity >= warning fail the run
    #[default]
    Strict,
    /// Only critical violations fail the run
    Permissive,
}

/// Top-level config file shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File discovery and size limits
    #[serde(default)]
    pub detection: DetectionConfig,
    /// Graphemes tolerated per context
    #[serde(default)]
    pub allowlist: Allowlist,
    /// Optional per-context severity overrides
    #[serde(default)]
    pub severity: SeverityConfig,
}

/// File discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Enforcement mode
    #[serde(default)]
    pub mode: Mode,
    /// Extensions to scan (with leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names never descended into
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    /// Regex patterns for paths to skip
    #[serde(default)]
    pub exclude_files: Vec<String>,
    /// Per-file size guard in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

fn default_extensions() -> Vec<String> {
    [".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".c", ".h", ".cc", ".cpp", ".cs", ".go",
     ".rs", ".rb", ".sh", ".kt", ".swift", ".php"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_exclude_dirs() -> Vec<String> {
    [".git", "node_modules", "target", "__pycache__", "vendor", "dist", "build"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_max_file_size() -> usize {
    DEFAULT_MAX_BYTES
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: Vec::new(),
            max_file_size: default_max_file_size(),
        }
    }
}

/// Per-context severity overrides as written in TOML
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SeverityConfig {
    /// Severity for comment contexts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Severity>,
    /// Severity for string literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings: Option<Severity>,
    /// Severity for plain code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Severity>,
}

impl Config {
    /// Load config from an explicit path
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load `.glyphlint.toml` from a root directory, or defaults if absent
    pub fn discover(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() { Self::load(&path) } else { Ok(Self::default()) }
    }

    /// Convert into the options the core scan consumes
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_bytes: self.detection.max_file_size,
            allowlist: self.allowlist.clone(),
            severity_overrides: SeverityOverrides {
                comments: self.severity.comments,
                strings: self.severity.strings,
                code: self.severity.code,
            },
        }
    }

    /// Compile the exclude_files patterns
    ///
    /// Invalid patterns are a config error, surfaced before any scanning.
    pub fn exclude_patterns(&self) -> anyhow::Result<Vec<Regex>> {
        self.detection
            .exclude_files
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("invalid exclude_files pattern: {p}")))
            .collect()
    }

    /// Whether a path should be scanned given extension and exclude rules
    #[must_use]
    pub fn should_scan(&self, path: &Path, excludes: &[Regex]) -> bool {
        let name = path.to_string_lossy();

        let has_extension = self
            .detection
            .extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()));
        if !has_extension {
            return false;
        }

        if path.components().any(|c| {
            self.detection.exclude_dirs.iter().any(|d| c.as_os_str().to_string_lossy() == *d)
        }) {
            return false;
        }

        !excludes.iter().any(|re| re.is_match(&name))
    }
}

/// Default config file contents written by `glyphlint init`
#[must_use]
pub fn default_config_toml() -> String {
    r#"# glyphlint configuration

[detection]
# strict: warnings and criticals fail the run
# permissive: only criticals fail the run
mode = "strict"
max_file_size = 2097152

# Directory names never descended into
exclude_dirs = [".git", "node_modules", "target", "__pycache__", "vendor", "dist", "build"]

# Regex patterns for paths to skip
exclude_files = []

[allowlist]
# Exact symbols tolerated per context (still reported, never blocking)
comments = ["✅", "❌", "⚠️"]
strings = []
identifiers = []

[severity]
# Optional overrides per context: "info", "warning", "critical".
# Identifiers are always critical and cannot be overridden.
# comments = "info"
# strings = "info"
"#
    .to_string()
}

/// Write the default config, refusing to clobber without force
pub fn write_default(dir: &Path, force: bool) -> anyhow::Result<Option<PathBuf>> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        return Ok(None);
    }
    fs::write(&path, default_config_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(Some(path))
}
