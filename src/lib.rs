//! glyphlint - A CLI tool that scans source code for emoji and disallowed
//! Unicode symbols
//!
//! This library provides the core functionality: a Unicode symbol denylist,
//! a lexical context scanner, a grapheme-aware violation detector and the
//! per-file report aggregator, plus the thin CLI glue around them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod core;
pub mod output;

pub use crate::core::models::{LanguageFamily, Report, Severity};
pub use crate::core::services::{ScanError, ScanOptions, scan_bytes, scan_text};
pub use crate::core::symbols::SymbolTable;
