//! Business logic services
//!
//! Pure scanning logic that operates on domain models. These services have
//! no I/O dependencies - they operate on text passed in and return results.
//!
//! - [`scanner`] - Classify every byte of input by syntactic context
//! - [`detector`] - Cross-reference graphemes against the symbol table
//! - [`scan`] - The per-file entry point tying the two together

pub mod detector;
pub mod scan;
pub mod scanner;

pub use detector::detect;
pub use scan::{Allowlist, ScanError, ScanOptions, SeverityOverrides, scan_bytes, scan_text};
pub use scanner::{ContextIndex, ContextSpan, scan_contexts};
