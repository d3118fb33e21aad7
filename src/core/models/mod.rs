//! Domain models for glyphlint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Severity`] - How serious a flagged occurrence is
//! - [`ContextKind`] - The syntactic region containing an occurrence
//! - [`LanguageFamily`] - Which delimiter rules the scanner applies
//! - [`Violation`] - One flagged grapheme cluster
//! - [`Report`] - Sorted, counted per-file result

mod context;
mod language;
mod report;
mod severity;
mod violation;

pub use context::ContextKind;
pub use language::{DelimiterRules, LanguageFamily};
pub use report::{Report, SeverityCounts};
pub use severity::Severity;
pub use violation::{CodePointSpan, Span, Violation};
