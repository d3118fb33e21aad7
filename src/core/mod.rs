//! Core domain logic for glyphlint
//!
//! This module contains pure scanning logic with no I/O dependencies.
//! Each file scan is a self-contained computation over immutable input,
//! safe to run in parallel against the shared read-only symbol table.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Severity, ContextKind, Violation, Report)
//! - `services/` - Scanner, detector and the per-file scan entry point
//! - `symbols` - The process-wide Unicode denylist

pub mod models;
pub mod services;
pub mod symbols;
