//! glyphlint - A CLI tool that scans source code for emoji and disallowed
//! Unicode symbols
//!
//! Exit codes: 0 = no blocking violations, 1 = violations found,
//! 2 = scan error (unreadable or invalid input).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::module_name_repetitions, clippy::cargo_common_metadata)]

use std::process::ExitCode;

/// Main entry point for the glyphlint CLI
fn main() -> ExitCode {
    match glyphlint::cli::app::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        },
    }
}
