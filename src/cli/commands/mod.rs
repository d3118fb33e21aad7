//! CLI command implementations
//!
//! - [`scan`] - Walk files and report disallowed symbols
//! - [`rules`] - Print the active symbol table
//! - [`init`] - Write a default config file

mod init;
mod rules;
mod scan;

pub use init::init;
pub use rules::{load_denylist, rules};
pub use scan::{ScanArgs, scan};
