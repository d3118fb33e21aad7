//! CLI layer
//!
//! Thin glue around the core scanner: argument parsing, file discovery and
//! result rendering.

pub mod app;
pub mod commands;
