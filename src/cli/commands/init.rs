//! Initialize glyphlint in a project

use std::path::Path;

use crate::config;
use crate::output::{OperationResult, OutputMode};

/// Write a default `.glyphlint.toml` in the current directory
pub fn init(force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let result = match config::write_default(Path::new("."), force)? {
        Some(path) => OperationResult {
            success: true,
            message: format!("Created {}", path.display()),
        },
        None => OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                config::CONFIG_FILE
            ),
        },
    };
    result.render(output_mode);
    Ok(())
}
