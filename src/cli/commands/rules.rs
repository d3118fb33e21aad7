//! Rules command - print the active symbol table

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::symbols::SymbolTable;
use crate::output::{OutputMode, RuleEntry, RulesResult};

/// Load a symbol table from a denylist file
pub fn load_denylist(path: &Path) -> anyhow::Result<SymbolTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read denylist {}", path.display()))?;
    SymbolTable::parse(&content)
        .with_context(|| format!("failed to parse denylist {}", path.display()))
}

/// Print the built-in table, or the one loaded from a denylist file
pub fn rules(denylist: Option<&Path>, output_mode: OutputMode) -> anyhow::Result<()> {
    let loaded;
    let (table, source): (&SymbolTable, String) = match denylist {
        Some(path) => {
            loaded = load_denylist(path)?;
            (&loaded, path.display().to_string())
        },
        None => (SymbolTable::builtin(), "builtin".to_string()),
    };

    let entries = table
        .entries()
        .iter()
        .map(|e| RuleEntry {
            range: if e.start == e.end {
                format!("{:04X}", e.start)
            } else {
                format!("{:04X}..{:04X}", e.start, e.end)
            },
            category: e.category.to_string(),
            severity: e.base_severity.to_string(),
            label: e.label.clone(),
        })
        .collect();

    RulesResult { source, entries }.render(output_mode);
    Ok(())
}
