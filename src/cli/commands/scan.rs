//! Scan command - walk files and report disallowed symbols

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::load_denylist;
use crate::config::{Config, Mode};
use crate::core::models::LanguageFamily;
use crate::core::services::scan::{ScanOptions, scan_bytes};
use crate::core::symbols::SymbolTable;
use crate::output::{OutputMode, ScanFailure, ScanRunResult};

/// Arguments for the scan command
#[derive(Debug)]
pub struct ScanArgs {
    /// Files or directories to scan
    pub paths: Vec<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Denylist file replacing the built-in table
    pub denylist: Option<PathBuf>,
    /// Language hint overriding per-file detection
    pub language: Option<String>,
    /// Force strict mode
    pub strict: bool,
    /// Force permissive mode
    pub permissive: bool,
    /// Emit GitHub Actions annotations
    pub annotations: bool,
    /// Write a markdown report here
    pub markdown: Option<PathBuf>,
}

/// Scan the given paths, render results, return the exit code
pub fn scan(args: &ScanArgs, output_mode: OutputMode) -> anyhow::Result<u8> {
    let root = scan_root(&args.paths);
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&root)?,
    };
    let excludes = config.exclude_patterns()?;

    let mode = if args.strict {
        Mode::Strict
    } else if args.permissive {
        Mode::Permissive
    } else {
        config.detection.mode
    };

    // The table outlives the parallel scan and is shared by reference
    let loaded;
    let table: &SymbolTable = match &args.denylist {
        Some(path) => {
            loaded = load_denylist(path)?;
            &loaded
        },
        None => SymbolTable::builtin(),
    };

    let hint = args.language.as_deref().map(LanguageFamily::from_hint);
    let options = config.scan_options();

    let files = collect_files(&args.paths, &config, &excludes);
    log::debug!("scanning {} file(s) under {}", files.len(), root.display());

    // Each scan is a pure function of (text, table, options); no coordination needed
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| scan_one(path, hint, table, &options))
        .collect();

    let files_scanned = outcomes.len();
    let mut reports = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(failure) => errors.push(failure),
        }
    }

    let result = ScanRunResult::new(reports, errors, files_scanned, mode);

    result.render(output_mode);
    if args.annotations {
        result.render_annotations();
    }
    if let Some(path) = &args.markdown {
        fs::write(path, result.to_markdown())
            .with_context(|| format!("failed to write markdown report {}", path.display()))?;
    }

    Ok(result.exit_code())
}

fn scan_one(
    path: &Path,
    hint: Option<LanguageFamily>,
    table: &SymbolTable,
    options: &ScanOptions,
) -> Result<crate::core::models::Report, ScanFailure> {
    let file = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| ScanFailure {
        file: file.clone(),
        error: e.to_string(),
    })?;
    let family = hint.unwrap_or_else(|| LanguageFamily::from_path(path));
    scan_bytes(&file, &bytes, family, table, options).map_err(|e| ScanFailure {
        file,
        error: e.to_string(),
    })
}

/// Directory config discovery starts from
fn scan_root(paths: &[PathBuf]) -> PathBuf {
    paths
        .first()
        .map(|p| {
            if p.is_dir() {
                p.clone()
            } else {
                p.parent().filter(|d| !d.as_os_str().is_empty()).map_or_else(
                    || PathBuf::from("."),
                    Path::to_path_buf,
                )
            }
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand path arguments into the list of files to scan
///
/// Explicitly named files are always scanned; directories are walked and
/// filtered through the config's extension and exclude rules.
fn collect_files(paths: &[PathBuf], config: &Config, excludes: &[regex::Regex]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(false)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
            {
                if config.should_scan(entry.path(), excludes) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            log::warn!("skipping {}: not a file or directory", path.display());
        }
    }

    files.sort();
    files.dedup();
    files
}
