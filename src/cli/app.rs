//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;

/// glyphlint - scan source code for emoji and disallowed Unicode symbols
#[derive(Parser, Debug)]
#[command(
    name = "glyphlint",
    version,
    about = "Scan source code for emoji and disallowed Unicode symbols",
    long_about = "Scans source text for denylisted Unicode symbols, classifies each\n\
                  occurrence by syntactic context (comment, string, identifier, code)\n\
                  and reports structured violations.\n\n\
                  Symbols inside identifiers are always critical: they break tooling,\n\
                  APIs and searchability downstream."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan files or directories for disallowed symbols
    Scan {
        /// Files or directories to scan
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Config file (default: .glyphlint.toml in the scanned root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Denylist file overriding the built-in symbol table
        #[arg(long)]
        denylist: Option<PathBuf>,

        /// Language family hint overriding per-file detection
        /// (generic, clike, pylike, shell)
        #[arg(short, long)]
        language: Option<String>,

        /// Fail on warnings (overrides config mode)
        #[arg(long, conflicts_with = "permissive")]
        strict: bool,

        /// Only fail on critical violations (overrides config mode)
        #[arg(long)]
        permissive: bool,

        /// Emit GitHub Actions annotations
        #[arg(long)]
        annotations: bool,

        /// Write a markdown report to this path
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Print the active symbol table
    Rules {
        /// Denylist file overriding the built-in symbol table
        #[arg(long)]
        denylist: Option<PathBuf>,
    },

    /// Write a default .glyphlint.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    match cli.command {
        Some(Command::Scan {
            paths,
            config,
            denylist,
            language,
            strict,
            permissive,
            annotations,
            markdown,
        }) => commands::scan(
            &commands::ScanArgs {
                paths,
                config,
                denylist,
                language,
                strict,
                permissive,
                annotations,
                markdown,
            },
            output_mode,
        ),
        Some(Command::Rules { denylist }) => {
            commands::rules(denylist.as_deref(), output_mode)?;
            Ok(0)
        },
        Some(Command::Init { force }) => {
            commands::init(force, output_mode)?;
            Ok(0)
        },
        Some(Command::Version) => {
            if matches!(output_mode, OutputMode::Json) {
                println!("{}", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }));
            } else {
                println!("glyphlint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(0)
        },
        None => {
            if matches!(output_mode, OutputMode::Json) {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("glyphlint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'glyphlint --help' for usage");
                println!("Run 'glyphlint scan' to scan the current directory");
            }
            Ok(0)
        },
    }
}
