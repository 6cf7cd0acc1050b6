//! Command-line argument parsing
//!
//! Supports:
//! - Opening one or more documents
//! - Choosing which one starts active
//! - One-shot or watch mode, plain or JSON output
//! - Jumping to an outline item

use clap::Parser;
use std::path::PathBuf;

use todo_outline::view::TextFormat;

/// Live outline of TODO and TK markers
#[derive(Parser, Debug)]
#[command(
    name = "todo-outline",
    version,
    about = "Live outline of TODO and TK markers"
)]
pub struct CliArgs {
    /// Documents to open
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Document that starts active (defaults to the first path)
    #[arg(short = 'a', long, value_name = "PATH")]
    pub active: Option<PathBuf>,

    /// Print the outline once and exit instead of watching for changes
    #[arg(long)]
    pub once: bool,

    /// Print outlines as JSON
    #[arg(long)]
    pub json: bool,

    /// Activate outline item N (1-based) and print the resulting cursor
    #[arg(long, value_name = "N")]
    pub goto: Option<usize>,
}

/// How long the process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Render once and exit
    Once,
    /// Keep the outline in sync until interrupted
    Watch,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub paths: Vec<PathBuf>,
    pub active: Option<PathBuf>,
    pub mode: RunMode,
    pub format: TextFormat,
    /// Outline row to activate - 1-indexed from user, converted to 0-indexed
    pub goto: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(active) = &self.active {
            if !self.paths.contains(active) {
                return Err(format!(
                    "--active {} is not one of the given paths",
                    active.display()
                ));
            }
        }

        let goto = match self.goto {
            Some(0) => return Err("--goto is 1-based; 0 is not a valid item".to_string()),
            Some(n) => Some(n - 1),
            None => None,
        };

        Ok(StartupConfig {
            paths: self.paths,
            active: self.active,
            mode: if self.once {
                RunMode::Once
            } else {
                RunMode::Watch
            },
            format: if self.json {
                TextFormat::Json
            } else {
                TextFormat::Plain
            },
            goto,
        })
    }
}
