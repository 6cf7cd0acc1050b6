//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=todo_outline::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `todo-outline/logs/todo-outline.log` under the platform
//! config directory, with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::outline::MarkerItem;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `todo-outline/logs/todo-outline.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG. Stdout carries the outline itself.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "todo-outline.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of an outline for diffing in debug logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSnapshot {
    pub entries: Vec<(usize, String)>,
}

impl OutlineSnapshot {
    pub fn from_items(items: &[MarkerItem]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|i| (i.line, i.display_label()))
                .collect(),
        }
    }

    /// Describe what changed between two snapshots, or `None` if nothing did
    pub fn diff(&self, other: &OutlineSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.entries.len() != other.entries.len() {
            changes.push(format!(
                "count: {} → {}",
                self.entries.len(),
                other.entries.len()
            ));
        }

        for entry in &other.entries {
            if !self.entries.contains(entry) {
                changes.push(format!("+ line {}: {}", entry.0 + 1, entry.1));
            }
        }
        for entry in &self.entries {
            if !other.entries.contains(entry) {
                changes.push(format!("- line {}: {}", entry.0 + 1, entry.1));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::extract_markers;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let items = extract_markers("TODO a\nTODO b");
        let a = OutlineSnapshot::from_items(&items);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_added_and_removed() {
        let before = OutlineSnapshot::from_items(&extract_markers("TODO a\nTODO b"));
        let after = OutlineSnapshot::from_items(&extract_markers("TODO a\nTODO c\nx TK"));
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("count: 2 → 3"));
        assert!(diff.contains("+ line 2: TODO: c"));
        assert!(diff.contains("+ line 3: TK: x"));
        assert!(diff.contains("- line 2: TODO: b"));
    }
}
