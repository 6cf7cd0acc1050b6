//! File system watching for opened documents
//!
//! Uses the `notify` crate with debouncing to detect edits made on disk and
//! turn them into document-modified notifications. Parent directories are
//! watched (non-recursively) so that editors which save by renaming a
//! temporary file over the original are still noticed.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Events emitted by the document watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSystemEvent {
    /// A watched document changed on disk
    Changed(PathBuf),
    /// A watched document no longer exists
    Removed(PathBuf),
}

/// Watches a fixed set of document files with debouncing
pub struct DocumentWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    /// Receiver for debounced events
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    /// Normalized paths of the documents being watched
    documents: HashSet<PathBuf>,
}

/// Absolute form of `path` that stays stable after the file is deleted:
/// the canonical parent directory joined with the file name.
pub fn normalize_path(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent.canonicalize().unwrap_or(parent);
    match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    }
}

impl DocumentWatcher {
    /// Start watching `paths`, coalescing bursts of changes within `debounce`
    pub fn new(paths: &[PathBuf], debounce: Duration) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(debounce, tx)?;

        let documents: HashSet<PathBuf> = paths.iter().map(|p| normalize_path(p)).collect();
        let dirs: HashSet<PathBuf> = documents
            .iter()
            .filter_map(|p| p.parent().map(Path::to_path_buf))
            .collect();

        for dir in &dirs {
            debouncer
                .watcher()
                .watch(dir, notify::RecursiveMode::NonRecursive)?;
            tracing::info!("Watching {} for document changes", dir.display());
        }

        Ok(Self {
            _debouncer: debouncer,
            rx,
            documents,
        })
    }

    /// Poll for pending document events (non-blocking)
    pub fn poll_events(&self) -> Vec<FileSystemEvent> {
        let mut events = Vec::new();

        // Drain all pending events from the channel
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(debounced_events) => {
                    for event in debounced_events {
                        if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
                            // Continuous events during active changes - wait for the final one
                            continue;
                        }

                        let path = normalize_path(&event.path);
                        if !self.documents.contains(&path) {
                            continue;
                        }

                        let fs_event = if path.exists() {
                            FileSystemEvent::Changed(path)
                        } else {
                            FileSystemEvent::Removed(path)
                        };

                        // Deduplicate: don't report the same event twice
                        if !events.contains(&fs_event) {
                            events.push(fs_event);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("File system watcher error: {:?}", e);
                }
            }
        }

        if !events.is_empty() {
            tracing::debug!("Document watcher detected {} changes", events.len());
        }

        events
    }
}
