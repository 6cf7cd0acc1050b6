use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use todo_outline::model::{Document, Workspace};
use todo_outline::view::TextSurface;
use todo_outline::{DocumentHost, HostEvent, OutlineConfig, OutlineMsg, OutlineRuntime, ViewId};

mod cli;
mod fs_watcher;

use cli::{CliArgs, RunMode, StartupConfig};
use fs_watcher::{normalize_path, DocumentWatcher, FileSystemEvent};

type Runtime = OutlineRuntime<Workspace, TextSurface<Stdout>>;

/// How often the watch loop checks the file watcher between message batches
const WATCH_POLL_MS: u64 = 100;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    todo_outline::tracing::init();

    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let config = OutlineConfig::load();

    let (workspace, opened) = open_documents(&startup)?;
    let surface = TextSurface::new(std::io::stdout(), startup.format);
    let mut runtime = OutlineRuntime::new(config, workspace, surface);

    runtime.dispatch(OutlineMsg::PanelOpened);
    runtime.dispatch(OutlineMsg::Refresh);

    if let Some(index) = startup.goto {
        goto_item(&mut runtime, index)?;
    }

    if startup.mode == RunMode::Watch {
        watch(&mut runtime, &opened);
    }

    runtime.dispatch(OutlineMsg::PanelClosed);
    Ok(())
}

/// Open every readable path as a document view; unreadable ones are skipped
fn open_documents(startup: &StartupConfig) -> Result<(Workspace, Vec<(PathBuf, ViewId)>)> {
    let mut workspace = Workspace::new();
    let mut opened = Vec::new();
    let mut active = None;

    for path in &startup.paths {
        match Document::from_file(path.clone()) {
            Ok(document) => {
                let view = workspace.open_document(document);
                if startup.active.as_ref() == Some(path) {
                    active = Some(view);
                }
                opened.push((normalize_path(path), view));
            }
            Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let Some((_, first)) = opened.first() else {
        bail!("none of the given paths could be opened");
    };
    workspace.set_active(Some(active.unwrap_or(*first)));

    Ok((workspace, opened))
}

/// Click outline row `index` and report where the cursor landed
fn goto_item(runtime: &mut Runtime, index: usize) -> Result<()> {
    if !runtime.activate_row(index) {
        bail!(
            "outline has {} item(s); cannot go to item {}",
            runtime.model().rendered.items().len(),
            index + 1
        );
    }

    let doc = runtime
        .model()
        .tracker
        .current()
        .context("no document is tracked")?;
    let cursor = runtime
        .host()
        .cursor(doc.view)
        .context("tracked view disappeared")?;
    println!("{}:{}:{}", doc.path, cursor.line + 1, cursor.column + 1);
    Ok(())
}

/// Keep the outline in sync with on-disk edits until the process is stopped
fn watch(runtime: &mut Runtime, opened: &[(PathBuf, ViewId)]) {
    let paths: Vec<PathBuf> = opened.iter().map(|(p, _)| p.clone()).collect();
    let debounce = Duration::from_millis(runtime.model().config.debounce_ms);

    // Without a watcher the change monitor's sampling still picks up edits
    // made through the host, so a failure here is not fatal
    let watcher = match DocumentWatcher::new(&paths, debounce) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!("File watching unavailable: {}", e);
            None
        }
    };

    while !runtime.is_quit() {
        runtime.run_for(Duration::from_millis(WATCH_POLL_MS));

        let Some(watcher) = &watcher else {
            continue;
        };
        for event in watcher.poll_events() {
            apply_fs_event(runtime, opened, event);
        }
    }
}

fn view_for(opened: &[(PathBuf, ViewId)], path: &PathBuf) -> Option<ViewId> {
    opened.iter().find(|(p, _)| p == path).map(|(_, v)| *v)
}

fn apply_fs_event(runtime: &mut Runtime, opened: &[(PathBuf, ViewId)], event: FileSystemEvent) {
    match event {
        FileSystemEvent::Changed(path) => {
            let Some(view) = view_for(opened, &path) else {
                return;
            };
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    runtime.host_mut().set_text(view, &content);
                    runtime.dispatch(HostEvent::DocumentModified);
                }
                Err(e) => tracing::warn!("Failed to reload {}: {}", path.display(), e),
            }
        }
        FileSystemEvent::Removed(path) => {
            let Some(view) = view_for(opened, &path) else {
                return;
            };
            tracing::info!("{} was removed, closing it", path.display());
            let host = runtime.host_mut();
            host.close(view);
            if host.active_view().is_none() {
                let next = host.document_views().first().copied();
                host.set_active(next);
            }
            runtime.dispatch(HostEvent::ActiveViewChanged);
        }
    }
}
