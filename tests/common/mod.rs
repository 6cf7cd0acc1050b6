//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use todo_outline::commands::Cmd;
use todo_outline::config::OutlineConfig;
use todo_outline::host::OutlineSurface;
use todo_outline::messages::{Msg, OutlineMsg};
use todo_outline::model::{OutlineModel, Workspace};
use todo_outline::update::update;
use todo_outline::view::OutlineView;
use todo_outline::{MarkerItem, OutlineRuntime, ViewId};

/// Config with short delays so runtime tests finish quickly
pub fn fast_config() -> OutlineConfig {
    OutlineConfig {
        sample_interval_ms: 10,
        debounce_ms: 5,
        settle_ms: 1,
        retry_on_empty: true,
    }
}

/// One rendered frame, owned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    NoDocument,
    Items { path: String, items: Vec<MarkerItem> },
}

impl Frame {
    pub fn snippets(&self) -> Vec<String> {
        match self {
            Frame::NoDocument => Vec::new(),
            Frame::Items { items, .. } => items.iter().map(|i| i.snippet.clone()).collect(),
        }
    }
}

/// Surface that records every render
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<Frame>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl OutlineSurface for RecordingSurface {
    fn render(&mut self, view: &OutlineView<'_>) {
        self.frames.push(match view {
            OutlineView::NoDocument => Frame::NoDocument,
            OutlineView::Items { path, items } => Frame::Items {
                path: path.to_string(),
                items: items.to_vec(),
            },
        });
    }
}

/// Workspace with one document open and active
pub fn workspace_with(path: &str, text: &str) -> (Workspace, ViewId) {
    let mut ws = Workspace::new();
    let view = ws.open(path, text);
    (ws, view)
}

/// Model with the panel already open and no timers pending
pub fn open_model(ws: &mut Workspace) -> OutlineModel {
    let mut model = OutlineModel::new(OutlineConfig::default());
    update(&mut model, ws, Msg::Outline(OutlineMsg::PanelOpened));
    model
}

/// Run a message and return its flattened commands
pub fn step(model: &mut OutlineModel, ws: &mut Workspace, msg: OutlineMsg) -> Vec<Cmd> {
    update(model, ws, Msg::Outline(msg))
        .map(Cmd::flatten)
        .unwrap_or_default()
}

/// Tokens of every ScheduleRefresh in `cmds`
pub fn refresh_tokens(cmds: &[Cmd]) -> Vec<u64> {
    cmds.iter()
        .filter_map(|c| match c {
            Cmd::ScheduleRefresh { token, .. } => Some(*token),
            _ => None,
        })
        .collect()
}

/// Generations of every ScheduleSample in `cmds`
pub fn sample_generations(cmds: &[Cmd]) -> Vec<u64> {
    cmds.iter()
        .filter_map(|c| match c {
            Cmd::ScheduleSample { generation, .. } => Some(*generation),
            _ => None,
        })
        .collect()
}

pub fn redraws(cmds: &[Cmd]) -> usize {
    cmds.iter().filter(|c| **c == Cmd::Redraw).count()
}

/// Pump the runtime until `done` holds or the timeout passes
pub fn run_until<F>(
    runtime: &mut OutlineRuntime<Workspace, RecordingSurface>,
    timeout: Duration,
    mut done: F,
) -> bool
where
    F: FnMut(&OutlineRuntime<Workspace, RecordingSurface>) -> bool,
{
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if done(runtime) {
            return true;
        }
        runtime.run_for(Duration::from_millis(5));
    }
    done(runtime)
}
