//! Model module - outline context and the in-memory editor workspace
//!
//! [`OutlineModel`] is the explicit context object that the update functions
//! operate on: document tracker, rendered outline, change monitor, pending
//! refresh and panel lifecycle all live here, never in global state.

pub mod document;
pub mod editor;
pub mod monitor;
pub mod tracker;
pub mod workspace;

pub use document::Document;
pub use editor::{EditorView, Position, Viewport};
pub use monitor::{ChangeMonitor, RefreshDebouncer};
pub use tracker::{DocumentTracker, TrackedDocument};
pub use workspace::Workspace;

use crate::config::OutlineConfig;
use crate::outline::MarkerItem;
use crate::view::OutlineView;

/// The last outline shown to the user, used as the diff baseline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderedOutline {
    #[default]
    NoDocument,
    Items {
        path: String,
        items: Vec<MarkerItem>,
    },
}

impl RenderedOutline {
    pub fn items(&self) -> &[MarkerItem] {
        match self {
            RenderedOutline::NoDocument => &[],
            RenderedOutline::Items { items, .. } => items,
        }
    }

    pub fn view(&self) -> OutlineView<'_> {
        match self {
            RenderedOutline::NoDocument => OutlineView::NoDocument,
            RenderedOutline::Items { path, items } => OutlineView::Items { path, items },
        }
    }
}

/// Outline panel state
#[derive(Debug, Clone, Default)]
pub struct OutlineModel {
    pub config: OutlineConfig,
    pub tracker: DocumentTracker,
    pub rendered: RenderedOutline,
    pub monitor: ChangeMonitor,
    pub pending_refresh: RefreshDebouncer,
    /// Whether the outline panel is open; closed panels ignore timers and events
    pub panel_open: bool,
    /// One retry is allowed after opening if resolution finds nothing
    pub retry_armed: bool,
    /// Number of refreshes performed (for diagnostics)
    pub refresh_count: u64,
}

impl OutlineModel {
    pub fn new(config: OutlineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// What the surface should currently show
    pub fn view(&self) -> OutlineView<'_> {
        self.rendered.view()
    }
}
