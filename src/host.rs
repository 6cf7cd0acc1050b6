//! Host capabilities consumed by the outline
//!
//! The host owns windows, panels and the text-editing surface. The outline
//! only needs to enumerate document views, read their text, and move the
//! cursor when an item is activated.

use crate::view::OutlineView;

/// Opaque identifier for an open document view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// Document views and editing capabilities provided by the host application
pub trait DocumentHost {
    /// All open document views, in host order
    fn document_views(&self) -> Vec<ViewId>;

    /// The view the host reports as active.
    ///
    /// May name a view that is not a document view (e.g. the outline panel
    /// itself), or nothing at all during startup.
    fn active_view(&self) -> Option<ViewId>;

    /// Whether the view's text and cursor capabilities are still usable
    fn is_alive(&self, view: ViewId) -> bool;

    /// Stable identifier of the document shown in the view
    fn path(&self, view: ViewId) -> Option<String>;

    /// Full text content; `None` once the capability is torn down
    fn text(&self, view: ViewId) -> Option<String>;

    /// Move the primary cursor to `(line, column)`
    fn set_cursor(&mut self, view: ViewId, line: usize, column: usize);

    /// Reveal the inclusive line range in the view's viewport
    fn scroll_into_view(&mut self, view: ViewId, from_line: usize, to_line: usize);

    /// Give the view input focus
    fn focus(&mut self, view: ViewId);
}

/// Where the outline list is drawn
pub trait OutlineSurface {
    /// Replace the visible list with `view`
    fn render(&mut self, view: &OutlineView<'_>);
}
