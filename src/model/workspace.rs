//! In-memory workspace of open document views
//!
//! A self-contained [`DocumentHost`]: views are kept in open order, one of
//! them (or a non-document view) is active, and closing a view tears down its
//! capabilities.

use super::document::Document;
use super::editor::{EditorView, Position};
use crate::host::{DocumentHost, ViewId};

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    views: Vec<(ViewId, EditorView)>,
    active: Option<ViewId>,
    focused: Option<ViewId>,
    next_id: u64,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `text` as a new document view and make it active
    pub fn open(&mut self, path: &str, text: &str) -> ViewId {
        self.open_document(Document::with_path(path, text))
    }

    /// Add a document view and make it active
    pub fn open_document(&mut self, document: Document) -> ViewId {
        self.next_id += 1;
        let id = ViewId(self.next_id);
        tracing::debug!("workspace: open {} as view {}", document.identity(), id.0);
        self.views.push((id, EditorView::new(document)));
        self.active = Some(id);
        id
    }

    /// Close a view: it disappears from the workspace
    pub fn close(&mut self, view: ViewId) {
        self.views.retain(|(id, _)| *id != view);
        if self.active == Some(view) {
            self.active = None;
        }
        if self.focused == Some(view) {
            self.focused = None;
        }
    }

    /// Tear down a view's capabilities while the host still lists it
    pub fn tear_down(&mut self, view: ViewId) {
        if let Some(v) = self.view_mut(view) {
            v.alive = false;
        }
    }

    /// Set the active view; `None` or an unknown id models a transient
    /// non-document view (e.g. the outline panel itself)
    pub fn set_active(&mut self, view: Option<ViewId>) {
        self.active = view;
    }

    pub fn focused(&self) -> Option<ViewId> {
        self.focused
    }

    pub fn view(&self, view: ViewId) -> Option<&EditorView> {
        self.views.iter().find(|(id, _)| *id == view).map(|(_, v)| v)
    }

    pub fn view_mut(&mut self, view: ViewId) -> Option<&mut EditorView> {
        self.views
            .iter_mut()
            .find(|(id, _)| *id == view)
            .map(|(_, v)| v)
    }

    pub fn document(&self, view: ViewId) -> Option<&Document> {
        self.view(view).map(|v| &v.document)
    }

    pub fn document_mut(&mut self, view: ViewId) -> Option<&mut Document> {
        self.view_mut(view).map(|v| &mut v.document)
    }

    pub fn cursor(&self, view: ViewId) -> Option<Position> {
        self.view(view).map(|v| v.cursor)
    }

    /// Insert text into a view's document
    pub fn insert(&mut self, view: ViewId, line: usize, column: usize, text: &str) {
        if let Some(doc) = self.document_mut(view) {
            doc.insert(line, column, text);
        }
    }

    /// Replace a view's whole text
    pub fn set_text(&mut self, view: ViewId, text: &str) {
        if let Some(doc) = self.document_mut(view) {
            doc.set_text(text);
        }
    }

    /// Navigate an existing view to another document
    pub fn replace_document(&mut self, view: ViewId, path: &str, text: &str) {
        if let Some(v) = self.view_mut(view) {
            *v = EditorView::new(Document::with_path(path, text));
        }
    }
}

impl DocumentHost for Workspace {
    fn document_views(&self) -> Vec<ViewId> {
        self.views.iter().map(|(id, _)| *id).collect()
    }

    fn active_view(&self) -> Option<ViewId> {
        self.active
    }

    fn is_alive(&self, view: ViewId) -> bool {
        self.view(view).is_some_and(|v| v.alive)
    }

    fn path(&self, view: ViewId) -> Option<String> {
        self.view(view)
            .filter(|v| v.alive)
            .map(|v| v.document.identity())
    }

    fn text(&self, view: ViewId) -> Option<String> {
        self.view(view)
            .filter(|v| v.alive)
            .map(|v| v.document.buffer.to_string())
    }

    fn set_cursor(&mut self, view: ViewId, line: usize, column: usize) {
        if let Some(v) = self.view_mut(view).filter(|v| v.alive) {
            v.set_cursor(line, column);
        }
    }

    fn scroll_into_view(&mut self, view: ViewId, from_line: usize, to_line: usize) {
        if let Some(v) = self.view_mut(view).filter(|v| v.alive) {
            let total = v.document.line_count();
            v.viewport.reveal(from_line, to_line, total);
        }
    }

    fn focus(&mut self, view: ViewId) {
        if self.is_alive(view) {
            self.focused = Some(view);
            self.active = Some(view);
        }
    }
}
