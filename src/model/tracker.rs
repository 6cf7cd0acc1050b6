//! Document tracker - which document currently drives the outline

use crate::host::{DocumentHost, ViewId};

/// The document the outline is synchronized against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedDocument {
    pub view: ViewId,
    pub path: String,
}

/// Holds at most one current document.
///
/// Resolution doubles as a state transition: [`DocumentTracker::resolve`]
/// updates the current document as a side effect.
#[derive(Debug, Clone, Default)]
pub struct DocumentTracker {
    current: Option<TrackedDocument>,
}

impl DocumentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently tracked document, without re-validating it
    pub fn current(&self) -> Option<&TrackedDocument> {
        self.current.as_ref()
    }

    /// Forget the tracked document
    pub fn clear(&mut self) {
        if let Some(doc) = self.current.take() {
            tracing::debug!("tracker: cleared {}", doc.path);
        }
    }

    /// Whether `doc` can still be used: its capability is alive and the
    /// host still lists its view among the open document views.
    pub fn is_valid<H: DocumentHost + ?Sized>(host: &H, doc: &TrackedDocument) -> bool {
        host.is_alive(doc.view) && host.document_views().contains(&doc.view)
    }

    /// Resolve the current document.
    ///
    /// 1. Keep the previously tracked document while it is still valid and
    ///    no other live document view is active, so a transient non-document
    ///    active view (such as the outline panel gaining focus) does not
    ///    cause a resync.
    /// 2. Otherwise prefer the active view if it is a live document view.
    /// 3. Otherwise fall back to the first live document view.
    /// 4. Otherwise clear the tracker and return `None`.
    pub fn resolve<H: DocumentHost + ?Sized>(&mut self, host: &H) -> Option<TrackedDocument> {
        let views = host.document_views();
        let usable = |view: &ViewId| host.is_alive(*view) && host.path(*view).is_some();
        let active = host
            .active_view()
            .filter(|active| views.contains(active) && usable(active));

        if let Some(doc) = &self.current {
            let switched = active.is_some_and(|view| view != doc.view);
            if !switched && Self::is_valid(host, doc) {
                match host.path(doc.view) {
                    Some(path) if path == doc.path => return Some(doc.clone()),
                    // Same view now shows another document: re-resolve it
                    Some(path) => {
                        let doc = TrackedDocument {
                            view: doc.view,
                            path,
                        };
                        tracing::debug!("tracker: view {} now shows {}", doc.view.0, doc.path);
                        self.current = Some(doc.clone());
                        return Some(doc);
                    }
                    None => {}
                }
            }
        }

        let chosen = active.or_else(|| views.iter().copied().find(|v| usable(v)));

        self.current = chosen.and_then(|view| {
            host.path(view)
                .map(|path| TrackedDocument { view, path })
        });

        match &self.current {
            Some(doc) => tracing::debug!("tracker: resolved {} (view {})", doc.path, doc.view.0),
            None => tracing::debug!("tracker: no document view available"),
        }

        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Workspace;

    #[test]
    fn test_resolve_empty_workspace() {
        let ws = Workspace::new();
        let mut tracker = DocumentTracker::new();
        assert!(tracker.resolve(&ws).is_none());
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_prefers_active_view() {
        let mut ws = Workspace::new();
        let _a = ws.open("a.md", "a");
        let b = ws.open("b.md", "b");
        ws.set_active(Some(b));

        let mut tracker = DocumentTracker::new();
        let doc = tracker.resolve(&ws).unwrap();
        assert_eq!(doc.view, b);
        assert_eq!(doc.path, "b.md");
    }

    #[test]
    fn test_falls_back_to_first_document() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let _b = ws.open("b.md", "b");
        ws.set_active(None);

        let mut tracker = DocumentTracker::new();
        assert_eq!(tracker.resolve(&ws).unwrap().view, a);
    }

    #[test]
    fn test_keeps_previous_while_valid() {
        let mut ws = Workspace::new();
        let _a = ws.open("a.md", "a");
        let b = ws.open("b.md", "b");

        let mut tracker = DocumentTracker::new();
        assert_eq!(tracker.resolve(&ws).unwrap().view, b);

        // The outline panel gaining focus is not a document view
        ws.set_active(Some(ViewId(9999)));
        assert_eq!(tracker.resolve(&ws).unwrap().view, b);

        // Nothing active at all keeps it too, rather than the first view
        ws.set_active(None);
        assert_eq!(tracker.resolve(&ws).unwrap().view, b);
    }

    #[test]
    fn test_follows_switch_to_other_document() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let b = ws.open("b.md", "b");
        ws.set_active(Some(a));

        let mut tracker = DocumentTracker::new();
        assert_eq!(tracker.resolve(&ws).unwrap().view, a);

        ws.set_active(Some(b));
        let doc = tracker.resolve(&ws).unwrap();
        assert_eq!(doc.view, b);
        assert_eq!(doc.path, "b.md");
        assert_eq!(tracker.current().map(|d| d.view), Some(b));
    }

    #[test]
    fn test_dead_active_view_does_not_steal_tracking() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let b = ws.open("b.md", "b");
        ws.set_active(Some(a));

        let mut tracker = DocumentTracker::new();
        tracker.resolve(&ws);

        ws.tear_down(b);
        ws.set_active(Some(b));
        assert_eq!(tracker.resolve(&ws).unwrap().view, a);
    }

    #[test]
    fn test_closed_document_is_replaced() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let b = ws.open("b.md", "b");
        ws.set_active(Some(a));

        let mut tracker = DocumentTracker::new();
        tracker.resolve(&ws);
        ws.close(a);
        ws.set_active(Some(b));

        assert_eq!(tracker.resolve(&ws).unwrap().view, b);
    }

    #[test]
    fn test_last_document_closed_clears_tracker() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let mut tracker = DocumentTracker::new();
        tracker.resolve(&ws);

        ws.close(a);
        assert!(tracker.resolve(&ws).is_none());
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_view_navigated_to_other_file_updates_path() {
        let mut ws = Workspace::new();
        let a = ws.open("a.md", "a");
        let mut tracker = DocumentTracker::new();
        tracker.resolve(&ws);

        ws.replace_document(a, "c.md", "c");
        let doc = tracker.resolve(&ws).unwrap();
        assert_eq!(doc.view, a);
        assert_eq!(doc.path, "c.md");
    }
}
