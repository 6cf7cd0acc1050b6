//! Marker outline extraction
//!
//! Scans raw document text for inline `TODO` and `TK` markers.
//! Used by the outline panel to show a clickable list of marker locations.

mod extract;

pub use extract::{extract_markers, extract_markers_from, TK_SNIPPET_WORDS, TODO_SNIPPET_WORDS};

use serde::Serialize;

/// Marker kind for display and categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerKind {
    /// `TODO`: the snippet is taken from the words that follow the token
    Todo,
    /// `TK` ("to come"): the snippet is taken from the words that precede the token
    Tk,
}

impl MarkerKind {
    /// Short label for rendering in the outline list
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Todo => "TODO",
            MarkerKind::Tk => "TK",
        }
    }
}

/// One detected marker occurrence.
///
/// Items are created fresh on every scan and never mutated; a new scan
/// replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MarkerItem {
    pub kind: MarkerKind,
    /// Trimmed, single-spaced words adjacent to the marker
    pub snippet: String,
    /// Zero-based line index at scan time
    pub line: usize,
    /// Zero-based character offset of the token within its line
    pub column: usize,
    /// Zero-based character offset of the token from the document start
    pub offset: usize,
}

impl MarkerItem {
    /// Text shown for this item in the outline list
    pub fn display_label(&self) -> String {
        if self.snippet.is_empty() {
            self.kind.label().to_string()
        } else {
            format!("{}: {}", self.kind.label(), self.snippet)
        }
    }
}

/// Structural equality used for change detection.
///
/// Two outlines are equivalent when they have the same length and the same
/// `(snippet, line)` sequence. Offsets, columns and kinds are ignored so that
/// edits which only shift text within a line do not trigger a refresh.
pub fn outlines_equivalent(a: &[MarkerItem], b: &[MarkerItem]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.line == y.line && x.snippet == y.snippet)
}
