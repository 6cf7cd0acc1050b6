//! Outline rendering
//!
//! The outline is a flat list of `(kind, snippet)` rows. Row `i` maps back to
//! item `i`, which is what a click passes to `Activate`.

use std::io::Write;

use serde::Serialize;

use crate::host::OutlineSurface;
use crate::outline::MarkerItem;

/// Placeholder shown when no document is tracked
pub const NO_DOCUMENT_TEXT: &str = "No active document";

/// Placeholder shown when the tracked document has no markers
pub const NO_ITEMS_TEXT: &str = "No items found";

/// What the outline panel should display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OutlineView<'a> {
    NoDocument,
    Items {
        path: &'a str,
        items: &'a [MarkerItem],
    },
}

impl<'a> OutlineView<'a> {
    pub fn items(&self) -> &'a [MarkerItem] {
        match self {
            OutlineView::NoDocument => &[],
            OutlineView::Items { items, .. } => items,
        }
    }

    /// Display rows as `(kind label, snippet)` pairs
    pub fn rows(&self) -> Vec<(&'static str, &'a str)> {
        self.items()
            .iter()
            .map(|i| (i.kind.label(), i.snippet.as_str()))
            .collect()
    }

    /// Neutral placeholder text, if the view has no rows
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            OutlineView::NoDocument => Some(NO_DOCUMENT_TEXT),
            OutlineView::Items { items, .. } if items.is_empty() => Some(NO_ITEMS_TEXT),
            OutlineView::Items { .. } => None,
        }
    }
}

/// Output format for [`TextSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Json,
}

/// Renders the outline as text to any writer (stdout for the CLI)
pub struct TextSurface<W: Write> {
    out: W,
    format: TextFormat,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W, format: TextFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &OutlineView<'_>) -> std::io::Result<()> {
        match self.format {
            TextFormat::Plain => {
                if let OutlineView::Items { path, .. } = view {
                    writeln!(self.out, "{}", path)?;
                }
                if let Some(text) = view.placeholder() {
                    writeln!(self.out, "  {}", text)?;
                }
                for item in view.items() {
                    writeln!(
                        self.out,
                        "  {:>4}: [{}] {}",
                        item.line + 1,
                        item.kind.label(),
                        item.snippet
                    )?;
                }
            }
            TextFormat::Json => {
                let json = serde_json::to_string(view).map_err(std::io::Error::other)?;
                writeln!(self.out, "{}", json)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> OutlineSurface for TextSurface<W> {
    fn render(&mut self, view: &OutlineView<'_>) {
        if let Err(e) = self.write_view(view) {
            tracing::warn!("Failed to write outline: {}", e);
        }
    }
}
