//! Editor view state - cursor and viewport for one open document

use super::document::Document;

/// A position in the document (line and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Viewport - the visible window into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Viewport {
    /// Create a new viewport with the given height
    pub fn new(visible_lines: usize) -> Self {
        Self {
            top_line: 0,
            visible_lines,
        }
    }

    /// Whether `line` is inside the viewport
    pub fn contains(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.visible_lines
    }

    /// Scroll just enough to bring the inclusive range `from..=to` into view.
    ///
    /// When the range is taller than the viewport its first line wins.
    pub fn reveal(&mut self, from: usize, to: usize, total_lines: usize) {
        if self.visible_lines == 0 || total_lines <= self.visible_lines {
            self.top_line = 0;
            return;
        }

        let max_top = total_lines.saturating_sub(self.visible_lines);
        let (from, to) = (from.min(to), from.max(to));

        if from < self.top_line {
            self.top_line = from;
        } else if to >= self.top_line + self.visible_lines {
            self.top_line = (to + 1).saturating_sub(self.visible_lines).min(from);
        }

        self.top_line = self.top_line.min(max_top);
    }
}

/// An open document view
#[derive(Debug, Clone)]
pub struct EditorView {
    pub document: Document,
    /// Primary cursor
    pub cursor: Position,
    pub viewport: Viewport,
    /// False once the view's capabilities have been torn down
    pub alive: bool,
}

impl EditorView {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            cursor: Position::default(),
            viewport: Viewport::default(),
            alive: true,
        }
    }

    /// Move the cursor, clamping to the document bounds
    pub fn set_cursor(&mut self, line: usize, column: usize) {
        let line = line.min(self.document.line_count().saturating_sub(1));
        let column = column.min(self.document.line_length(line));
        self.cursor = Position::new(line, column);
    }
}
