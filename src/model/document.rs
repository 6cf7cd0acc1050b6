//! Document model - represents the text buffer and its identity

use ropey::Rope;
use std::path::PathBuf;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            revision: 0,
        }
    }

    /// Create a document with initial text and a path identity
    pub fn with_path(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::with_text(text)
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::with_path(path, &content))
    }

    /// Stable identifier for this document: the file path, or "Untitled"
    /// for a buffer that was never saved
    pub fn identity(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "Untitled".to_string(),
        }
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get the length of a line (excluding newline character)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx < self.buffer.len_lines() {
            let line = self.buffer.line(line_idx);
            line.len_chars().saturating_sub(
                if line.len_chars() > 0 && line.chars().last() == Some('\n') {
                    1
                } else {
                    0
                },
            )
        } else {
            0
        }
    }

    /// Convert a (line, column) position to a buffer offset
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Insert text at a (line, column) position
    pub fn insert(&mut self, line: usize, column: usize, text: &str) {
        let offset = self.cursor_to_offset(line, column);
        self.buffer.insert(offset, text);
        self.bump_revision();
    }

    /// Replace the whole buffer (e.g. after reloading from disk)
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_prefers_path() {
        let doc = Document::with_path("notes/a.md", "");
        assert_eq!(doc.identity(), PathBuf::from("notes/a.md").display().to_string());

        assert_eq!(Document::new().identity(), "Untitled");
    }

    #[test]
    fn test_insert_increments_revision() {
        let mut doc = Document::with_text("hello\nworld");
        doc.insert(1, 0, "TODO ");
        assert_eq!(doc.revision, 1);
        assert_eq!(doc.buffer.to_string(), "hello\nTODO world");
    }

    #[test]
    fn test_cursor_to_offset_clamps() {
        let doc = Document::with_text("line1\nline2\nline3");
        assert_eq!(doc.cursor_to_offset(2, 0), 12);
        assert_eq!(doc.cursor_to_offset(0, 100), 5);
        assert_eq!(doc.cursor_to_offset(9, 0), 17);
    }
}
