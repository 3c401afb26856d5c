//! A read-only text buffer with a cursor and scroll offset.

use std::path::Path;

use anyhow::{Context, Result};

use crate::host::Position;

/// One open file in the viewer.
///
/// The buffer holds the file's lines, the cursor, and the vertical scroll
/// offset. Cursor positions are always clamped to the text, so a `Position`
/// read back from a buffer is valid by construction.
#[derive(Debug, Clone)]
pub struct Buffer {
    name: String,
    lines: Vec<String>,
    cursor: Position,
    scroll: usize,
}

impl Buffer {
    /// Loads a buffer from a file on disk.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Ok(Self::from_lines(
            &name,
            contents.lines().map(str::to_string).collect(),
        ))
    }

    /// Creates a buffer directly from lines.
    ///
    /// An empty `lines` becomes a single empty line so the cursor always has
    /// somewhere to stand.
    pub fn from_lines(name: &str, lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            name: name.to_string(),
            lines,
            cursor: Position::default(),
            scroll: 0,
        }
    }

    /// Returns the buffer's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the buffer's lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the vertical scroll offset.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Moves the cursor to `position`, clamped to the text.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = self.clamp(position);
    }

    /// Moves the cursor by a row/column delta, clamped to the text.
    pub fn move_cursor(&mut self, row_delta: isize, column_delta: isize) {
        let row = self.cursor.row.saturating_add_signed(row_delta);
        let column = self.cursor.column.saturating_add_signed(column_delta);
        self.cursor = self.clamp(Position::new(row, column));
    }

    /// Scrolls so the cursor is visible within a viewport of `height` rows.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor.row < self.scroll {
            self.scroll = self.cursor.row;
        } else if self.cursor.row >= self.scroll + height {
            self.scroll = self.cursor.row + 1 - height;
        }
    }

    fn clamp(&self, position: Position) -> Position {
        let row = position.row.min(self.lines.len() - 1);
        let max_column = self.lines[row].chars().count().saturating_sub(1);
        Position::new(row, position.column.min(max_column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn test_cursor_clamps_to_text() {
        let mut buffer = Buffer::from_lines("test", numbered(10));
        buffer.set_cursor(Position::new(99, 99));
        assert_eq!(buffer.cursor(), Position::new(9, 5));
    }

    #[test]
    fn test_empty_buffer_gets_one_line() {
        let buffer = Buffer::from_lines("empty", vec![]);
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_move_cursor_saturates_at_top() {
        let mut buffer = Buffer::from_lines("test", numbered(10));
        buffer.move_cursor(-5, 0);
        assert_eq!(buffer.cursor().row, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut buffer = Buffer::from_lines("test", numbered(100));
        buffer.set_cursor(Position::new(50, 0));
        buffer.scroll_to_cursor(20);
        assert_eq!(buffer.scroll(), 31);

        buffer.set_cursor(Position::new(10, 0));
        buffer.scroll_to_cursor(20);
        assert_eq!(buffer.scroll(), 10);
    }
}
