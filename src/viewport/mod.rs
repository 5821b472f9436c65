//! Viewport management
//! Maps the cursor position to a scrolled visible window

//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - After `scroll`, the cursor is always inside the visible window.
//! - Offsets only change when the cursor leaves the window (or is forced).

/// The scrolled rectangle of rows and columns visible on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row (0-indexed)
    row_offset: usize,
    /// First visible rendered column (0-indexed)
    col_offset: usize,
    /// Number of visible text rows
    rows: usize,
    /// Number of visible columns
    cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Clamp the offsets so the cursor (row, rendered column) is visible
    pub fn scroll(&mut self, cursor_row: usize, cursor_col: usize) {
        if cursor_row < self.row_offset {
            self.row_offset = cursor_row;
        }
        if cursor_row >= self.row_offset + self.rows {
            self.row_offset = cursor_row.saturating_sub(self.rows.saturating_sub(1));
        }
        if cursor_col < self.col_offset {
            self.col_offset = cursor_col;
        }
        if cursor_col >= self.col_offset + self.cols {
            self.col_offset = cursor_col.saturating_sub(self.cols.saturating_sub(1));
        }
    }

    /// Force the row offset; the next `scroll` clamps it back into range.
    /// Used by search to bring a match row to the top of the window.
    pub fn set_row_offset(&mut self, offset: usize) {
        self.row_offset = offset;
    }

    /// Force the column offset (prompt-cancel restoration)
    pub fn set_col_offset(&mut self, offset: usize) {
        self.col_offset = offset;
    }

    #[must_use]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    #[must_use]
    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }
}
