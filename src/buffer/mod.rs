//! Row-oriented text buffer
//! Owns the ordered sequence of rows and every edit operation on them

//! ## buffer/ Invariants
//!
//! - `row.idx` always equals the row's position in `rows`.
//! - Every mutation recomputes render + highlight for the rows whose raw
//!   content changed, synchronously.
//! - Block-comment carry flags stay consistent: a flag change re-classifies
//!   following rows until one is unchanged.
//! - The dirty counter increases on every mutation and resets only on a
//!   successful save or load.

use std::path::{Path, PathBuf};

use crate::constants::errors;
use crate::error::{ErrorKind, InnError, Result};
use crate::row::Row;
use crate::syntax::{self, Language};

/// The in-memory document: ordered rows, dirty state, language profile
#[derive(Default)]
pub struct Buffer {
    rows: Vec<Row>,
    /// Mutation counter; nonzero means unsaved changes
    dirty: u64,
    filename: Option<PathBuf>,
    syntax: Option<&'static Language>,
}

impl Buffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    #[must_use]
    pub fn row_mut(&mut self, at: usize) -> Option<&mut Row> {
        self.rows.get_mut(at)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    #[must_use]
    pub fn syntax(&self) -> Option<&'static Language> {
        self.syntax
    }

    /// Set the file path and re-select the language profile from its name
    pub fn set_filename(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.syntax = syntax::select_language(&name);
        self.filename = Some(path);
        self.rehighlight_all();
    }

    /// Insert a new row at `at`; out-of-range positions are ignored
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(at, text));
        self.renumber_from(at);
        self.highlight_from(at);
        self.dirty += 1;
    }

    /// Delete the row at `at`; out-of-range positions are ignored
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.renumber_from(at);
        if at < self.rows.len() {
            self.highlight_from(at);
        }
        self.dirty += 1;
    }

    /// Insert a byte into a row, appending an empty row when the cursor sits
    /// one past the last row
    pub fn insert_char(&mut self, row: usize, col: usize, c: u8) {
        if row == self.rows.len() {
            self.insert_row(self.rows.len(), b"");
        }
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.insert_char(col, c);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Delete the byte at a raw column; out-of-range requests are ignored
    pub fn delete_char(&mut self, row: usize, col: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        if r.delete_char(col) {
            self.update_row(row);
            self.dirty += 1;
        }
    }

    /// Append raw bytes to the end of a row
    pub fn append_text(&mut self, row: usize, text: &[u8]) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.append_bytes(text);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Split a row at a raw column, moving the suffix into a new row
    /// immediately following
    pub fn split_row(&mut self, row: usize, col: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        let tail = r.split_off(col);
        self.insert_row(row + 1, &tail);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Join row `at` onto the previous row. Returns the previous row's
    /// original length, where the cursor relocates. Joining the first row
    /// is a no-op.
    pub fn join_row(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.rows.len() {
            return None;
        }
        let join_col = self.rows[at - 1].len();
        let tail = self.rows[at].chars().to_vec();
        self.append_text(at - 1, &tail);
        self.delete_row(at);
        Some(join_col)
    }

    /// Serialize as newline-joined rows, one trailing newline per row
    #[must_use]
    pub fn rows_to_string(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rows.iter().map(|r| r.len() + 1).sum());
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }

    /// Load a file into the buffer, stripping trailing newline and carriage
    /// return characters from each line
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            InnError::new(
                ErrorKind::Io,
                errors::OPEN_FAILED,
                format!("{}: {}", path.display(), e),
            )
        })?;
        self.set_filename(path.to_path_buf());
        for line in text.lines() {
            self.insert_row(self.rows.len(), line.as_bytes());
        }
        self.dirty = 0;
        Ok(())
    }

    /// Write the buffer to its file. Returns the number of bytes written.
    /// On failure the buffer and its dirty state are left untouched.
    pub fn save(&mut self) -> Result<usize> {
        let Some(path) = self.filename.clone() else {
            return Err(InnError::new(
                ErrorKind::Io,
                errors::NO_PATH,
                "no file name set",
            ));
        };
        let data = self.rows_to_string();
        std::fs::write(&path, &data).map_err(|e| {
            InnError::new(
                ErrorKind::Io,
                errors::SAVE_FAILED,
                format!("{}: {}", path.display(), e),
            )
        })?;
        self.dirty = 0;
        Ok(data.len())
    }

    /// Recompute the rendered image and highlighting of one row
    fn update_row(&mut self, at: usize) {
        if let Some(r) = self.rows.get_mut(at) {
            r.update();
        }
        self.highlight_from(at);
    }

    /// Re-classify rows starting at `at`, following block-comment carry flag
    /// changes forward until a row's flag is unchanged or the buffer ends.
    /// A bounded loop rather than recursion, so long comment runs cannot
    /// grow the stack.
    fn highlight_from(&mut self, at: usize) {
        let mut at = at;
        while at < self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment;
            let changed = syntax::highlight_row(&mut self.rows[at], self.syntax, starts_in_comment);
            if !changed {
                break;
            }
            at += 1;
        }
    }

    /// Re-classify the whole buffer (after the language profile changed)
    fn rehighlight_all(&mut self) {
        for at in 0..self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment;
            syntax::highlight_row(&mut self.rows[at], self.syntax, starts_in_comment);
        }
    }

    /// Keep row indices consistent with storage order after insert/delete.
    /// O(n) per edit; a lazy index scheme could avoid the walk.
    fn renumber_from(&mut self, at: usize) {
        for idx in at..self.rows.len() {
            self.rows[idx].idx = idx;
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
