//! Row storage and tab-aware rendering

//! ## row/ Invariants
//!
//! - `render` is the tab-expanded image of `chars`, so `render.len() >= chars.len()`.
//! - `hl` classifies rendered bytes and always has `render`'s length after a
//!   highlight pass.
//! - `idx` equals the row's position in the owning buffer.
//! - Raw and rendered columns round-trip through the column mapping.

use crate::constants::editing::TAB_STOP;
use crate::syntax::Highlight;

/// One line of text: raw bytes plus their rendered image and highlighting
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Position of this row in the buffer
    pub idx: usize,
    /// Raw content
    chars: Vec<u8>,
    /// Tab-expanded content
    render: Vec<u8>,
    /// Per-rendered-byte classification, same length as `render`
    pub hl: Vec<Highlight>,
    /// Whether this row ends inside an unterminated block comment
    pub open_comment: bool,
}

impl Row {
    /// Create a row from raw bytes; `update` computes the rendered image
    #[must_use]
    pub fn new(idx: usize, text: &[u8]) -> Self {
        let mut row = Row {
            idx,
            chars: text.to_vec(),
            render: Vec::new(),
            hl: Vec::new(),
            open_comment: false,
        };
        row.update();
        row
    }

    /// Raw content
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Tab-expanded content
    #[must_use]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Raw length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Rendered length in bytes
    #[must_use]
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Recompute the rendered image from the raw content.
    ///
    /// Each tab pads with spaces up to the next multiple of `TAB_STOP`;
    /// every other byte copies through unchanged.
    pub fn update(&mut self) {
        self.render.clear();
        for &c in &self.chars {
            if c == b'\t' {
                self.render.push(b' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(c);
            }
        }
        // Keep the classification array length-consistent until the next
        // highlight pass overwrites it
        self.hl = vec![Highlight::Normal; self.render.len()];
    }

    /// Convert a raw column to its rendered column
    #[must_use]
    pub fn raw_to_rendered_col(&self, raw_col: usize) -> usize {
        let mut rx = 0;
        for &c in self.chars.iter().take(raw_col) {
            if c == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Convert a rendered column back to the raw column whose rendered
    /// position first reaches or exceeds it
    #[must_use]
    pub fn rendered_to_raw_col(&self, rendered_col: usize) -> usize {
        let mut rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            if c == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
            if rx > rendered_col {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Insert a byte at the given raw column, clamping past-the-end positions
    pub fn insert_char(&mut self, at: usize, c: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, c);
        self.update();
    }

    /// Delete the byte at the given raw column; out-of-range is a no-op
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update();
        true
    }

    /// Append raw bytes to the end of the row
    pub fn append_bytes(&mut self, text: &[u8]) {
        self.chars.extend_from_slice(text);
        self.update();
    }

    /// Truncate at the given raw column and return the removed suffix
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update();
        tail
    }
}
