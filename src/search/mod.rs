//! Incremental search
//! Substring search over rendered rows with a match-highlight overlay

use crate::buffer::Buffer;
use crate::syntax::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A located match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub row: usize,
    /// Raw column of the match start
    pub raw_col: usize,
    /// Rendered column of the match start
    pub rendered_col: usize,
}

/// Highlight bytes displaced by the match overlay, kept for restoration
#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    hl: Vec<Highlight>,
}

/// State of one incremental search session
#[derive(Debug, Default)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: Option<Direction>,
    saved: Option<SavedHighlight>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put back the highlight bytes displaced by the previous match, if any
    pub fn restore_overlay(&mut self, buffer: &mut Buffer) {
        if let Some(saved) = self.saved.take() {
            if let Some(row) = buffer.row_mut(saved.row) {
                row.hl = saved.hl;
            }
        }
    }

    /// Forget the match position; the next scan starts from the top, forward
    pub fn reset(&mut self) {
        self.last_match = None;
        self.direction = None;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Scan for the next row whose rendered text contains `query`.
    ///
    /// Restores the previous overlay first, then walks rows one step from the
    /// last match in the current direction, wrapping circularly through the
    /// whole buffer. On a hit the matched span is overlaid with
    /// `Highlight::Match` and the displaced bytes are saved.
    pub fn search(&mut self, buffer: &mut Buffer, query: &[u8]) -> Option<Hit> {
        self.restore_overlay(buffer);

        let num_rows = buffer.num_rows();
        if num_rows == 0 || query.is_empty() {
            return None;
        }

        // Without a previous match only a forward scan makes sense
        let direction = match self.last_match {
            Some(_) => self.direction.unwrap_or(Direction::Forward),
            None => Direction::Forward,
        };
        let start = self.last_match.unwrap_or(num_rows - 1);

        for step in 1..=num_rows {
            let current = match direction {
                Direction::Forward => (start + step) % num_rows,
                Direction::Backward => (start + num_rows * step - step) % num_rows,
            };
            let row = buffer.row(current)?;
            let Some(rendered_col) = find(row.render(), query) else {
                continue;
            };
            let raw_col = row.rendered_to_raw_col(rendered_col);
            self.last_match = Some(current);

            let row = buffer.row_mut(current)?;
            self.saved = Some(SavedHighlight {
                row: current,
                hl: row.hl.clone(),
            });
            for h in &mut row.hl[rendered_col..rendered_col + query.len()] {
                *h = Highlight::Match;
            }

            return Some(Hit {
                row: current,
                raw_col,
                rendered_col,
            });
        }
        None
    }
}

/// First occurrence of `needle` in `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
