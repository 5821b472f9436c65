//! Prompt sessions
//! Each prompt kind implements one interface: it receives every key pressed
//! while the prompt is active and may update editor state incrementally

use crate::editor::Editor;
use crate::key::Key;
use crate::search::{Direction, SearchState};
use crate::term::TerminalBackend;

/// One kind of interactive prompt (save-as, incremental search, ...)
pub trait PromptSession<T: TerminalBackend> {
    /// Called after every keypress with the current input text
    fn on_key(&mut self, editor: &mut Editor<T>, query: &str, key: Key);
}

/// Plain text entry with no incremental behavior (save-as)
pub struct SavePrompt;

impl<T: TerminalBackend> PromptSession<T> for SavePrompt {
    fn on_key(&mut self, _editor: &mut Editor<T>, _query: &str, _key: Key) {}
}

/// Incremental search: every edit re-scans, arrow keys step between matches
#[derive(Default)]
pub struct SearchPrompt {
    state: SearchState,
}

impl SearchPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: TerminalBackend> PromptSession<T> for SearchPrompt {
    fn on_key(&mut self, editor: &mut Editor<T>, query: &str, key: Key) {
        match key {
            Key::Enter | Key::Escape => {
                // Leaving the session puts the displaced highlight back
                self.state.restore_overlay(&mut editor.buffer);
                self.state.reset();
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.state.set_direction(Direction::Forward),
            Key::ArrowLeft | Key::ArrowUp => self.state.set_direction(Direction::Backward),
            // Any query edit scans afresh from the top, forward
            _ => self.state.reset(),
        }

        if let Some(hit) = self.state.search(&mut editor.buffer, query.as_bytes()) {
            editor.cy = hit.row;
            editor.cx = hit.raw_col;
            // Past-the-end offset: the next scroll snaps the match row to
            // the top of the window
            editor.viewport.set_row_offset(editor.buffer.num_rows());
        }
    }
}
