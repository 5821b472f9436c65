//! Editor session
//! Routes decoded key events to cursor movement, buffer mutations, and
//! prompt sessions, then redraws

pub mod prompt;

use std::path::{Path, PathBuf};

use crate::buffer::Buffer;
use crate::constants::editing::QUIT_TIMES;
use crate::constants::{errors, ui};
use crate::error::Result;
use crate::input;
use crate::key::Key;
use crate::message::StatusMessage;
use crate::render::{self, CursorPos};
use crate::row::Row;
use crate::term::TerminalBackend;
use crate::viewport::Viewport;

use self::prompt::{PromptSession, SavePrompt, SearchPrompt};

/// One editing session over a single buffer
pub struct Editor<T: TerminalBackend> {
    term: T,
    buffer: Buffer,
    viewport: Viewport,
    /// Cursor raw column
    cx: usize,
    /// Cursor row; may rest one row past the last row
    cy: usize,
    /// Cursor rendered column, derived from `cx` on each refresh
    rx: usize,
    message: StatusMessage,
    quit_times: u32,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Initialize the terminal and size the viewport, reserving the two
    /// bottom rows for the status and message bars
    pub fn new(mut term: T) -> Result<Self> {
        term.init()?;
        let size = match term.size() {
            Ok(size) => size,
            Err(e) => {
                term.deinit();
                return Err(e);
            }
        };
        let text_rows = size.rows.saturating_sub(ui::RESERVED_ROWS) as usize;
        Ok(Editor {
            term,
            buffer: Buffer::new(),
            viewport: Viewport::new(text_rows, size.cols as usize),
            cx: 0,
            cy: 0,
            rx: 0,
            message: StatusMessage::new(),
            quit_times: QUIT_TIMES,
            should_quit: false,
        })
    }

    /// Load a file into the session's buffer
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.buffer.open(path)
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Cursor position as (row, raw column)
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cy, self.cx)
    }

    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.should_quit
    }

    /// Main loop: draw, block for one key (with bounded per-byte timeout),
    /// route it, repeat
    pub fn run(&mut self) -> Result<()> {
        self.message.set(ui::HELP_MESSAGE);
        while !self.should_quit {
            self.refresh()?;
            let key = input::read_key(&mut self.term)?;
            self.process_keypress(key)?;
        }
        Ok(())
    }

    /// Recompute the rendered cursor column, scroll, and draw one frame
    fn refresh(&mut self) -> Result<()> {
        self.rx = self
            .buffer
            .row(self.cy)
            .map_or(0, |row| row.raw_to_rendered_col(self.cx));
        self.viewport.scroll(self.cy, self.rx);
        render::refresh(
            &mut self.term,
            &self.buffer,
            &self.viewport,
            CursorPos {
                row: self.cy,
                rendered_col: self.rx,
            },
            &self.message,
        )
    }

    /// Route one key event
    pub fn process_keypress(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Enter => self.insert_newline(),
            Key::Ctrl(b'Q') => {
                if self.buffer.is_dirty() && self.quit_times > 0 {
                    self.message.set(format!(
                        "no write since last change - press Ctrl-Q {} more times to force quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(());
                }
                self.should_quit = true;
            }
            Key::Ctrl(b'S') => self.save()?,
            Key::Ctrl(b'F') => self.find()?,
            Key::Home => self.cx = 0,
            Key::End => {
                if let Some(row) = self.buffer.row(self.cy) {
                    self.cx = row.len();
                }
            }
            Key::Backspace | Key::Ctrl(b'H') => self.delete_char(),
            Key::Delete => {
                self.move_cursor(Key::ArrowRight);
                self.delete_char();
            }
            Key::PageUp | Key::PageDown => self.move_page(key),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key);
            }
            Key::Tab => self.insert_char(b'\t'),
            Key::Char(c) => self.insert_char(c),
            // Ctrl-L (refresh) and bare Escape are deliberate no-ops
            Key::Ctrl(_) | Key::Escape => {}
        }
        // Anything but an unconfirmed quit re-arms the quit counter
        self.quit_times = QUIT_TIMES;
        Ok(())
    }

    fn insert_char(&mut self, c: u8) {
        self.buffer.insert_char(self.cy, self.cx, c);
        self.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cx == 0 {
            self.buffer.insert_row(self.cy, b"");
        } else {
            self.buffer.split_row(self.cy, self.cx);
        }
        self.cy += 1;
        self.cx = 0;
    }

    /// Delete the character before the cursor, joining onto the previous
    /// row at column 0. Before the buffer's first character this is a no-op.
    fn delete_char(&mut self) {
        if self.cy == self.buffer.num_rows() {
            return;
        }
        if self.cx == 0 && self.cy == 0 {
            return;
        }
        if self.cx > 0 {
            self.buffer.delete_char(self.cy, self.cx - 1);
            self.cx -= 1;
        } else if let Some(join_col) = self.buffer.join_row(self.cy) {
            self.cy -= 1;
            self.cx = join_col;
        }
    }

    fn move_cursor(&mut self, key: Key) {
        match key {
            Key::ArrowUp => {
                if self.cy != 0 {
                    self.cy -= 1;
                }
            }
            Key::ArrowDown => {
                if self.cy < self.buffer.num_rows() {
                    self.cy += 1;
                }
            }
            Key::ArrowLeft => {
                if self.cx != 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.buffer.row(self.cy).map_or(0, Row::len);
                }
            }
            Key::ArrowRight => {
                if let Some(row) = self.buffer.row(self.cy) {
                    if self.cx < row.len() {
                        self.cx += 1;
                    } else {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            _ => {}
        }

        // Snap the column to the new row's length
        let row_len = self.buffer.row(self.cy).map_or(0, Row::len);
        if self.cx > row_len {
            self.cx = row_len;
        }
    }

    fn move_page(&mut self, key: Key) {
        let page = self.viewport.rows();
        match key {
            Key::PageUp => self.cy = self.viewport.row_offset(),
            Key::PageDown => {
                self.cy = (self.viewport.row_offset() + page.saturating_sub(1))
                    .min(self.buffer.num_rows());
            }
            _ => return,
        }
        let step = if key == Key::PageUp {
            Key::ArrowUp
        } else {
            Key::ArrowDown
        };
        for _ in 0..page {
            self.move_cursor(step);
        }
    }

    /// Save the buffer, prompting for a file name when none is set.
    /// Failures report to the message bar and leave the buffer untouched.
    fn save(&mut self) -> Result<()> {
        if self.buffer.filename().is_none() {
            match self.prompt("Save as: {} (ESC to cancel)", &mut SavePrompt)? {
                Some(name) => self.buffer.set_filename(PathBuf::from(name)),
                None => {
                    self.message.set(errors::MSG_SAVE_ABORTED);
                    return Ok(());
                }
            }
        }
        match self.buffer.save() {
            Ok(bytes) => self.message.set(format!("{} bytes written to disk", bytes)),
            Err(e) => self.message.set(format!("save failed. I/O error: {}", e.message)),
        }
        Ok(())
    }

    /// Incremental search session. Canceling restores the cursor and both
    /// scroll offsets captured before the session began.
    fn find(&mut self) -> Result<()> {
        let saved_cx = self.cx;
        let saved_cy = self.cy;
        let saved_row_offset = self.viewport.row_offset();
        let saved_col_offset = self.viewport.col_offset();

        let mut session = SearchPrompt::new();
        let confirmed = self.prompt("Search: {} (Use ESC/Arrows/Enter)", &mut session)?;

        if confirmed.is_none() {
            self.cx = saved_cx;
            self.cy = saved_cy;
            self.viewport.set_row_offset(saved_row_offset);
            self.viewport.set_col_offset(saved_col_offset);
        }
        Ok(())
    }

    /// Run a prompt session until Enter confirms or Escape cancels.
    /// The session sees every key alongside the current input text.
    fn prompt(
        &mut self,
        template: &str,
        session: &mut impl PromptSession<T>,
    ) -> Result<Option<String>> {
        let mut text = String::new();
        loop {
            self.message.set(template.replacen("{}", &text, 1));
            self.refresh()?;
            let key = input::read_key(&mut self.term)?;
            match key {
                Key::Backspace | Key::Ctrl(b'H') | Key::Delete => {
                    text.pop();
                }
                Key::Escape => {
                    self.message.clear();
                    session.on_key(self, &text, key);
                    return Ok(None);
                }
                Key::Enter => {
                    if !text.is_empty() {
                        self.message.clear();
                        session.on_key(self, &text, key);
                        return Ok(Some(text));
                    }
                }
                Key::Char(c) if !c.is_ascii_control() => text.push(c as char),
                _ => {}
            }
            session.on_key(self, &text, key);
        }
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
