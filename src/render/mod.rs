//! Frame rendering
//! Assembles each refresh into one buffered write: visible rows with
//! per-character color, status bar, message bar, cursor placement

use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::buffer::Buffer;
use crate::color::Color;
use crate::constants::{ui, VERSION};
use crate::error::Result;
use crate::message::StatusMessage;
use crate::row::Row;
use crate::syntax::Highlight;
use crate::term::TerminalBackend;
use crate::viewport::Viewport;

/// Cursor position in buffer coordinates, rendered-column form
#[derive(Debug, Clone, Copy)]
pub struct CursorPos {
    pub row: usize,
    pub rendered_col: usize,
}

/// The visible slice of one row: rendered text plus a parallel style tag
/// for each character
#[must_use]
pub fn visible_row(row: &Row, col_offset: usize, width: usize) -> (&[u8], &[Highlight]) {
    let start = col_offset.min(row.render_len());
    let end = (col_offset + width).min(row.render_len());
    (&row.render()[start..end], &row.hl[start..end])
}

/// Draw one frame through the backend
pub fn refresh(
    term: &mut impl TerminalBackend,
    buffer: &Buffer,
    viewport: &Viewport,
    cursor: CursorPos,
    message: &StatusMessage,
) -> Result<()> {
    let mut frame: Vec<u8> = Vec::new();
    queue!(frame, cursor::Hide, cursor::MoveTo(0, 0))?;

    draw_rows(&mut frame, buffer, viewport)?;
    draw_status_bar(&mut frame, buffer, viewport, cursor)?;
    draw_message_bar(&mut frame, viewport, message)?;

    let screen_row = cursor.row.saturating_sub(viewport.row_offset()) as u16;
    let screen_col = cursor.rendered_col.saturating_sub(viewport.col_offset()) as u16;
    queue!(frame, cursor::MoveTo(screen_col, screen_row), cursor::Show)?;

    term.write(&frame)
}

fn draw_rows(frame: &mut Vec<u8>, buffer: &Buffer, viewport: &Viewport) -> Result<()> {
    for y in 0..viewport.rows() {
        let file_row = y + viewport.row_offset();
        match buffer.row(file_row) {
            Some(row) => draw_text_row(frame, row, viewport)?,
            None => {
                if buffer.num_rows() == 0 && y == viewport.rows() / 3 {
                    draw_welcome(frame, viewport.cols())?;
                } else {
                    queue!(frame, Print("~"))?;
                }
            }
        }
        queue!(frame, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }
    Ok(())
}

/// Draw the visible slice of a row, batching runs of equal color into one
/// escape sequence
fn draw_text_row(frame: &mut Vec<u8>, row: &Row, viewport: &Viewport) -> Result<()> {
    let (text, hl) = visible_row(row, viewport.col_offset(), viewport.cols());
    let mut i = 0;
    while i < text.len() {
        let color = hl[i].color();
        let mut j = i + 1;
        while j < text.len() && hl[j].color() == color {
            j += 1;
        }
        let run = String::from_utf8_lossy(&text[i..j]).into_owned();
        if color == Color::Reset {
            queue!(frame, ResetColor, Print(run))?;
        } else {
            queue!(frame, SetForegroundColor(color.to_crossterm()), Print(run))?;
        }
        i = j;
    }
    queue!(frame, ResetColor)?;
    Ok(())
}

fn draw_welcome(frame: &mut Vec<u8>, cols: usize) -> Result<()> {
    let mut welcome = format!("inn editor -- version {}", VERSION);
    welcome.truncate(cols);
    let padding = cols.saturating_sub(welcome.len()) / 2;
    if padding > 0 {
        queue!(frame, Print("~"))?;
        for _ in 1..padding {
            queue!(frame, Print(" "))?;
        }
    }
    queue!(frame, Print(welcome))?;
    Ok(())
}

fn draw_status_bar(
    frame: &mut Vec<u8>,
    buffer: &Buffer,
    viewport: &Viewport,
    cursor: CursorPos,
) -> Result<()> {
    let name = buffer
        .filename()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ui::NO_NAME.to_string());
    let modified = if buffer.is_dirty() { "(modified)" } else { "" };
    let mut left = format!("{:.20} - {} lines {}", name, buffer.num_rows(), modified);
    let right = format!("{}/{}", cursor.row + 1, buffer.num_rows());

    let cols = viewport.cols();
    left.truncate(cols);
    let gap = cols.saturating_sub(left.len());
    let line = if right.len() <= gap {
        format!("{}{}{}", left, " ".repeat(gap - right.len()), right)
    } else {
        format!("{}{}", left, " ".repeat(gap))
    };

    queue!(
        frame,
        SetAttribute(Attribute::Reverse),
        Print(line),
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )?;
    Ok(())
}

fn draw_message_bar(
    frame: &mut Vec<u8>,
    viewport: &Viewport,
    message: &StatusMessage,
) -> Result<()> {
    let mut text = message.visible_text().unwrap_or("").to_string();
    text.truncate(viewport.cols());
    queue!(
        frame,
        SetAttribute(Attribute::Reverse),
        Clear(ClearType::UntilNewLine),
        Print(text),
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}
