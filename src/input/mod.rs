//! Input decoding
//! Turns a raw terminal byte stream into logical key events

//! ## input/ Invariants
//!
//! - A zero-byte read means "no key available yet", never end-of-stream.
//! - Escape-sequence lookahead reads at most three more bytes.
//! - An incomplete or unknown sequence degrades to a plain Escape key.
//! - The decoder never blocks beyond the per-byte timeout of the source.

use crate::error::Result;
use crate::key::Key;

/// The escape byte that opens a multi-byte sequence
pub const ESC: u8 = 0x1b;

/// A byte-at-a-time input source with short-timeout reads.
///
/// `Ok(Some(byte))` yields the next byte; `Ok(None)` means nothing arrived
/// within the source's timeout and the caller decides whether to retry.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// Read the next logical key event, polling until a byte arrives.
pub fn read_key(src: &mut impl ByteSource) -> Result<Key> {
    let byte = loop {
        if let Some(b) = src.read_byte()? {
            break b;
        }
    };

    if byte == ESC {
        decode_escape(src)
    } else {
        Ok(plain_key(byte))
    }
}

/// Map a single non-escape byte to its key event
fn plain_key(byte: u8) -> Key {
    match byte {
        b'\r' => Key::Enter,
        b'\t' => Key::Tab,
        0x7f => Key::Backspace,
        0x01..=0x1a | 0x1c..=0x1f => Key::Ctrl(byte | 0x40),
        _ => Key::Char(byte),
    }
}

/// Decode the remainder of an escape sequence.
///
/// Mirrors the classic terminal encodings: `ESC [ <digit> ~` for
/// home/delete/end/page keys (with `1`/`7` and `4`/`8` aliasing home and
/// end), `ESC [ <letter>` for arrows and home/end, and the `ESC O H`/`ESC O F`
/// variants some terminals emit for home and end. A timeout at any point
/// leaves the sequence incomplete and yields a bare Escape.
fn decode_escape(src: &mut impl ByteSource) -> Result<Key> {
    let Some(first) = src.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(second) = src.read_byte()? else {
        return Ok(Key::Escape);
    };

    if first == b'O' {
        return Ok(match second {
            b'H' => Key::Home,
            b'F' => Key::End,
            _ => Key::Escape,
        });
    }
    if first != b'[' {
        return Ok(Key::Escape);
    }

    if second.is_ascii_digit() {
        let Some(third) = src.read_byte()? else {
            return Ok(Key::Escape);
        };
        if third != b'~' {
            return Ok(Key::Escape);
        }
        return Ok(match second {
            b'1' | b'7' => Key::Home,
            b'3' => Key::Delete,
            b'4' | b'8' => Key::End,
            b'5' => Key::PageUp,
            b'6' => Key::PageDown,
            _ => Key::Escape,
        });
    }

    Ok(match second {
        b'A' => Key::ArrowUp,
        b'B' => Key::ArrowDown,
        b'C' => Key::ArrowRight,
        b'D' => Key::ArrowLeft,
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => Key::Escape,
    })
}
