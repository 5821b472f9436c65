//! Unix terminal backend
//! crossterm handles screen control and raw mode; a termios tweak gives
//! byte reads a 100ms timeout so escape-sequence lookahead cannot block

use crossterm::{cursor, execute, terminal};
use std::io::{stdout, Write};

use crate::constants::errors;
use crate::error::{ErrorKind, InnError, Result};
use crate::input::ByteSource;
use crate::term::{Size, TerminalBackend};

/// Production terminal backend for Unix-like systems
pub struct UnixTerminal {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl UnixTerminal {
    #[must_use]
    pub fn new() -> Self {
        UnixTerminal {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        }
    }

    /// Re-configure the raw-mode tty so a one-byte read returns after at
    /// most 100ms with zero bytes instead of blocking (VMIN=0, VTIME=1)
    fn set_read_timeout(&self) -> Result<()> {
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == -1 {
                return Err(raw_mode_error());
            }
            termios.c_cc[libc::VMIN] = 0;
            termios.c_cc[libc::VTIME] = 1;
            if libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &termios) == -1 {
                return Err(raw_mode_error());
            }
        }
        Ok(())
    }
}

impl Default for UnixTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn raw_mode_error() -> InnError {
    InnError::critical(
        ErrorKind::Terminal,
        errors::RAW_MODE_FAILED,
        std::io::Error::last_os_error().to_string(),
    )
}

impl ByteSource for UnixTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = 0u8;
        let n = unsafe { libc::read(libc::STDIN_FILENO, std::ptr::from_mut(&mut byte).cast(), 1) };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => {
                let err = std::io::Error::last_os_error();
                match err.kind() {
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::Interrupted => Ok(None),
                    _ => Err(InnError::critical(
                        ErrorKind::Terminal,
                        errors::READ_FAILED,
                        err.to_string(),
                    )),
                }
            }
        }
    }
}

impl TerminalBackend for UnixTerminal {
    fn init(&mut self) -> Result<()> {
        execute!(stdout(), terminal::EnterAlternateScreen).map_err(|e| {
            InnError::critical(ErrorKind::Terminal, errors::RAW_MODE_FAILED, e.to_string())
        })?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| {
            InnError::critical(ErrorKind::Terminal, errors::RAW_MODE_FAILED, e.to_string())
        })?;
        self.raw_mode_enabled = true;

        self.set_read_timeout()
    }

    fn deinit(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout();
        out.write_all(bytes).map_err(|e| {
            InnError::new(ErrorKind::Terminal, errors::WRITE_FAILED, e.to_string())
        })?;
        out.flush()
            .map_err(|e| InnError::new(ErrorKind::Terminal, errors::WRITE_FAILED, e.to_string()))
    }

    fn size(&self) -> Result<Size> {
        let (cols, rows) = terminal::size().map_err(|e| {
            InnError::critical(ErrorKind::Terminal, errors::SIZE_QUERY_FAILED, e.to_string())
        })?;
        Ok(Size { rows, cols })
    }
}
