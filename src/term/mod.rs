//! Terminal backend abstraction
//! Platform-agnostic interface for raw-mode terminal operations

//! ## term/ Invariants
//!
//! - Terminal handling is isolated behind a strict abstraction boundary.
//! - Raw mode is enabled before input processing begins.
//! - Terminal state is restored on normal exit and on panic.
//! - Byte reads return within a short bounded timeout; a timeout is not
//!   end-of-input.
//! - Terminal code never depends on editor internals.

use crate::error::Result;
use crate::input::ByteSource;

/// Terminal size information
#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend: ByteSource {
    /// Enter raw mode and prepare the screen
    fn init(&mut self) -> Result<()>;

    /// Restore the terminal to its original state
    fn deinit(&mut self);

    /// Write bytes to the terminal and flush
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Current terminal dimensions
    fn size(&self) -> Result<Size>;
}

#[cfg(unix)]
pub mod unix;
