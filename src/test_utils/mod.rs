//! Test utilities
//! Shared testing helpers and mocks

use std::collections::VecDeque;

use crate::error::Result;
use crate::input::ByteSource;
use crate::term::{Size, TerminalBackend};

/// Byte source driven by a fixed script.
/// `None` entries simulate timed-out reads; an exhausted script keeps
/// returning timeouts.
pub struct ScriptedInput {
    reads: VecDeque<Option<u8>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(reads: Vec<Option<u8>>) -> Self {
        ScriptedInput {
            reads: reads.into(),
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().map(|&b| Some(b)).collect())
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.reads.extend(bytes.iter().map(|&b| Some(b)));
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.reads.is_empty()
    }
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.reads.pop_front().flatten())
    }
}

/// Mock terminal backend for testing
/// Records all writes and serves input from a script
pub struct MockTerminal {
    pub input: ScriptedInput,
    pub writes: Vec<Vec<u8>>,
    pub size: (u16, u16),
    pub init_calls: usize,
    pub deinit_calls: usize,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            input: ScriptedInput::new(Vec::new()),
            writes: Vec::new(),
            size: (rows, cols),
            init_calls: 0,
            deinit_calls: 0,
        }
    }

    /// Queue raw bytes to be served by `read_byte`
    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.feed(bytes);
    }

    /// Get all written bytes as a single vector
    #[must_use]
    pub fn written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    #[must_use]
    pub fn written_string(&self) -> String {
        String::from_utf8_lossy(&self.written_bytes()).to_string()
    }

    /// Clear all recorded writes (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl ByteSource for MockTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        self.input.read_byte()
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        self.init_calls += 1;
        Ok(())
    }

    fn deinit(&mut self) {
        self.deinit_calls += 1;
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }
}
