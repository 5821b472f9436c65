//! Global constants for the Inn editor

/// Editor version shown in the welcome banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod editing {
    /// A tab advances the rendered column to the next multiple of this width
    pub const TAB_STOP: usize = 8;

    /// Number of extra Ctrl-Q presses required to quit with unsaved changes
    pub const QUIT_TIMES: u32 = 3;

    /// Punctuation bytes that terminate keyword and number matches
    /// (whitespace and NUL are separators as well)
    pub const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";
}

pub mod ui {
    use std::time::Duration;

    /// Display text for buffers with no file path
    pub const NO_NAME: &str = "[No Name]";

    /// How long a status message stays visible in the message bar
    pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Rows reserved below the text area (status bar + message bar)
    pub const RESERVED_ROWS: u16 = 2;

    /// Initial key-binding hint shown in the message bar
    pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";
}

pub mod errors {
    // Error codes
    pub const OPEN_FAILED: &str = "OPEN_FAILED";
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const NO_PATH: &str = "NO_PATH";
    pub const RAW_MODE_FAILED: &str = "RAW_MODE_FAILED";
    pub const SIZE_QUERY_FAILED: &str = "SIZE_QUERY_FAILED";
    pub const READ_FAILED: &str = "READ_FAILED";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";

    // Messages
    pub const MSG_SAVE_ABORTED: &str = "Save aborted";
}
