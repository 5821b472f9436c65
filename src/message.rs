//! Timed status message for the message bar

use std::time::Instant;

use crate::constants::ui::MESSAGE_TIMEOUT;

/// A status message that stays visible for a fixed time after being set
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    time: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        StatusMessage {
            text: String::new(),
            time: Instant::now(),
        }
    }

    /// Replace the message and restart its display timer
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.time = Instant::now();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The message, if it is non-empty and its timer has not expired
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        if !self.text.is_empty() && self.time.elapsed() < MESSAGE_TIMEOUT {
            Some(&self.text)
        } else {
            None
        }
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_message_is_hidden() {
        let msg = StatusMessage::new();
        assert_eq!(msg.visible_text(), None);
    }

    #[test]
    fn test_set_message_is_visible() {
        let mut msg = StatusMessage::new();
        msg.set("HELP: Ctrl-Q = quit");
        assert_eq!(msg.visible_text(), Some("HELP: Ctrl-Q = quit"));
    }

    #[test]
    fn test_cleared_message_is_hidden() {
        let mut msg = StatusMessage::new();
        msg.set("something");
        msg.clear();
        assert_eq!(msg.visible_text(), None);
    }
}
