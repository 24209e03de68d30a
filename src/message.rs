//! The message type produced by the transcript parser.
//!
//! A [`Message`] is one logical chat message: a header line plus any
//! continuation lines folded into its body. Timestamps are local wall-clock
//! times exactly as written in the export; no timezone is attached.
//!
//! # Examples
//!
//! ```
//! use chatrecap::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "gm");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour(), 9);
//! assert_eq!(msg.year(), 2024);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single chat message recovered from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local send time, no timezone |
/// | `sender` | `String` | Display name from the header line |
/// | `content` | `String` | Body, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Local wall-clock time the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multiline messages.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the local timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    // =========================================================================
    // Calendar helpers
    // =========================================================================

    /// Calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Calendar year of the message.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Appends a continuation line to the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(2024, 1, 1, 9, 0), "Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.content(), "Hello");
        assert_eq!(msg.timestamp(), ts(2024, 1, 1, 9, 0));
    }

    #[test]
    fn test_calendar_helpers() {
        let msg = Message::new(ts(2023, 12, 31, 23, 59), "Bob", "late");
        assert_eq!(msg.year(), 2023);
        assert_eq!(msg.hour(), 23);
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_push_line() {
        let mut msg = Message::new(ts(2024, 1, 1, 9, 0), "Alice", "first");
        msg.push_line("second");
        msg.push_line("");
        assert_eq!(msg.content(), "first\nsecond\n");
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(2024, 6, 15, 12, 30), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""timestamp":"2024-06-15T12:30:00""#));
        assert!(json.contains(r#""sender":"Alice""#));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
