//! Transcript parser: turns raw export text into an ordered message list.
//!
//! Each physical line is normalized, classified by
//! [`classify_line`](crate::parsing::classify_line), and folded:
//!
//! - a header line starts a new [`Message`]
//! - a system line is dropped and does not touch the previous message
//! - any other line is appended to the previous message body with `\n`
//!
//! Format problems never fail a parse; they only produce fewer or merged
//! messages. The only errors are failures to obtain the text itself.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::parser::TranscriptParser;
//!
//! let text = "1/1/24, 09:00 - Alice: gm\n1/1/24, 09:05 - Bob: gm back\nsee you at 10";
//! let messages = TranscriptParser::new().parse_str(text)?;
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].content, "gm back\nsee you at 10");
//! # Ok::<(), chatrecap::ChatrecapError>(())
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatrecapError, Result};
use crate::parsing::{Header, LineKind, classify_line, physical_lines};

/// Parser for chat transcript exports.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        self.parse_bytes(bytes)
    }

    /// Reads a transcript from any reader and parses it.
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<Vec<Message>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.parse_bytes(bytes)
    }

    /// Parses transcript text held in memory.
    ///
    /// Empty text is reported as [`ChatrecapError::EmptySource`]; anything
    /// else succeeds, possibly with zero messages.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Message>> {
        if text.is_empty() {
            return Err(ChatrecapError::EmptySource);
        }
        Ok(self.reconstruct(text))
    }

    fn parse_bytes(&self, bytes: Vec<u8>) -> Result<Vec<Message>> {
        let text = String::from_utf8(bytes)?;
        self.parse_str(&text)
    }

    /// Folds classified lines into messages.
    fn reconstruct(&self, text: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut stats = ReconstructStats::default();

        for line in physical_lines(text, self.config.strip_directional_marks) {
            stats.lines += 1;

            match classify_line(&line) {
                LineKind::Header(header) => {
                    if self.is_service_message(&header) {
                        trace!(sender = header.sender, "dropping service message");
                        stats.service += 1;
                        continue;
                    }
                    messages.push(Message::new(header.timestamp, header.sender, header.body));
                }
                LineKind::System => {
                    trace!(line = %line, "dropping system line");
                    stats.system += 1;
                }
                LineKind::Continuation => match messages.last_mut() {
                    Some(last) => {
                        last.push_line(&line);
                        stats.folded += 1;
                    }
                    // Nothing to attach to yet
                    None => stats.orphaned += 1,
                },
            }
        }

        debug!(
            lines = stats.lines,
            messages = messages.len(),
            system = stats.system,
            service = stats.service,
            folded = stats.folded,
            orphaned = stats.orphaned,
            "transcript parsed"
        );

        messages
    }

    /// Header lines that are platform notices rather than user content.
    fn is_service_message(&self, header: &Header<'_>) -> bool {
        header.body.contains(self.config.encryption_notice.as_str())
            || header.sender == self.config.system_sender
    }
}

/// Line counters gathered while folding, reported through `tracing`.
#[derive(Debug, Default)]
struct ReconstructStats {
    lines: usize,
    system: usize,
    service: usize,
    folded: usize,
    orphaned: usize,
}

/// Outcome status of [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    /// Text was read; messages may still be empty.
    Success,
    /// Text could not be obtained.
    Error,
}

/// Record form of a parse: messages plus status and optional error reason.
///
/// Built from a parse [`Result`] for callers that want a single value to
/// hand across a boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Reconstructed messages in input order.
    pub messages: Vec<Message>,
    /// Whether the source could be read.
    pub status: ParseStatus,
    /// Human-readable reason when `status` is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<String>,
}

impl ParseOutcome {
    /// Returns `true` if the source was read.
    pub fn is_success(&self) -> bool {
        self.status == ParseStatus::Success
    }
}

impl From<Result<Vec<Message>>> for ParseOutcome {
    fn from(result: Result<Vec<Message>>) -> Self {
        match result {
            Ok(messages) => Self {
                messages,
                status: ParseStatus::Success,
                error: None,
            },
            Err(err) => Self {
                messages: Vec::new(),
                status: ParseStatus::Error,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Parses raw transcript text with the default configuration.
///
/// # Example
///
/// ```rust
/// use chatrecap::parser::{parse, ParseStatus};
///
/// assert_eq!(parse("").status, ParseStatus::Error);
/// assert_eq!(parse("1/1/24, 09:00 - Alice: gm").messages.len(), 1);
/// ```
pub fn parse(raw_text: &str) -> ParseOutcome {
    TranscriptParser::new().parse_str(raw_text).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn parse_ok(text: &str) -> Vec<Message> {
        TranscriptParser::new().parse_str(text).unwrap()
    }

    #[test]
    fn test_two_headers() {
        let messages = parse_ok("1/1/24, 09:00 - Alice: gm\n1/1/24, 09:05 - Bob: gm back");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::new(at(1, 9, 0), "Alice", "gm"));
        assert_eq!(messages[1], Message::new(at(1, 9, 5), "Bob", "gm back"));
    }

    #[test]
    fn test_continuation_folding() {
        let messages = parse_ok("1/1/24, 09:00 - Alice: line one\nline two\nline three");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "line one\nline two\nline three");
    }

    #[test]
    fn test_system_line_does_not_extend_previous() {
        let text = "1/1/24, 09:00 - Alice: hi\n1/1/24, 09:01 - Bob added Carol\nstill Alice";
        let messages = parse_ok(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi\nstill Alice");
    }

    #[test]
    fn test_encryption_notice_dropped() {
        let text = "[1/1/24, 9:00:00 AM] Alice: Messages and calls are end-to-end encrypted. Tap to learn more.\n[1/1/24, 9:01:00 AM] Bob: hi";
        let messages = parse_ok(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Bob");
    }

    #[test]
    fn test_system_sender_dropped() {
        let messages = parse_ok("1/1/24, 09:00 - WhatsApp: Your security code changed\n1/1/24, 09:01 - Bob: ok");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Bob");
    }

    #[test]
    fn test_custom_system_sender() {
        let parser = TranscriptParser::with_config(ParserConfig::new().with_system_sender("Bot"));
        let messages = parser
            .parse_str("1/1/24, 09:00 - Bot: hello\n1/1/24, 09:01 - WhatsApp: hey")
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "WhatsApp");
    }

    #[test]
    fn test_orphan_lines_discarded() {
        let messages = parse_ok("preamble\nmore preamble\n1/1/24, 09:00 - Alice: hi");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi");
    }

    #[test]
    fn test_directional_marks_removed() {
        let messages = parse_ok("\u{200E}[1/1/24, 9:00 AM] Alice: hi\n\u{200F}more");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi\nmore");
    }

    #[test]
    fn test_mixed_dialects() {
        let text = "1/1/24, 09:00 - Alice: one\n[1/1/24, 9:01:30 PM] Bob: two";
        let messages = parse_ok(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].timestamp, at(1, 21, 1));
    }

    #[test]
    fn test_out_of_range_header_starts_message() {
        let text = "1/1/24, 09:00 - Alice: hi\n31/2/24, 10:00 - Bob: real user message\n1/1/24, 24:30 - Carol: late";
        let messages = parse_ok(text);
        let senders: Vec<_> = messages.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(messages[0].content, "hi");
        assert_eq!(
            messages[1].timestamp,
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(messages[2].timestamp, at(2, 0, 30));
    }

    #[test]
    fn test_blank_line_inside_body() {
        let messages = parse_ok("1/1/24, 09:00 - Alice: para one\n\npara two\n");
        assert_eq!(messages[0].content, "para one\n\npara two");
    }

    #[test]
    fn test_empty_text_is_error() {
        let err = TranscriptParser::new().parse_str("").unwrap_err();
        assert!(err.is_empty_source());
    }

    #[test]
    fn test_unparseable_text_is_empty_success() {
        let messages = parse_ok("no headers here\nat all");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let err = TranscriptParser::new()
            .parse_reader(&[0xff, 0xfe, 0x00][..])
            .unwrap_err();
        assert!(err.is_source_read_failure());
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_outcome() {
        let outcome = parse("");
        assert_eq!(outcome.status, ParseStatus::Error);
        assert_eq!(outcome.error.as_deref(), Some("Transcript is empty"));
        assert!(outcome.messages.is_empty());

        let outcome = parse("1/1/24, 09:00 - Alice: hi");
        assert!(outcome.is_success());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_parse_outcome_serialization() {
        let json = serde_json::to_string(&parse("")).unwrap();
        assert!(json.contains(r#""status":"error""#));
        let json = serde_json::to_string(&parse("x")).unwrap();
        assert!(!json.contains("error"));
    }
}
