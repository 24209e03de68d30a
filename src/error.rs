//! Unified error types for chatrecap.
//!
//! The pipeline itself almost never fails: malformed transcript lines are
//! absorbed by the parser, and an empty year filter yields an empty
//! [`AnalysisResult`](crate::analysis::AnalysisResult). What remains are
//! failures to obtain the source text and failures of the report writers.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatrecap operations.
///
/// # Example
///
/// ```rust
/// use chatrecap::error::Result;
/// use chatrecap::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatrecapError>;

/// The error type for all chatrecap operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatrecapError {
    /// The transcript could not be read.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript source delivered no text at all.
    #[error("Transcript is empty")]
    EmptySource,

    /// The transcript bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A year argument could not be interpreted.
    #[error("Invalid year '{input}'. Expected a four-digit calendar year")]
    InvalidYear {
        /// The rejected input
        input: String,
    },

    /// A report format name or file extension was not recognized, or the
    /// format's feature is disabled.
    #[error("Invalid report format: {message}")]
    InvalidFormat {
        /// Human-readable explanation
        message: String,
    },

    /// JSON serialization error while writing a report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error while writing a report.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<std::string::FromUtf8Error> for ChatrecapError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatrecapError::Utf8 {
            context: "transcript source".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatrecapError {
    /// Creates an invalid year error.
    pub fn invalid_year(input: impl Into<String>) -> Self {
        ChatrecapError::InvalidYear {
            input: input.into(),
        }
    }

    /// Creates a UTF-8 error with a description of what was being decoded.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatrecapError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid report format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatrecapError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatrecapError::Io(_))
    }

    /// Returns `true` if the source delivered no text.
    pub fn is_empty_source(&self) -> bool {
        matches!(self, ChatrecapError::EmptySource)
    }

    /// Returns `true` if the transcript text could not be obtained.
    ///
    /// Covers IO failures, empty sources and undecodable bytes.
    pub fn is_source_read_failure(&self) -> bool {
        matches!(
            self,
            ChatrecapError::Io(_) | ChatrecapError::EmptySource | ChatrecapError::Utf8 { .. }
        )
    }

    /// Returns `true` if this is a year argument error.
    pub fn is_invalid_year(&self) -> bool {
        matches!(self, ChatrecapError::InvalidYear { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatrecapError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_empty_source_display() {
        assert_eq!(ChatrecapError::EmptySource.to_string(), "Transcript is empty");
    }

    #[test]
    fn test_invalid_year_display() {
        let err = ChatrecapError::invalid_year("twenty");
        let display = err.to_string();
        assert!(display.contains("twenty"));
        assert!(display.contains("calendar year"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatrecapError::invalid_format("Unknown file extension: '.xml'");
        assert!(err.to_string().contains(".xml"));
        assert!(!err.is_source_read_failure());
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatrecapError = utf8_err.into();
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("transcript source"));
    }

    #[test]
    fn test_utf8_error_with_context() {
        let utf8_err = String::from_utf8(vec![0xc3]).unwrap_err();
        let err = ChatrecapError::utf8("CSV report", utf8_err);
        assert!(err.to_string().contains("CSV report"));
        assert!(!err.to_string().contains("transcript"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatrecapError::from(io_err);
        assert!(err.source().is_some());
        assert!(ChatrecapError::EmptySource.source().is_none());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatrecapError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(io_err.is_source_read_failure());
        assert!(!io_err.is_invalid_year());

        let empty = ChatrecapError::EmptySource;
        assert!(empty.is_empty_source());
        assert!(empty.is_source_read_failure());
        assert!(!empty.is_io());

        let year = ChatrecapError::invalid_year("abc");
        assert!(year.is_invalid_year());
        assert!(!year.is_source_read_failure());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatrecapError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let csv_err = csv::Error::from(io::Error::other("test"));
        let err: ChatrecapError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatrecapError::invalid_year("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidYear"));
    }
}
