//! Report writers for an [`AnalysisResult`](crate::analysis::AnalysisResult).
//!
//! - [`write_text`] / [`to_text`] - plain text summary, always available
//! - [`write_json`] / [`to_json`] - the full result as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-user leaderboard, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatrecap::Result<()> {
//! use chatrecap::analysis::analyze;
//! use chatrecap::output::{to_text, write_csv, write_json};
//! use chatrecap::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let result = analyze(&messages, None);
//!
//! write_json(&result, "recap.json")?;
//! write_csv(&result, "leaderboard.csv")?;
//! println!("{}", to_text(&result)?);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};

use crate::error::{ChatrecapError, Result};

/// Decodes a rendered report buffer, naming the report on failure.
pub(crate) fn report_string(buffer: Vec<u8>, report: &str) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| ChatrecapError::utf8(report, e))
}
