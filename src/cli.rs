//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Format`] - report format options, convertible to [`ReportFormat`]
//! - [`parse_year`] - validation for the `--year` argument
//!
//! # Example
//!
//! ```rust
//! use chatrecap::cli::{Args, Format};
//! use chatrecap::format::ReportFormat;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatrecap", "chat.txt", "--year", "2024", "-f", "json"]);
//! assert_eq!(args.year_filter().unwrap(), Some(2024));
//! assert_eq!(args.report_format().unwrap(), ReportFormat::Json);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{ChatrecapError, Result};
use crate::format::ReportFormat;

/// Environment variable read for the log filter when `--log-filter` is absent.
pub const LOG_FILTER_ENV: &str = "CHATRECAP_LOG";

/// Log filter used when neither `--log-filter` nor the environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "chatrecap=warn";

/// Turn an exported chat transcript into a recap: leaderboard, streaks,
/// reply times, rapid-fire bursts and a searchable word index.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatrecap")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatrecap chat.txt
    chatrecap chat.txt --year 2023
    chatrecap chat.txt -f json -o recap.json
    chatrecap chat.txt -o leaderboard.csv
    chatrecap chat.txt --search pizza --search \"good night\"")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Only analyze messages from this calendar year
    #[arg(short, long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Report format [default: from output extension, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Count who used a word or phrase (repeatable)
    #[arg(short, long = "search", value_name = "QUERY")]
    pub search: Vec<String>,

    /// Number of top words and emoji per user
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub top: usize,

    /// Sender name used by the platform for its own notices
    #[arg(long, value_name = "NAME")]
    pub system_sender: Option<String>,

    /// Tracing filter directive, e.g. `chatrecap=debug`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Validated `--year`, if given.
    pub fn year_filter(&self) -> Result<Option<i32>> {
        self.year.as_deref().map(parse_year).transpose()
    }

    /// Explicit `--format`, else the output file extension, else text.
    pub fn report_format(&self) -> Result<ReportFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => ReportFormat::from_path(path),
            (None, None) => Ok(ReportFormat::Text),
        }
    }
}

/// Parses a four-digit calendar year.
///
/// # Example
///
/// ```rust
/// use chatrecap::cli::parse_year;
///
/// assert_eq!(parse_year(" 2023 ").unwrap(), 2023);
/// assert!(parse_year("23").is_err());
/// ```
pub fn parse_year(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChatrecapError::invalid_year(input));
    }
    trimmed
        .parse()
        .map_err(|_| ChatrecapError::invalid_year(input))
}

/// Report formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Plain text summary
    #[value(alias = "txt")]
    Text,
    /// Full result as JSON
    Json,
    /// Per-user leaderboard as CSV
    Csv,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
            Format::Csv => ReportFormat::Csv,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}
