//! Report format selection.
//!
//! [`ReportFormat`] has no CLI dependency and picks one of the writers in
//! [`output`](crate::output).
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatrecap::Result<()> {
//! use chatrecap::analysis::AnalysisResult;
//! use chatrecap::format::{ReportFormat, render};
//!
//! let format = ReportFormat::from_path("recap.json")?;
//! assert_eq!(format, ReportFormat::Json);
//!
//! let json = render(&AnalysisResult::empty(vec![]), format)?;
//! assert!(json.contains("total_messages"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::error::{ChatrecapError, Result};

/// Output format for an analysis report.
///
/// - [`Text`](ReportFormat::Text) - human-readable summary
/// - [`Json`](ReportFormat::Json) - the complete result, for other tools
/// - [`Csv`](ReportFormat::Csv) - the per-user leaderboard only
///
/// # Example
///
/// ```rust
/// use chatrecap::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("csv").unwrap();
/// assert_eq!(format, ReportFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Plain text summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole [`AnalysisResult`]
    Json,

    /// Semicolon-delimited leaderboard
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatrecap::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("out/recap.TXT").unwrap(), ReportFormat::Text);
    /// assert!(ReportFormat::from_path("recap.xml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatrecapError::invalid_format(format!(
                "Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"
            ))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report to a string.
///
/// # Errors
///
/// Returns [`ChatrecapError::InvalidFormat`] if the format's feature is
/// disabled, or the writer's error.
pub fn render(result: &AnalysisResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => crate::output::to_text(result),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::output::to_json(result),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::output::to_csv(result),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Writes a report to a file.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_report(
    result: &AnalysisResult,
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => crate::output::write_text(result, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::output::write_json(result, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::output::write_csv(result, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: ReportFormat) -> ChatrecapError {
    let feature = match format {
        ReportFormat::Json => "json-output",
        ReportFormat::Csv => "csv-output",
        ReportFormat::Text => "default",
    };
    ChatrecapError::invalid_format(format!(
        "Report format {format} requires the '{feature}' feature to be enabled"
    ))
}
