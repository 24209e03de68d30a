//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - transcript parsing settings
//! - [`AnalysisConfig`] - analysis settings (year filter, leaderboard depth)
//!
//! # Example
//!
//! ```rust
//! use chatrecap::config::{AnalysisConfig, ParserConfig};
//! use chatrecap::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_config(ParserConfig::new().with_system_sender("WhatsApp"));
//! let analysis = AnalysisConfig::new().with_year(2024);
//! assert_eq!(analysis.year, Some(2024));
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatrecap::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_system_sender("Signal")
///     .with_strip_directional_marks(false);
/// assert_eq!(config.system_sender, "Signal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Sender name the platform uses for its own service messages (default: "WhatsApp")
    pub system_sender: String,

    /// Body phrase marking the encryption notice (default: "end-to-end encrypted")
    pub encryption_notice: String,

    /// Remove U+200E / U+200F before matching (default: true)
    pub strip_directional_marks: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            system_sender: "WhatsApp".to_string(),
            encryption_notice: "end-to-end encrypted".to_string(),
            strip_directional_marks: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform's own sender name.
    #[must_use]
    pub fn with_system_sender(mut self, sender: impl Into<String>) -> Self {
        self.system_sender = sender.into();
        self
    }

    /// Sets the encryption notice phrase.
    #[must_use]
    pub fn with_encryption_notice(mut self, phrase: impl Into<String>) -> Self {
        self.encryption_notice = phrase.into();
        self
    }

    /// Enables or disables directional mark stripping.
    #[must_use]
    pub fn with_strip_directional_marks(mut self, enabled: bool) -> Self {
        self.strip_directional_marks = enabled;
        self
    }
}

/// Configuration for analysis.
///
/// # Example
///
/// ```rust
/// use chatrecap::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_year(2023).with_top_n(5);
/// assert_eq!(config.top_n, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Only consider messages from this calendar year (default: all years)
    pub year: Option<i32>,

    /// Number of top emoji and top words kept per user (default: 3)
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            year: None,
            top_n: 3,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts analysis to one calendar year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets an optional year filter.
    #[must_use]
    pub fn with_year_filter(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Sets how many top emoji and words are kept per user.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }
}
