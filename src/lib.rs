//! # Chatrecap
//!
//! A Rust library that turns an exported chat transcript into a statistical
//! profile of the conversation.
//!
//! ## Overview
//!
//! Chatrecap is a two-stage pipeline:
//!
//! 1. The **parser** recovers an ordered sequence of [`Message`]s from the
//!    free-text export. It understands two header dialects (hyphenated and
//!    bracketed), folds wrapped lines into multi-line bodies and drops
//!    platform notices.
//! 2. The **analyzer** makes a single pass over those messages and produces an
//!    [`AnalysisResult`](analysis::AnalysisResult): leaderboard, vocabulary,
//!    emoji, reply latency, conversation starters, streaks, rapid-fire bursts,
//!    day/night split and a word index for search.
//!
//! Malformed lines never fail a parse; they degrade into continuation text.
//! Only a failure to obtain the transcript text is an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatrecap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! 1/1/24, 09:00 - Alice: gm
//! 1/1/24, 09:05 - Bob: gm back
//! [1/1/24, 9:07:30 PM] Alice: pizza tonight?
//! with extra cheese";
//!
//!     let messages = TranscriptParser::new().parse_str(text)?;
//!     assert_eq!(messages.len(), 3);
//!     assert_eq!(messages[2].content, "pizza tonight?\nwith extra cheese");
//!
//!     let result = analyze(&messages, None);
//!     assert_eq!(result.total_messages, 3);
//!     assert_eq!(result.users[0].name, "Alice");
//!
//!     let hits = result.search(&messages, "pizza");
//!     assert_eq!(hits.count_for("Alice"), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`parse`] and [`ParseOutcome`](parser::ParseOutcome)
//! - [`parsing`] - line normalization and header dialects
//! - [`analysis`] - [`analyze`], [`AnalysisResult`](analysis::AnalysisResult), search
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] / [`output`] - text, JSON and CSV reports
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`ChatrecapError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use analysis::analyze;
pub use error::{ChatrecapError, Result};
pub use message::Message;
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatrecap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatrecapError, Result};

    pub use crate::parser::{ParseOutcome, ParseStatus, TranscriptParser, parse};

    pub use crate::config::{AnalysisConfig, ParserConfig};

    pub use crate::analysis::{
        AnalysisResult, SearchResult, SearchSource, UserStats, analyze, analyze_with_config,
        search, year_options,
    };

    pub use crate::format::{ReportFormat, render, write_report};
}
