//! Statistics over a reconstructed message sequence.
//!
//! [`analyze`] runs one [`Aggregator`] pass over the messages and reduces it
//! with the finalizer into an [`AnalysisResult`]. An empty (or fully
//! filtered-out) input produces [`AnalysisResult::empty`], never an error.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::analysis::analyze;
//! use chatrecap::parser::TranscriptParser;
//!
//! let text = "1/1/24, 09:00 - Alice: gm\n1/1/24, 09:05 - Bob: gm back";
//! let messages = TranscriptParser::new().parse_str(text)?;
//!
//! let result = analyze(&messages, None);
//! assert_eq!(result.total_messages, 2);
//! assert_eq!(result.busiest_hour, 9);
//! assert_eq!(result.user("Bob").unwrap().reply_latencies, vec![5.0]);
//! # Ok::<(), chatrecap::ChatrecapError>(())
//! ```

pub mod aggregator;
pub mod finalize;
pub mod result;
pub mod search;
pub mod text;

use chrono::Datelike;
use tracing::debug;

pub use aggregator::{Aggregator, UserAggregate, WordIndex};
pub use result::{
    AnalysisResult, DailyActivity, DateRange, DayCount, DayNightSplit, EmojiCount,
    HourlyActivity, RapidFireStats, UserStats, WordCount,
};
pub use search::{SearchResult, SearchSource, SenderCount, search};

use crate::Message;
use crate::config::AnalysisConfig;

/// Analyzes `messages`, optionally narrowed to one calendar year.
///
/// [`AnalysisResult::year_options`] always lists the years of the full
/// input, so callers can offer per-year re-analysis.
pub fn analyze(messages: &[Message], year_filter: Option<i32>) -> AnalysisResult {
    analyze_with_config(
        messages,
        &AnalysisConfig::default().with_year_filter(year_filter),
    )
}

/// Same as [`analyze`], with the year filter and leaderboard depth taken
/// from `config`.
pub fn analyze_with_config(messages: &[Message], config: &AnalysisConfig) -> AnalysisResult {
    let years = year_options(messages);

    let mut agg = Aggregator::new();
    for msg in messages_in_year(messages, config.year) {
        agg.observe(msg);
    }

    debug!(
        input = messages.len(),
        analyzed = agg.total(),
        users = agg.users().len(),
        year = ?config.year,
        "analysis pass complete"
    );

    finalize::finalize(agg, config.top_n, years)
}

/// Distinct calendar years present in `messages`, newest first.
pub fn year_options(messages: &[Message]) -> Vec<i32> {
    let mut years: Vec<i32> = messages.iter().map(|m| m.timestamp.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

fn messages_in_year(messages: &[Message], year: Option<i32>) -> impl Iterator<Item = &Message> {
    messages
        .iter()
        .filter(move |m| year.is_none_or(|y| m.timestamp.year() == y))
}
