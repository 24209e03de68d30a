//! Word and phrase search over an analysis.
//!
//! Single indexed words are answered from
//! [`AnalysisResult::word_occurrences`]. Phrases, stop words and anything
//! else the index does not hold fall back to a case-insensitive substring
//! scan of the message bodies, counting matching messages per sender.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::result::AnalysisResult;
use crate::Message;

/// How a search was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    /// Looked up in the word index (token occurrences).
    Index,
    /// Scanned message bodies (matching messages).
    Scan,
}

/// A sender and their hit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: usize,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Normalized query (trimmed, lower-cased).
    pub query: String,
    /// Which path answered it.
    pub source: SearchSource,
    /// Hits per sender, highest first; ties keep first-seen order.
    pub counts: Vec<SenderCount>,
    /// Sum of all hits.
    pub total: usize,
}

impl SearchResult {
    /// Returns `true` if nobody matched.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Hits for one sender.
    pub fn count_for(&self, sender: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.sender == sender)
            .map_or(0, |c| c.count)
    }

    fn from_counts(query: String, source: SearchSource, counts: &IndexMap<String, usize>) -> Self {
        let mut counts: Vec<SenderCount> = counts
            .iter()
            .map(|(sender, &count)| SenderCount {
                sender: sender.clone(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        let total = counts.iter().map(|c| c.count).sum();

        Self {
            query,
            source,
            counts,
            total,
        }
    }
}

/// Searches for `query` in an analysis.
///
/// `messages` are only read on the scan path; pass the same messages the
/// analysis was built from (after any year filter) for consistent numbers.
///
/// # Example
///
/// ```rust
/// use chatrecap::analysis::{analyze, search::{search, SearchSource}};
/// use chatrecap::parser::TranscriptParser;
///
/// let messages = TranscriptParser::new()
///     .parse_str("1/1/24, 09:00 - Alice: pizza time\n1/1/24, 09:01 - Bob: pizza time!")?;
/// let result = analyze(&messages, None);
///
/// let hit = search(&result, &messages, "Pizza");
/// assert_eq!(hit.source, SearchSource::Index);
/// assert_eq!(hit.total, 2);
///
/// let phrase = search(&result, &messages, "pizza time");
/// assert_eq!(phrase.source, SearchSource::Scan);
/// assert_eq!(phrase.total, 2);
/// # Ok::<(), chatrecap::ChatrecapError>(())
/// ```
pub fn search(result: &AnalysisResult, messages: &[Message], query: &str) -> SearchResult {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return SearchResult::from_counts(needle, SearchSource::Scan, &IndexMap::new());
    }

    if !needle.contains(char::is_whitespace) {
        if let Some(entry) = result.word_occurrences.get(&needle) {
            return SearchResult::from_counts(needle, SearchSource::Index, entry);
        }
    }

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for msg in messages {
        if msg.content.to_lowercase().contains(&needle) {
            *counts.entry(msg.sender.clone()).or_insert(0) += 1;
        }
    }
    SearchResult::from_counts(needle, SearchSource::Scan, &counts)
}

impl AnalysisResult {
    /// Shorthand for [`search`].
    pub fn search(&self, messages: &[Message], query: &str) -> SearchResult {
        search(self, messages, query)
    }
}
