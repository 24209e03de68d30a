//! Public analysis result types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::aggregator::WordIndex;

/// First and last message timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Timestamp of the first message.
    pub start: NaiveDateTime,
    /// Timestamp of the last message.
    pub end: NaiveDateTime,
}

/// An emoji and how often one user sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// A vocabulary word and how often one user used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Finalized statistics for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Sender name.
    pub name: String,
    /// Messages sent.
    pub message_count: usize,
    /// Whitespace-separated words across all messages.
    pub word_count: usize,
    /// Words per message, rounded.
    pub avg_length: usize,
    /// Most used emoji, most frequent first.
    pub emojis: Vec<EmojiCount>,
    /// Display color, assigned by leaderboard rank.
    pub color: String,
    /// Most used vocabulary words, most frequent first.
    pub top_words: Vec<WordCount>,
    /// Mean reply latency in minutes, 0 without replies.
    pub avg_reply_minutes: f64,
    /// Every recorded reply latency in minutes.
    pub reply_latencies: Vec<f64>,
    /// Messages with a morning greeting.
    pub morning_count: usize,
    /// Messages with a night greeting.
    pub night_count: usize,
    /// Messages with a farewell.
    pub bye_count: usize,
    /// Messages without emoji.
    pub text_message_count: usize,
    /// Messages with at least one emoji.
    pub emoji_message_count: usize,
}

/// A calendar day and its message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// One bucket of the hour-of-day histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyActivity {
    pub hour: u32,
    pub count: usize,
}

/// Per-day totals with a per-sender breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: usize,
    /// Sender -> messages that day, in first-seen order.
    pub by_sender: indexmap::IndexMap<String, usize>,
}

/// Highest message counts seen in any single window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RapidFireStats {
    pub max_in_minute: usize,
    pub max_in_hour: usize,
    pub max_in_day: usize,
}

/// Message counts by time of day: day is 06:00-17:59, night the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNightSplit {
    pub day: usize,
    pub night: usize,
}

/// Complete statistical profile of a transcript.
///
/// Produced by [`analyze`](crate::analysis::analyze). An analysis with no
/// messages yields [`AnalysisResult::empty`], not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Messages considered.
    pub total_messages: usize,
    /// First and last message, `None` when empty.
    pub date_range: Option<DateRange>,
    /// Leaderboard, most messages first.
    pub users: Vec<UserStats>,
    /// Number of distinct senders.
    pub active_users: usize,
    /// Longest run of consecutive active days.
    pub longest_streak: usize,
    /// Day with the most messages, `None` when empty.
    pub most_active_day: Option<DayCount>,
    /// Hour of day with the most messages.
    pub busiest_hour: u32,
    /// Sender who started the most conversations, empty when no messages.
    pub top_starter: String,
    /// Daily activity in first-seen order.
    pub timeline: Vec<DailyActivity>,
    /// 24 buckets, hour 0 first.
    pub hourly_heatmap: Vec<HourlyActivity>,
    /// Distinct years of the unfiltered input, newest first.
    pub year_options: Vec<i32>,
    /// Burst maxima.
    pub rapid_fire: RapidFireStats,
    /// Day versus night message counts.
    pub day_night_split: DayNightSplit,
    /// Word -> sender -> occurrences.
    pub word_occurrences: WordIndex,
}

impl AnalysisResult {
    /// Zero-valued result for an empty message set.
    pub fn empty(year_options: Vec<i32>) -> Self {
        Self {
            total_messages: 0,
            date_range: None,
            users: Vec::new(),
            active_users: 0,
            longest_streak: 0,
            most_active_day: None,
            busiest_hour: 0,
            top_starter: String::new(),
            timeline: Vec::new(),
            hourly_heatmap: empty_heatmap(),
            year_options,
            rapid_fire: RapidFireStats::default(),
            day_night_split: DayNightSplit::default(),
            word_occurrences: WordIndex::default(),
        }
    }

    /// Returns `true` if no messages were analyzed.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Looks up a participant by name.
    pub fn user(&self, name: &str) -> Option<&UserStats> {
        self.users.iter().find(|u| u.name == name)
    }
}

pub(crate) fn empty_heatmap() -> Vec<HourlyActivity> {
    (0..24).map(|hour| HourlyActivity { hour, count: 0 }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult::empty(vec![2024, 2023]);
        assert!(result.is_empty());
        assert_eq!(result.hourly_heatmap.len(), 24);
        assert!(result.hourly_heatmap.iter().all(|h| h.count == 0));
        assert_eq!(result.year_options, vec![2024, 2023]);
        assert_eq!(result.top_starter, "");
        assert!(result.most_active_day.is_none());
        assert!(result.user("Alice").is_none());
    }

    #[test]
    fn test_empty_result_serializes() {
        let json = serde_json::to_string(&AnalysisResult::empty(vec![])).unwrap();
        assert!(json.contains(r#""total_messages":0"#));
        assert!(json.contains(r#""date_range":null"#));
    }
}
