//! Single-pass statistics aggregation.
//!
//! [`Aggregator`] is fed every message once, in order, and keeps all running
//! state needed by the finalizer: per-user accumulators, burst windows,
//! initiator tallies, the hour histogram and the global word index.
//!
//! Maps are [`IndexMap`]s so that "first encountered wins" tie-breaks fall out
//! of iteration order.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use indexmap::IndexMap;

use super::text::{Phrases, emojis, vocabulary_tokens, word_count};
use crate::Message;

/// Silence after which the next message counts as starting a conversation.
/// Also the upper bound for a gap to count as a reply.
pub const CONVERSATION_GAP_HOURS: i64 = 6;

/// Local hours `[DAY_START_HOUR, NIGHT_START_HOUR)` count as day.
pub const DAY_START_HOUR: u32 = 6;
/// See [`DAY_START_HOUR`].
pub const NIGHT_START_HOUR: u32 = 18;

/// Word -> sender -> occurrences.
pub type WordIndex = IndexMap<String, IndexMap<String, usize>>;

/// Running statistics for one sender.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAggregate {
    /// Messages sent.
    pub message_count: usize,
    /// Whitespace-separated words across all messages.
    pub word_count: usize,
    /// Emoji glyph -> occurrences, in first-seen order.
    pub emojis: IndexMap<String, usize>,
    /// Vocabulary token -> occurrences, in first-seen order.
    pub words: IndexMap<String, usize>,
    /// Reply latencies in minutes, only gaps under the conversation gap.
    pub reply_latencies: Vec<f64>,
    /// Messages containing a morning greeting.
    pub morning_count: usize,
    /// Messages containing a night greeting.
    pub night_count: usize,
    /// Messages containing a farewell.
    pub bye_count: usize,
    /// Messages without any emoji.
    pub text_message_count: usize,
    /// Messages with at least one emoji.
    pub emoji_message_count: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTally {
    /// All messages that day.
    pub total: usize,
    /// Sender -> messages that day, in first-seen order.
    pub by_sender: IndexMap<String, usize>,
}

/// Mutable state threaded through one analysis pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    pub(crate) total: usize,
    pub(crate) first: Option<NaiveDateTime>,
    pub(crate) last: Option<NaiveDateTime>,
    pub(crate) users: IndexMap<String, UserAggregate>,
    pub(crate) starters: IndexMap<String, usize>,
    pub(crate) word_index: WordIndex,
    pub(crate) hourly: [usize; 24],
    pub(crate) day_messages: usize,
    pub(crate) night_messages: usize,
    pub(crate) days: IndexMap<NaiveDate, DayTally>,
    pub(crate) per_minute: HashMap<NaiveDateTime, usize>,
    pub(crate) per_hour: HashMap<(NaiveDate, u32), usize>,
    pub(crate) max_in_minute: usize,
    pub(crate) max_in_hour: usize,
    pub(crate) busiest_day: Option<(NaiveDate, usize)>,
    /// Timestamp and user slot of the previous message.
    previous: Option<(NaiveDateTime, usize)>,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages observed so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Per-user accumulators in first-appearance order.
    pub fn users(&self) -> &IndexMap<String, UserAggregate> {
        &self.users
    }

    /// Initiation tallies in first-initiation order.
    pub fn starters(&self) -> &IndexMap<String, usize> {
        &self.starters
    }

    /// Global word index.
    pub fn word_index(&self) -> &WordIndex {
        &self.word_index
    }

    /// Folds one message into the running statistics.
    pub fn observe(&mut self, msg: &Message) {
        let ts = msg.timestamp;
        let slot = self.user_slot(&msg.sender);
        let gap = self.previous.map(|(prev_ts, prev_slot)| (ts - prev_ts, prev_slot));

        self.total += 1;
        self.first.get_or_insert(ts);
        self.last = Some(ts);

        self.observe_content(slot, msg);
        self.observe_turn(slot, &msg.sender, gap);
        self.observe_time(ts, &msg.sender);

        self.previous = Some((ts, slot));
    }

    /// Index of the sender's accumulator, created on first sight.
    fn user_slot(&mut self, sender: &str) -> usize {
        match self.users.get_index_of(sender) {
            Some(slot) => slot,
            None => self.users.insert_full(sender.to_string(), UserAggregate::default()).0,
        }
    }

    fn observe_content(&mut self, slot: usize, msg: &Message) {
        let user = &mut self.users[slot];

        user.message_count += 1;
        user.word_count += word_count(&msg.content);

        let mut has_emoji = false;
        for emoji in emojis(&msg.content) {
            has_emoji = true;
            *user.emojis.entry(emoji.to_string()).or_insert(0) += 1;
        }
        if has_emoji {
            user.emoji_message_count += 1;
        } else {
            user.text_message_count += 1;
        }

        for token in vocabulary_tokens(&msg.content) {
            *user.words.entry(token.clone()).or_insert(0) += 1;
            *self
                .word_index
                .entry(token)
                .or_default()
                .entry(msg.sender.clone())
                .or_insert(0) += 1;
        }

        let phrases = Phrases::detect(&msg.content);
        user.morning_count += usize::from(phrases.morning);
        user.night_count += usize::from(phrases.night);
        user.bye_count += usize::from(phrases.farewell);
    }

    /// Reply latency and conversation initiation.
    fn observe_turn(&mut self, slot: usize, sender: &str, gap: Option<(Duration, usize)>) {
        let threshold = Duration::hours(CONVERSATION_GAP_HOURS);

        if let Some((elapsed, prev_slot)) = gap {
            if prev_slot != slot && elapsed < threshold {
                let minutes = elapsed.num_seconds() as f64 / 60.0;
                self.users[slot].reply_latencies.push(minutes);
            }
        }

        let initiates = gap.is_none_or(|(elapsed, _)| elapsed > threshold);
        if initiates {
            *self.starters.entry(sender.to_string()).or_insert(0) += 1;
        }
    }

    /// Hour histogram, day/night split and burst windows.
    fn observe_time(&mut self, ts: NaiveDateTime, sender: &str) {
        let hour = ts.hour();
        self.hourly[hour as usize] += 1;
        if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
            self.day_messages += 1;
        } else {
            self.night_messages += 1;
        }

        let date = ts.date();
        let minute_key = date
            .and_hms_opt(hour, ts.minute(), 0)
            .unwrap_or(ts);

        let in_minute = self.per_minute.entry(minute_key).or_insert(0);
        *in_minute += 1;
        self.max_in_minute = self.max_in_minute.max(*in_minute);

        let in_hour = self.per_hour.entry((date, hour)).or_insert(0);
        *in_hour += 1;
        self.max_in_hour = self.max_in_hour.max(*in_hour);

        let day = self.days.entry(date).or_default();
        day.total += 1;
        *day.by_sender.entry(sender.to_string()).or_insert(0) += 1;
        if self.busiest_day.is_none_or(|(_, best)| day.total > best) {
            self.busiest_day = Some((date, day.total));
        }
    }
}
