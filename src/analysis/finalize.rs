//! Post-pass reduction of an [`Aggregator`] into an [`AnalysisResult`].
//!
//! All tie-breaks here are "first encountered wins": sorts are stable over
//! insertion-ordered maps and maxima are only replaced on a strict increase.

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::aggregator::{Aggregator, UserAggregate};
use super::result::{
    AnalysisResult, DailyActivity, DateRange, DayCount, DayNightSplit, EmojiCount,
    HourlyActivity, RapidFireStats, UserStats, WordCount,
};

/// Display colors, cycled by leaderboard rank.
pub const PALETTE: &[&str] = &[
    "#8b5cf6", "#ec4899", "#06b6d4", "#f59e0b", "#10b981", "#f43f5e", "#3b82f6", "#a855f7",
    "#eab308", "#14b8a6", "#6366f1", "#ef4444",
];

/// Largest gap in days between sorted active days that keeps a streak alive.
pub const STREAK_TOLERANCE_DAYS: f64 = 1.5;

/// Builds the public result from a finished pass.
pub(crate) fn finalize(agg: Aggregator, top_n: usize, year_options: Vec<i32>) -> AnalysisResult {
    let (Some(start), Some(end)) = (agg.first, agg.last) else {
        return AnalysisResult::empty(year_options);
    };

    let users = leaderboard(agg.users, top_n);
    let top_starter = top_starter(&agg.starters)
        .or_else(|| users.first().map(|u| u.name.clone()))
        .unwrap_or_default();

    let longest_streak = longest_streak(agg.days.keys().copied());
    let most_active_day = agg
        .busiest_day
        .map(|(date, count)| DayCount { date, count });

    let timeline = agg
        .days
        .into_iter()
        .map(|(date, tally)| DailyActivity {
            date,
            count: tally.total,
            by_sender: tally.by_sender,
        })
        .collect();

    let hourly_heatmap = agg
        .hourly
        .iter()
        .zip(0u32..)
        .map(|(&count, hour)| HourlyActivity { hour, count })
        .collect();

    AnalysisResult {
        total_messages: agg.total,
        date_range: Some(DateRange { start, end }),
        active_users: users.len(),
        users,
        longest_streak,
        most_active_day,
        busiest_hour: busiest_hour(&agg.hourly),
        top_starter,
        timeline,
        hourly_heatmap,
        year_options,
        rapid_fire: RapidFireStats {
            max_in_minute: agg.max_in_minute,
            max_in_hour: agg.max_in_hour,
            max_in_day: most_active_day.map_or(0, |d| d.count),
        },
        day_night_split: DayNightSplit {
            day: agg.day_messages,
            night: agg.night_messages,
        },
        word_occurrences: agg.word_index,
    }
}

/// Sorts users by message count (stable) and projects their stats.
fn leaderboard(users: IndexMap<String, UserAggregate>, top_n: usize) -> Vec<UserStats> {
    let mut ranked: Vec<(String, UserAggregate)> = users.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.message_count.cmp(&a.message_count));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (name, user))| project_user(name, user, rank, top_n))
        .collect()
}

fn project_user(name: String, user: UserAggregate, rank: usize, top_n: usize) -> UserStats {
    let avg_length = if user.message_count == 0 {
        0
    } else {
        (user.word_count as f64 / user.message_count as f64).round() as usize
    };

    let emojis = top_entries(&user.emojis, top_n)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect();
    let top_words = top_entries(&user.words, top_n)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();

    UserStats {
        name,
        message_count: user.message_count,
        word_count: user.word_count,
        avg_length,
        emojis,
        color: PALETTE[rank % PALETTE.len()].to_string(),
        top_words,
        avg_reply_minutes: mean(&user.reply_latencies),
        reply_latencies: user.reply_latencies,
        morning_count: user.morning_count,
        night_count: user.night_count,
        bye_count: user.bye_count,
        text_message_count: user.text_message_count,
        emoji_message_count: user.emoji_message_count,
    }
}

/// The `n` most frequent entries; equal counts keep insertion order.
pub fn top_entries(counts: &IndexMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|(_, a), (_, b)| b.cmp(a));
    entries
        .into_iter()
        .take(n)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Longest run of active days where each step is within
/// [`STREAK_TOLERANCE_DAYS`] of the previous one.
///
/// # Example
///
/// ```rust
/// use chatrecap::analysis::finalize::longest_streak;
/// use chrono::NaiveDate;
///
/// let days = [1, 2, 3, 6].map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap());
/// assert_eq!(longest_streak(days), 3);
/// ```
pub fn longest_streak(days: impl IntoIterator<Item = NaiveDate>) -> usize {
    let mut sorted: Vec<NaiveDate> = days.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in sorted {
        current = match previous {
            Some(prev) if (day - prev).num_days() as f64 <= STREAK_TOLERANCE_DAYS => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

/// Hour with the strictly highest count; earliest hour wins ties.
pub fn busiest_hour(hourly: &[usize; 24]) -> u32 {
    let mut best_hour = 0;
    let mut best_count = 0;
    for (hour, &count) in (0u32..).zip(hourly.iter()) {
        if count > best_count {
            best_hour = hour;
            best_count = count;
        }
    }
    best_hour
}

/// Sender with the strictly highest initiation tally; first wins ties.
pub fn top_starter(starters: &IndexMap<String, usize>) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for (name, &count) in starters {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.clone())
}
