//! Plain text summary writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::{AnalysisResult, UserStats};
use crate::error::Result;

const DATE_TIME: &str = "%Y-%m-%d %H:%M";

/// Writes a human-readable summary to a file.
pub fn write_text(result: &AnalysisResult, output_path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    render(result, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_text`], but returns a String instead of writing to file.
pub fn to_text(result: &AnalysisResult) -> Result<String> {
    let mut buffer = Vec::new();
    render(result, &mut buffer)?;
    super::report_string(buffer, "text report")
}

fn render<W: Write>(result: &AnalysisResult, out: &mut W) -> std::io::Result<()> {
    let Some(range) = result.date_range else {
        return writeln!(out, "No messages to analyze.");
    };

    writeln!(
        out,
        "Chat recap: {} to {}",
        range.start.format(DATE_TIME),
        range.end.format(DATE_TIME)
    )?;
    writeln!(
        out,
        "Messages: {} from {} users",
        result.total_messages, result.active_users
    )?;
    writeln!(out, "Longest streak: {} days", result.longest_streak)?;
    if let Some(day) = result.most_active_day {
        writeln!(out, "Most active day: {} ({} messages)", day.date, day.count)?;
    }
    writeln!(out, "Busiest hour: {:02}:00", result.busiest_hour)?;
    writeln!(out, "Top starter: {}", result.top_starter)?;
    writeln!(
        out,
        "Rapid fire: {}/minute, {}/hour, {}/day",
        result.rapid_fire.max_in_minute, result.rapid_fire.max_in_hour, result.rapid_fire.max_in_day
    )?;
    writeln!(
        out,
        "Day vs night: {} / {}",
        result.day_night_split.day, result.day_night_split.night
    )?;

    writeln!(out)?;
    writeln!(out, "Leaderboard")?;
    for (rank, user) in result.users.iter().enumerate() {
        render_user(rank + 1, user, out)?;
    }
    Ok(())
}

fn render_user<W: Write>(rank: usize, user: &UserStats, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "{rank:>3}. {} - {} messages, {} words (avg {}), replies in {:.1} min",
        user.name, user.message_count, user.word_count, user.avg_length, user.avg_reply_minutes
    )?;

    if !user.top_words.is_empty() {
        let words: Vec<String> = user
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        writeln!(out, "     words: {}", words.join(", "))?;
    }
    if !user.emojis.is_empty() {
        let emojis: Vec<String> = user
            .emojis
            .iter()
            .map(|e| format!("{} ({})", e.emoji, e.count))
            .collect();
        writeln!(out, "     emoji: {}", emojis.join(", "))?;
    }
    writeln!(
        out,
        "     gm {} / gn {} / bye {}",
        user.morning_count, user.night_count, user.bye_count
    )
}
