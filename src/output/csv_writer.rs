//! CSV leaderboard writer.

use std::io::Write;
use std::path::Path;

use crate::analysis::{AnalysisResult, UserStats};
use crate::error::Result;

const HEADER: &[&str] = &[
    "Rank",
    "Name",
    "Messages",
    "Words",
    "AvgLength",
    "AvgReplyMinutes",
    "Morning",
    "Night",
    "Bye",
    "TextMessages",
    "EmojiMessages",
    "TopWords",
    "TopEmojis",
    "Color",
];

/// Writes the per-user leaderboard as CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - One row per user, in leaderboard order, `Rank` starting at 1
/// - `TopWords` / `TopEmojis`: space-separated `item:count` pairs
/// - Encoding: UTF-8
pub fn write_csv(result: &AnalysisResult, output_path: impl AsRef<Path>) -> Result<()> {
    let writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)?;
    write_rows(result, writer)
}

/// Same as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(result: &AnalysisResult) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(&mut buffer);
        write_rows(result, writer)?;
    }
    super::report_string(buffer, "CSV report")
}

fn write_rows<W: Write>(result: &AnalysisResult, mut writer: csv::Writer<W>) -> Result<()> {
    writer.write_record(HEADER)?;
    for (rank, user) in result.users.iter().enumerate() {
        writer.write_record(&build_record(rank + 1, user))?;
    }
    writer.flush()?;
    Ok(())
}

fn build_record(rank: usize, user: &UserStats) -> Vec<String> {
    let top_words = user
        .top_words
        .iter()
        .map(|w| format!("{}:{}", w.word, w.count))
        .collect::<Vec<_>>()
        .join(" ");
    let top_emojis = user
        .emojis
        .iter()
        .map(|e| format!("{}:{}", e.emoji, e.count))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        rank.to_string(),
        user.name.clone(),
        user.message_count.to_string(),
        user.word_count.to_string(),
        user.avg_length.to_string(),
        format!("{:.1}", user.avg_reply_minutes),
        user.morning_count.to_string(),
        user.night_count.to_string(),
        user.bye_count.to_string(),
        user.text_message_count.to_string(),
        user.emoji_message_count.to_string(),
        top_words,
        top_emojis,
        user.color.clone(),
    ]
}
