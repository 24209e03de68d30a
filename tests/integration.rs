//! Integration tests for the parse + analyze pipeline.
//!
//! Each test feeds a small transcript through the public API and checks the
//! resulting statistics end to end.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use chatrecap::analysis::{SearchSource, analyze, analyze_with_config};
use chatrecap::config::{AnalysisConfig, ParserConfig};
use chatrecap::parser::{ParseStatus, TranscriptParser, parse};
use chatrecap::Message;

fn parse_ok(text: &str) -> Vec<Message> {
    TranscriptParser::new()
        .parse_str(text)
        .expect("transcript should parse")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

const GROUP_CHAT: &str = "\
1/1/24, 09:00 - Alice: Messages and calls are end-to-end encrypted. Tap to learn more.
1/1/24, 09:00 - Alice created group \"Weekend\"
1/1/24, 09:00 - Alice: gm everyone 🌞
1/1/24, 09:02 - Bob: good morning! pizza tonight?
1/1/24, 09:02 - Carol: pizza pizza 🍕🍕
and a movie after
1/1/24, 09:30 - Alice: sounds great
[2/1/24, 11:15:00 PM] Bob: good night all, bye
[3/1/24, 8:00:00 AM] Carol: morning
[6/1/24, 8:00:00 AM] Alice: back from the trip
[6/1/24, 8:00:05 AM] Alice: pizza again?";

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn test_greeting_reply_scenario() {
    let messages = parse_ok("1/1/24, 09:00 - Alice: gm\n1/1/24, 09:05 - Bob: gm back");
    assert_eq!(messages.len(), 2);

    let result = analyze(&messages, None);
    let alice = result.user("Alice").unwrap();
    let bob = result.user("Bob").unwrap();

    assert_eq!(alice.morning_count, 1);
    assert_eq!(bob.morning_count, 1);
    assert_eq!(bob.reply_latencies, vec![5.0]);
    assert_eq!(result.busiest_hour, 9);
}

#[test]
fn test_empty_text_is_parse_error() {
    let outcome = parse("");
    assert_eq!(outcome.status, ParseStatus::Error);
    assert!(outcome.error.is_some());
    assert!(outcome.messages.is_empty());
}

#[test]
fn test_continuation_lines_join_with_newlines() {
    let messages = parse_ok("1/1/24, 09:00 - Alice: first\nsecond\nthird");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "first\nsecond\nthird");
}

#[test]
fn test_encryption_notice_is_not_counted() {
    let messages = parse_ok(GROUP_CHAT);
    assert!(
        messages
            .iter()
            .all(|m| !m.content.contains("end-to-end encrypted"))
    );

    let result = analyze(&messages, None);
    assert!(!result.word_occurrences.contains_key("encrypted"));
    assert!(!result.word_occurrences.contains_key("weekend"));
}

#[test]
fn test_streak_stops_at_gap() {
    let text = "\
1/1/24, 10:00 - Alice: one
2/1/24, 10:00 - Alice: two
3/1/24, 10:00 - Alice: three
6/1/24, 10:00 - Alice: six";
    let result = analyze(&parse_ok(text), None);
    assert_eq!(result.longest_streak, 3);
}

#[test]
fn test_filtered_year_without_messages() {
    let messages = parse_ok(GROUP_CHAT);
    let result = analyze(&messages, Some(2021));

    assert_eq!(result.total_messages, 0);
    assert!(result.users.is_empty());
    assert!(result.date_range.is_none());
    assert!(result.most_active_day.is_none());
    assert_eq!(result.hourly_heatmap.len(), 24);
    assert!(result.hourly_heatmap.iter().all(|h| h.count == 0));
    assert_eq!(result.year_options, vec![2024]);
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_group_chat_overview() {
    let messages = parse_ok(GROUP_CHAT);
    assert_eq!(messages.len(), 8);

    let result = analyze(&messages, None);
    assert_eq!(result.total_messages, 8);
    assert_eq!(result.active_users, 3);

    let range = result.date_range.unwrap();
    assert_eq!(range.start, at(2024, 1, 1, 9, 0));
    // 8:00:05 AM truncates to the minute
    assert_eq!(range.end, at(2024, 1, 6, 8, 0));

    let names: Vec<_> = result.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(result.users[0].message_count, 4);

    let day = result.most_active_day.unwrap();
    assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(day.count, 4);
    assert_eq!(result.rapid_fire.max_in_day, 4);
    assert_eq!(result.rapid_fire.max_in_minute, 2);
    assert_eq!(result.rapid_fire.max_in_hour, 4);

    assert_eq!(result.longest_streak, 3);
    assert_eq!(result.busiest_hour, 9);
    assert_eq!(result.day_night_split.day, 7);
    assert_eq!(result.day_night_split.night, 1);
}

#[test]
fn test_group_chat_initiators() {
    let result = analyze(&parse_ok(GROUP_CHAT), None);
    // Alice opens day 1 and day 6; Bob and Carol each open one day
    assert_eq!(result.top_starter, "Alice");
}

#[test]
fn test_group_chat_phrases_and_emoji() {
    let result = analyze(&parse_ok(GROUP_CHAT), None);

    let bob = result.user("Bob").unwrap();
    assert_eq!(bob.morning_count, 1);
    assert_eq!(bob.night_count, 1);
    assert_eq!(bob.bye_count, 1);

    let carol = result.user("Carol").unwrap();
    assert_eq!(carol.emojis[0].emoji, "🍕");
    assert_eq!(carol.emojis[0].count, 2);
    assert_eq!(carol.emoji_message_count, 1);
    assert_eq!(carol.text_message_count, 1);
    assert_eq!(carol.morning_count, 1);
}

#[test]
fn test_group_chat_reply_latency() {
    let result = analyze(&parse_ok(GROUP_CHAT), None);

    assert_eq!(result.user("Bob").unwrap().reply_latencies, vec![2.0]);
    // Carol replies to Bob within the same minute
    assert_eq!(result.user("Carol").unwrap().reply_latencies, vec![0.0]);
    assert_eq!(result.user("Alice").unwrap().reply_latencies, vec![28.0]);
}

#[test]
fn test_colors_follow_rank() {
    let result = analyze(&parse_ok(GROUP_CHAT), None);
    let colors: Vec<_> = result.users.iter().map(|u| u.color.as_str()).collect();
    assert_eq!(colors, vec!["#8b5cf6", "#ec4899", "#06b6d4"]);
}

#[test]
fn test_timeline() {
    let result = analyze(&parse_ok(GROUP_CHAT), None);
    let days: Vec<_> = result.timeline.iter().map(|d| (d.date.day0() + 1, d.count)).collect();
    assert_eq!(days, vec![(1, 4), (2, 1), (3, 1), (6, 2)]);

    let first = &result.timeline[0];
    let senders: Vec<_> = first.by_sender.keys().map(String::as_str).collect();
    assert_eq!(senders, vec!["Alice", "Bob", "Carol"]);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_index_and_scan() {
    let messages = parse_ok(GROUP_CHAT);
    let result = analyze(&messages, None);

    let pizza = result.search(&messages, "PIZZA");
    assert_eq!(pizza.source, SearchSource::Index);
    assert_eq!(pizza.count_for("Carol"), 2);
    assert_eq!(pizza.count_for("Bob"), 1);
    assert_eq!(pizza.count_for("Alice"), 1);
    assert_eq!(pizza.counts[0].sender, "Carol");

    let phrase = result.search(&messages, "good night");
    assert_eq!(phrase.source, SearchSource::Scan);
    assert_eq!(phrase.total, 1);

    let multiline = result.search(&messages, "a movie");
    assert_eq!(multiline.count_for("Carol"), 1);
}

#[test]
fn test_search_respects_year_filter() {
    let text = "31/12/23, 23:00 - Alice: pizza\n1/1/24, 10:00 - Bob: pizza";
    let messages = parse_ok(text);
    let result = analyze(&messages, Some(2024));

    let hit = result.search(&messages, "pizza");
    assert_eq!(hit.source, SearchSource::Index);
    assert_eq!(hit.count_for("Alice"), 0);
    assert_eq!(hit.count_for("Bob"), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_year_options_from_unfiltered_input() {
    let text = "\
31/12/22, 23:00 - Alice: old
1/6/23, 10:00 - Bob: middle
1/1/24, 10:00 - Alice: new";
    let messages = parse_ok(text);

    let result = analyze(&messages, Some(2023));
    assert_eq!(result.total_messages, 1);
    assert_eq!(result.year_options, vec![2024, 2023, 2022]);
}

#[test]
fn test_analysis_config_top_n() {
    let messages = parse_ok("1/1/24, 10:00 - Alice: apple banana cherry durian 🍎🍌🍒🥝");
    let config = AnalysisConfig::new().with_top_n(2);
    let result = analyze_with_config(&messages, &config);

    let alice = result.user("Alice").unwrap();
    assert_eq!(alice.top_words.len(), 2);
    assert_eq!(alice.emojis.len(), 2);
}

#[test]
fn test_parser_config_keeps_marks_when_disabled() {
    let parser =
        TranscriptParser::with_config(ParserConfig::new().with_strip_directional_marks(false));
    let messages = parser
        .parse_str("1/1/24, 10:00 - Alice: hi\n\u{200E}tail")
        .unwrap();
    assert_eq!(messages[0].content, "hi\n\u{200E}tail");
}

#[test]
fn test_parse_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    std::fs::write(&path, GROUP_CHAT).unwrap();

    let from_file = TranscriptParser::new().parse(&path).unwrap();
    assert_eq!(from_file, parse_ok(GROUP_CHAT));
}

#[test]
fn test_crlf_input() {
    let text = GROUP_CHAT.replace('\n', "\r\n");
    let messages = parse_ok(&text);
    assert_eq!(messages.len(), 8);
    assert!(messages.iter().all(|m| !m.content.contains('\r')));
}
