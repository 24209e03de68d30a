//! Synthetic transcript generator for stress testing chatrecap.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 big_chat.txt
//!
//! Output mixes both header dialects, multi-line bodies, system notices,
//! directional marks, emoji and greeting phrases.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🔥", "👍", "🎉", "🍕",
    "🌈", "🦄", "😴", "🙏",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "Sam: the Builder",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "pizza", "tonight", "movie", "train", "coffee", "weekend", "meeting", "birthday", "football",
    "exam", "holiday", "dinner", "music", "concert", "project", "deadline", "beach", "weather",
];

const GREETINGS: &[&str] = &[
    "gm", "good morning", "morning!", "gn", "good night", "nite", "bye", "cya", "see ya",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice created group \"Weekend\"",
    "Bob added Мария",
    "You changed this group's icon",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("synthetic_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    if let Err(e) = generate(count, output) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let mut clock = NaiveDate::from_ymd_opt(2023, 11, 20)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    for i in 0..count {
        clock = advance(clock, &mut rng);

        if i % 500 == 0 {
            let notice = SYSTEM_NOTICES.choose(&mut rng).copied().unwrap_or_default();
            let line = format!("{}{}\n", header(clock, i), notice);
            bytes_written += line.len();
            writer.write_all(line.as_bytes())?;
        }

        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
        let body = generate_body(&mut rng, i);
        let line = format!("{}{}: {}\n", header(clock, i), sender, body);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

/// Mostly short gaps, sometimes bursts, occasionally a silence long enough
/// to start a new conversation.
fn advance(clock: NaiveDateTime, rng: &mut impl Rng) -> NaiveDateTime {
    let step = match rng.gen_range(0..100) {
        0..=19 => Duration::seconds(rng.gen_range(0..20)),
        20..=94 => Duration::minutes(rng.gen_range(1..45)),
        _ => Duration::hours(rng.gen_range(7..40)),
    };
    clock + step
}

/// Alternates dialects: even messages hyphenated, odd bracketed with a
/// 12-hour clock.
fn header(ts: NaiveDateTime, index: usize) -> String {
    let date = ts.date();
    if index % 2 == 0 {
        format!("{}{} - ", date.format("%-d/%-m/%y, "), ts.format("%H:%M"))
    } else {
        let (pm, hour) = ts.hour12();
        let meridiem = if pm { "PM" } else { "AM" };
        let mark = if index % 7 == 1 { "\u{200E}" } else { "" };
        format!(
            "{}[{}, {}:{:02}:{:02} {}] ",
            mark,
            date.format("%-d/%-m/%Y"),
            hour,
            ts.minute(),
            ts.second(),
            meridiem
        )
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => {
            let n = rng.gen_range(2..10);
            (0..n)
                .map(|_| *WORDS.choose(rng).unwrap_or(&"word"))
                .collect::<Vec<_>>()
                .join(" ")
        }
        5 | 6 => GREETINGS.choose(rng).copied().unwrap_or("gm").to_string(),
        7 => {
            let emojis: String = (0..rng.gen_range(1..6))
                .map(|_| *EMOJIS.choose(rng).unwrap_or(&"🔥"))
                .collect();
            format!("{} {}", WORDS.choose(rng).unwrap_or(&"wow"), emojis)
        }
        8 => format!(
            "first line #{}\nsecond line about {}\nthird line",
            index,
            WORDS.choose(rng).unwrap_or(&"stuff")
        ),
        9 => "<Media omitted>".to_string(),
        10 => format!("Кириллица: Привет мир! #{}", index),
        _ => format!("see the {} at 10:30 - ok?", WORDS.choose(rng).unwrap_or(&"plan")),
    }
}
