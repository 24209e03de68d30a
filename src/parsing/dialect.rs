//! Header dialects and line classification.
//!
//! Chat exports start every message with a timestamped header. Two header
//! dialects are recognized:
//!
//! - Hyphenated (Android exports): `15/1/24, 22:30 - Sender: Message`
//! - Bracketed (iOS exports): `[15/1/24, 10:30:45 PM] Sender: Message`
//!
//! Dates are always day/month/year. Two-digit years are read as `2000 + yy`.
//! Timestamps have minute precision: bracketed seconds are accepted but
//! ignored. Out-of-range fields roll over into the next unit, so
//! `31/2/24, 24:30` lands on 2 March 2024, 00:30.
//!
//! A line that carries a header but no `Sender: Body` split is a system line
//! (group events, notices). Anything else is a continuation of the previous
//! message body.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Header dialect of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// 24-hour clock, hyphen before the sender.
    /// Example: `1/1/24, 09:00 - Alice: gm`
    Hyphenated,
    /// Bracketed timestamp, optional (ignored) seconds and meridiem.
    /// Example: `[1/1/24, 9:00:12 AM] Alice: gm`
    Bracketed,
}

// 1/1/24, 09:00 - Alice: gm
static HYPHENATED_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{2,4}),\s(?P<hour>\d{1,2}):(?P<minute>\d{2})\s-\s(?P<sender>.*?):\s(?P<body>.*)$",
    )
    .unwrap()
});

// 1/1/24, 09:00 - Alice created group "Friends"
static HYPHENATED_SYSTEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s.*$").unwrap()
});

// [1/1/24, 9:00:12 AM] Alice: gm
static BRACKETED_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{2,4}),\s(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::\d{2})?(?:[\s\x{202F}]?(?P<meridiem>[APap][Mm]))?\]\s(?P<sender>.*?):\s(?P<body>.*)$",
    )
    .unwrap()
});

// [1/1/24, 9:00:12 AM] Messages and calls are end-to-end encrypted.
static BRACKETED_SYSTEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?(?:[\s\x{202F}]?[APap][Mm])?\]\s.*$",
    )
    .unwrap()
});

impl Dialect {
    /// Returns all dialects in matching order.
    ///
    /// Hyphenated is tried first: its ` - ` separator can appear inside a
    /// bracketed header's sender in degenerate lines, never the other way.
    pub fn all() -> &'static [Dialect] {
        &[Dialect::Hyphenated, Dialect::Bracketed]
    }

    /// Regex matching a full `header Sender: Body` line.
    fn message_regex(self) -> &'static Regex {
        match self {
            Dialect::Hyphenated => &HYPHENATED_MESSAGE,
            Dialect::Bracketed => &BRACKETED_MESSAGE,
        }
    }

    /// Regex matching a header followed by arbitrary text.
    fn system_regex(self) -> &'static Regex {
        match self {
            Dialect::Hyphenated => &HYPHENATED_SYSTEM,
            Dialect::Bracketed => &BRACKETED_SYSTEM,
        }
    }

    /// Tries to extract a message header from `line` under this dialect.
    ///
    /// Returns `None` when the line does not have this dialect's
    /// `header Sender: Body` shape at all, and `Some(None)` when it does but
    /// the header is unusable (empty sender or body, unrepresentable date).
    fn match_header(self, line: &str) -> Option<Option<Header<'_>>> {
        self.message_regex()
            .captures(line)
            .map(|caps| Header::from_captures(self, &caps))
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Hyphenated => write!(f, "hyphenated"),
            Dialect::Bracketed => write!(f, "bracketed"),
        }
    }
}

/// A message header extracted from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Dialect the header was written in.
    pub dialect: Dialect,
    /// Local timestamp, meridiem already applied.
    pub timestamp: NaiveDateTime,
    /// Sender name, never empty.
    pub sender: &'a str,
    /// First line of the body, never empty.
    pub body: &'a str,
}

impl<'a> Header<'a> {
    fn from_captures(dialect: Dialect, caps: &Captures<'a>) -> Option<Self> {
        let sender = caps.name("sender")?.as_str();
        let body = caps.name("body")?.as_str();
        if sender.is_empty() || body.is_empty() {
            return None;
        }

        let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

        let day = number("day")?;
        let month = number("month")?;
        let year = expand_year(caps.name("year")?.as_str().parse().ok()?);
        let mut hour = number("hour")?;
        let minute = number("minute")?;

        if let Some(meridiem) = caps.name("meridiem") {
            hour = to_24_hour(hour, meridiem.as_str().eq_ignore_ascii_case("pm"));
        }

        let timestamp = rolled_timestamp(year, month, day, hour, minute)?;

        Some(Self {
            dialect,
            timestamp,
            sender,
            body,
        })
    }
}

/// Classification of one normalized physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new message.
    Header(Header<'a>),
    /// Platform event or unusable header; dropped.
    System,
    /// Part of the previous message's body.
    Continuation,
}

/// Classifies a normalized line.
///
/// Dialects are tried in [`Dialect::all`] order; the first dialect whose
/// message shape matches decides the outcome.
///
/// # Example
///
/// ```rust
/// use chatrecap::parsing::{classify_line, LineKind};
///
/// assert!(matches!(classify_line("1/1/24, 09:00 - Alice: gm"), LineKind::Header(_)));
/// assert_eq!(classify_line("1/1/24, 09:00 - Alice created group"), LineKind::System);
/// assert_eq!(classify_line("just more text"), LineKind::Continuation);
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    for dialect in Dialect::all() {
        if let Some(header) = dialect.match_header(line) {
            return header.map_or(LineKind::System, LineKind::Header);
        }
    }

    if Dialect::all()
        .iter()
        .any(|dialect| dialect.system_regex().is_match(line))
    {
        LineKind::System
    } else {
        LineKind::Continuation
    }
}

/// Builds a local timestamp, carrying overflowing fields forward.
///
/// Month 0 is December of the previous year, day 0 the last day of the
/// previous month, hour 24 midnight of the next day. Returns `None` only
/// when the result is outside chrono's range.
fn rolled_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<NaiveDateTime> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = Duration::days(i64::from(day) - 1)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute));
    start.checked_add_signed(offset)
}

/// Two-digit years are windowed into the 2000s.
fn expand_year(year: i32) -> i32 {
    if year < 100 { 2000 + year } else { year }
}

/// 12 PM stays 12, 12 AM becomes 0.
fn to_24_hour(hour: u32, pm: bool) -> u32 {
    match (pm, hour) {
        (true, h) if h < 12 => h + 12,
        (false, 12) => 0,
        (_, h) => h,
    }
}
