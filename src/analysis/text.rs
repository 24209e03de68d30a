//! Per-message text features: word counts, vocabulary tokens, emoji and
//! greeting phrases.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words never indexed for vocabulary or search.
///
/// Chat filler and media placeholders (`image omitted`, `sticker`) are
/// included alongside common English function words.
pub const STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us", "is", "are", "was", "were", "has", "had", "been", "ok", "okay", "lol", "haha",
    "yeah", "yes", "hey", "hi", "hello", "omg", "did", "done", "too", "very", "much", "really",
    "got", "don", "dont", "didnt", "cant", "cannot", "image", "omitted", "audio", "video", "gif",
    "sticker",
];

/// Tokens must be longer than this (in characters) to be indexed.
pub const MIN_TOKEN_CHARS: usize = 2;

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static EMOJI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Emoji_Presentation}").unwrap());

static MORNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(gm|good\s*morn|morning|mrng)\b").unwrap());

static NIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(gn|good\s*night|night|nite)\b").unwrap());

static FAREWELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(bye|byee|tata|cya|see\s*ya)\b").unwrap());

/// Returns `true` if `word` is in [`STOP_WORDS`].
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Raw word count: runs of non-whitespace.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Normalized vocabulary tokens of a message.
///
/// The body is lower-cased, stripped of non-word characters and split on
/// whitespace. Short tokens and stop words are skipped.
///
/// # Example
///
/// ```rust
/// use chatrecap::analysis::text::vocabulary_tokens;
///
/// let tokens = vocabulary_tokens("Pizza, the BEST pizza!! ok?");
/// assert_eq!(tokens, vec!["pizza", "best", "pizza"]);
/// ```
pub fn vocabulary_tokens(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Emoji-presentation characters in order of appearance.
pub fn emojis(content: &str) -> impl Iterator<Item = &str> {
    EMOJI.find_iter(content).map(|m| m.as_str())
}

/// Greeting and farewell phrases found in one message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phrases {
    /// "gm", "good morning", ...
    pub morning: bool,
    /// "gn", "good night", ...
    pub night: bool,
    /// "bye", "cya", "see ya", ...
    pub farewell: bool,
}

impl Phrases {
    /// Runs all three classifiers over `content`.
    pub fn detect(content: &str) -> Self {
        Self {
            morning: MORNING.is_match(content),
            night: NIGHT.is_match(content),
            farewell: FAREWELL.is_match(content),
        }
    }
}
