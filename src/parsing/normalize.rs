//! Line normalization.
//!
//! Exports from some platforms sprinkle left-to-right and right-to-left marks
//! (U+200E, U+200F) around timestamps and names. They are invisible but break
//! header matching, so they are removed before classification.

use std::borrow::Cow;

const DIRECTIONAL_MARKS: [char; 2] = ['\u{200E}', '\u{200F}'];

/// Removes directional marks from a single line.
///
/// Borrows the input when there is nothing to strip.
///
/// # Example
///
/// ```rust
/// use chatrecap::parsing::normalize_line;
///
/// assert_eq!(normalize_line("\u{200E}1/1/24, 09:00 - Alice: hi"), "1/1/24, 09:00 - Alice: hi");
/// ```
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if line.contains(DIRECTIONAL_MARKS) {
        Cow::Owned(line.replace(DIRECTIONAL_MARKS, ""))
    } else {
        Cow::Borrowed(line)
    }
}

/// Splits raw transcript text into physical lines.
///
/// Accepts both `\n` and `\r\n` line endings. A trailing line ending does not
/// produce an extra empty line. When `strip_marks` is set, every line is passed
/// through [`normalize_line`].
pub fn physical_lines(text: &str, strip_marks: bool) -> impl Iterator<Item = Cow<'_, str>> {
    text.lines().map(move |line| {
        if strip_marks {
            normalize_line(line)
        } else {
            Cow::Borrowed(line)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_both_marks() {
        let line = "\u{200E}[1/1/24, 9:00 AM] \u{200F}Alice: hi";
        assert_eq!(normalize_line(line), "[1/1/24, 9:00 AM] Alice: hi");
    }

    #[test]
    fn test_normalize_borrows_clean_line() {
        assert!(matches!(normalize_line("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_physical_lines_crlf() {
        let lines: Vec<_> = physical_lines("a\r\nb\nc\r\n", true).collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_physical_lines_keeps_blank_lines() {
        let lines: Vec<_> = physical_lines("a\n\nb", true).collect();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_physical_lines_without_stripping() {
        let lines: Vec<_> = physical_lines("\u{200E}a", false).collect();
        assert_eq!(lines, vec!["\u{200E}a"]);
    }
}
