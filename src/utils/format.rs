//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Number of characters in a string (not bytes)
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to max length (in characters) with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if char_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

/// Left-align a string in a cell of `width` characters
pub fn pad_right(s: &str, width: usize) -> String {
    let len = char_width(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Onboarding Revamp", 20), "Onboarding Revamp");
        assert_eq!(truncate("Onboarding Revamp", 10), "Onboard...");
        assert_eq!(truncate("abcdef", 2), "ab");
        // multi-byte characters are counted, not sliced
        assert_eq!(truncate("▲▲▲▲▲", 4), "▲...");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcd", 2), "abcd");
        assert_eq!(pad_right("↕", 2), "↕ ");
    }
}
