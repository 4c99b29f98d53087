//! Reading time estimation

use serde::Serialize;

/// Default reading speed
pub const WORDS_PER_MINUTE: u32 = 200;

/// Result of a reading-time estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadingTime {
    /// Number of words counted
    pub words: usize,
    /// Fractional minutes needed to read the text
    pub minutes: f64,
    /// Same estimate in milliseconds
    pub time_ms: u64,
}

impl ReadingTime {
    /// Whole minutes shown to readers, always rounded up
    pub fn display_minutes(&self) -> u64 {
        ceil_minutes(self.minutes)
    }
}

/// Round a fractional estimate up to the next whole minute
pub fn ceil_minutes(minutes: f64) -> u64 {
    if minutes.is_finite() && minutes > 0.0 {
        minutes.ceil() as u64
    } else {
        0
    }
}

/// Estimate reading time at the default speed
pub fn estimate(text: &str) -> ReadingTime {
    estimate_with(text, WORDS_PER_MINUTE)
}

/// Estimate reading time at `words_per_minute`
pub fn estimate_with(text: &str, words_per_minute: u32) -> ReadingTime {
    let words = count_words(text);
    let wpm = f64::from(words_per_minute.max(1));
    let minutes = words as f64 / wpm;

    ReadingTime {
        words,
        minutes,
        time_ms: (minutes * 60_000.0).round() as u64,
    }
}

/// Count words: whitespace-separated runs that contain a letter or digit,
/// plus one word per CJK character.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if c.is_alphanumeric() && !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'     // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}'   // Hangul Syllables
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // CJK Extension B
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("Hello, world!"), 2);
        assert_eq!(count_words("  spaced\tout\nwords  "), 3);
        assert_eq!(count_words("don't stop-me"), 2);
        assert_eq!(count_words("-- = --"), 0);
    }

    #[test]
    fn test_count_cjk_characters() {
        assert_eq!(count_words("你好世界"), 4);
        assert_eq!(count_words("Rust 很好"), 3);
    }

    #[test]
    fn test_estimate_minutes() {
        let rt = estimate(&words(820));
        assert_eq!(rt.words, 820);
        assert!((rt.minutes - 4.1).abs() < 1e-9);
        assert_eq!(rt.time_ms, 246_000);
    }

    #[test]
    fn test_display_rounds_up() {
        assert_eq!(ceil_minutes(4.1), 5);
        assert_eq!(ceil_minutes(4.0), 4);
        assert_eq!(ceil_minutes(0.01), 1);
        assert_eq!(ceil_minutes(0.0), 0);
        assert_eq!(estimate(&words(820)).display_minutes(), 5);
    }

    #[test]
    fn test_custom_speed() {
        let rt = estimate_with(&words(300), 100);
        assert_eq!(rt.display_minutes(), 3);
    }
}
