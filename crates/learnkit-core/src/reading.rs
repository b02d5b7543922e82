//! Reading-time and size estimates.
//!
//! Reading time assumes [`READING_WORDS_PER_MINUTE`] and rounds half to
//! even, so 500 words is 2 minutes and 700 words is 4. The result is never
//! below one minute.

/// Average reading speed used for [`estimated_minutes`].
pub const READING_WORDS_PER_MINUTE: usize = 200;

/// Approximate characters-per-token ratio used when no tokenizer is at hand.
pub const CHARS_PER_TOKEN: usize = 4;

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes: `max(1, round(words / 200))`.
pub fn estimated_minutes(text: &str) -> u32 {
    minutes_for_words(word_count(text))
}

/// Same as [`estimated_minutes`] for a precomputed word count.
pub fn minutes_for_words(words: usize) -> u32 {
    let quotient = words / READING_WORDS_PER_MINUTE;
    let remainder = words % READING_WORDS_PER_MINUTE;
    let half = READING_WORDS_PER_MINUTE / 2;

    let rounded = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    u32::try_from(rounded.max(1)).unwrap_or(u32::MAX)
}

/// Rough token count: characters divided by [`CHARS_PER_TOKEN`].
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one two\n\nthree\tfour"), 4);
    }

    #[test]
    fn test_minimum_is_one_minute() {
        assert_eq!(estimated_minutes(""), 1);
        assert_eq!(estimated_minutes("a few words"), 1);
        assert_eq!(minutes_for_words(100), 1);
    }

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(minutes_for_words(299), 1);
        assert_eq!(minutes_for_words(300), 2);
        assert_eq!(minutes_for_words(500), 2);
        assert_eq!(minutes_for_words(501), 3);
        assert_eq!(minutes_for_words(700), 4);
        assert_eq!(minutes_for_words(2000), 10);
    }

    #[test]
    fn test_estimated_minutes_from_text() {
        assert_eq!(estimated_minutes(&words(400)), 2);
        assert_eq!(estimated_minutes(&words(1000)), 5);
    }

    #[test]
    fn test_estimate_tokens_counts_chars() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
        // Multibyte characters count once each.
        assert_eq!(estimate_tokens("éééé"), 1);
    }
}
