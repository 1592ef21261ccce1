//! Per-message text measures.
//!
//! These are the counting rules the aggregator applies to each message body.
//! Several of them are approximations:
//!
//! - character counts are UTF-16 code units, so characters outside the Basic
//!   Multilingual Plane count twice
//! - anything above U+1F000 counts as an emoji, and nothing below it does
//! - word normalization only keeps `a-z`, `ä`, `ö`, `ü` and `ß`

/// Code points strictly above this value count as emoji.
pub const EMOJI_THRESHOLD: u32 = 0x1F000;

/// The literal tallied by [`duck_count`].
pub const DUCK: &str = "duck";

/// Splits content into whitespace-separated tokens, skipping empty ones.
pub fn words(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace()
}

/// Number of whitespace-separated tokens.
pub fn word_count(content: &str) -> usize {
    words(content).count()
}

/// Length of `content` in UTF-16 code units.
///
/// ```rust
/// use chatstat::core::text::utf16_len;
///
/// assert_eq!(utf16_len("abc"), 3);
/// assert_eq!(utf16_len("ü"), 1);
/// assert_eq!(utf16_len("🦆"), 2);
/// ```
pub fn utf16_len(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Counts scalar values above [`EMOJI_THRESHOLD`].
///
/// ```rust
/// use chatstat::core::text::emoji_count;
///
/// assert_eq!(emoji_count("🦆🦆 quack"), 2);
/// assert_eq!(emoji_count("❤ ✓"), 0); // below the threshold
/// ```
pub fn emoji_count(content: &str) -> usize {
    content
        .chars()
        .filter(|&c| u32::from(c) > EMOJI_THRESHOLD)
        .count()
}

/// Returns `true` for characters kept by [`normalize_word`].
fn is_word_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'ä' | 'ö' | 'ü' | 'ß')
}

/// Lowercases a token and strips everything outside the word alphabet.
///
/// ```rust
/// use chatstat::core::text::normalize_word;
///
/// assert_eq!(normalize_word("Hello!"), "hello");
/// assert_eq!(normalize_word("GRÜSSE,"), "grüsse");
/// assert_eq!(normalize_word("Straße"), "straße");
/// assert_eq!(normalize_word("café"), "caf");
/// assert_eq!(normalize_word("123"), "");
/// ```
pub fn normalize_word(token: &str) -> String {
    token.to_lowercase().chars().filter(|&c| is_word_char(c)).collect()
}

/// Non-overlapping, case-sensitive occurrences of [`DUCK`].
///
/// ```rust
/// use chatstat::core::text::duck_count;
///
/// assert_eq!(duck_count("ducks love ducks"), 2);
/// assert_eq!(duck_count("Duck DUCK"), 0);
/// ```
pub fn duck_count(content: &str) -> usize {
    content.matches(DUCK).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_skips_runs_of_whitespace() {
        let tokens: Vec<&str> = words("  hello \t world\n  again ").collect();
        assert_eq!(tokens, ["hello", "world", "again"]);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_utf16_len_counts_surrogates() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("Hello world"), 11);
        assert_eq!(utf16_len("Grüße"), 5);
        // Astral plane characters take two code units each
        assert_eq!(utf16_len("a😀b"), 4);
        // ZWJ family: 4 emoji (2 units each) + 3 joiners
        assert_eq!(utf16_len("👨‍👩‍👧‍👦"), 11);
    }

    #[test]
    fn test_emoji_threshold_boundaries() {
        assert_eq!(emoji_count("\u{1F000}"), 0);
        assert_eq!(emoji_count("\u{1F001}"), 1);
        assert_eq!(emoji_count("☀⚡✨"), 0);
        assert_eq!(emoji_count("😀👍🏽"), 3); // skin tone modifier is above the threshold too
        assert_eq!(emoji_count("\u{20000}"), 1); // CJK extension B counts as well
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Über"), "über");
        assert_eq!(normalize_word("(ÄÖÜ)"), "äöü");
        assert_eq!(normalize_word("don't"), "dont");
        assert_eq!(normalize_word("привет"), "");
        assert_eq!(normalize_word("🦆"), "");
    }

    #[test]
    fn test_duck_count() {
        assert_eq!(duck_count("duckduck"), 2);
        assert_eq!(duck_count("ducduck"), 1);
        assert_eq!(duck_count("no birds here"), 0);
        assert_eq!(duck_count("rubberduck, duckling"), 2);
    }
}
