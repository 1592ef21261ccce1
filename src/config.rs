//! Configuration types for the line parser and the statistics fold.
//!
//! These are plain builder-style structs with no CLI framework dependency,
//! so library users and the `chatstat` binary configure things the same way.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{ParserConfig, StatsConfig};
//!
//! let parser = ParserConfig::new().with_marker("video omitted");
//! let stats = StatsConfig::new().with_top_words(20);
//!
//! assert_eq!(parser.non_text_markers.len(), 3);
//! assert_eq!(stats.top_words, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Placeholders that stand in for attachments rather than text.
pub const DEFAULT_NON_TEXT_MARKERS: &[&str] = &["image omitted", "gif omitted"];

/// Number of entries kept in the word ranking.
pub const DEFAULT_TOP_WORDS: usize = 100;

/// Shortest normalized word (in characters) that enters the word ranking.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Configuration for the transcript line parser.
///
/// A line whose trimmed, lowercased content contains any of the
/// `non_text_markers` is rejected as an attachment placeholder.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_marker("Sticker Omitted");
/// assert!(config.is_non_text("sticker omitted"));
/// assert!(config.is_non_text("<image omitted>"));
/// assert!(!config.is_non_text("no attachments here"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Lowercased substrings marking attachment lines (default: image/gif omitted)
    pub non_text_markers: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            non_text_markers: DEFAULT_NON_TEXT_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a non-text marker. Stored lowercased.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.non_text_markers.push(marker.into().to_lowercase());
        self
    }

    /// Replaces the marker set.
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_text_markers = markers
            .into_iter()
            .map(|m| m.into().to_lowercase())
            .collect();
        self
    }

    /// Returns `true` if `content` contains any non-text marker.
    ///
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    pub fn is_non_text(&self, content: &str) -> bool {
        let lowered = content.trim().to_lowercase();
        self.non_text_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }
}

/// Configuration for the statistics fold.
///
/// # Example
///
/// ```rust
/// use chatstat::config::StatsConfig;
///
/// let config = StatsConfig::new()
///     .with_top_words(10)
///     .with_min_word_len(4);
/// assert_eq!(config.top_words, 10);
/// assert_eq!(config.min_word_len, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum entries in the word ranking (default: 100)
    pub top_words: usize,

    /// Minimum normalized word length in characters (default: 3)
    pub min_word_len: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the word ranking.
    #[must_use]
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Sets the minimum normalized word length.
    #[must_use]
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }
}
