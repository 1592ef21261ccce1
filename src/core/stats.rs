//! Statistics fold over parsed messages.
//!
//! [`StatsAccumulator`] is the running state of a single left-to-right pass.
//! It owns every intermediate counter, including the full word-frequency map
//! that is reduced to the top entries only when [`StatsAccumulator::finish`]
//! produces the immutable [`ChatStats`] snapshot.
//!
//! Accumulators over disjoint runs of messages can be combined with
//! [`StatsAccumulator::merge`]. Merging the accumulators of `A` and `B` and
//! then finishing gives the same snapshot as folding `A` followed by `B`.
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::analyze;
//! use chatstat::parser::parse_str;
//!
//! let messages = parse_str(
//!     "[05.03.24, 14:05:30] Alice: Hello world\n\
//!      [05.03.24, 14:06:00] Alice: ducks love ducks\n\
//!      [06.03.24, 09:00:00] Bob: morning",
//! );
//! let stats = analyze(&messages);
//!
//! assert_eq!(stats.total_messages("Alice"), Some(2));
//! assert_eq!(stats.total_words("Alice"), Some(5));
//! assert_eq!(stats.average_words_per_message("Alice"), Some(2.5));
//! assert_eq!(stats.duck_count(), 2);
//! assert_eq!(stats.busiest_date(), Some(("05.03.24", 2)));
//! ```

use std::collections::HashMap;

use log::{debug, info};
use serde::{Serialize, Serializer};

use super::calendar::{HourlyDistribution, WeekdayDistribution};
use super::counter::FrequencyCounter;
use super::text;
use crate::Message;
use crate::config::StatsConfig;

/// Raw per-sender tallies kept during the fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SenderCounters {
    messages: u64,
    words: u64,
    characters: u64,
    emojis: u64,
}

impl SenderCounters {
    fn add(&mut self, other: SenderCounters) {
        self.messages += other.messages;
        self.words += other.words;
        self.characters += other.characters;
        self.emojis += other.emojis;
    }
}

/// Final figures for one sender.
///
/// Only senders with at least one accepted message ever get an entry, so
/// `messages` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderStats {
    /// Sender name as it appears in the transcript.
    pub sender: String,
    /// Accepted messages.
    pub messages: u64,
    /// Whitespace-separated tokens across all messages.
    pub words: u64,
    /// Content length in UTF-16 code units.
    pub characters: u64,
    /// Scalar values above U+1F000.
    pub emojis: u64,
    /// `words / messages`.
    pub average_words_per_message: f64,
}

impl SenderStats {
    fn from_counters(sender: String, counters: SenderCounters) -> Self {
        Self {
            sender,
            messages: counters.messages,
            words: counters.words,
            characters: counters.characters,
            emojis: counters.emojis,
            average_words_per_message: counters.words as f64 / counters.messages as f64,
        }
    }
}

/// Running state of the statistics fold.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    config: StatsConfig,
    sender_index: HashMap<String, usize>,
    senders: Vec<(String, SenderCounters)>,
    weekdays: WeekdayDistribution,
    hours: HourlyDistribution,
    words: FrequencyCounter,
    dates: FrequencyCounter,
    duck_count: u64,
}

impl StatsAccumulator {
    /// Creates an empty accumulator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator with custom configuration.
    pub fn with_config(config: StatsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Number of messages folded so far.
    pub fn message_count(&self) -> u64 {
        self.senders.iter().map(|(_, c)| c.messages).sum()
    }

    /// Folds one message into the running totals.
    pub fn push(&mut self, msg: &Message) {
        let content = msg.content();

        let mut token_count = 0u64;
        for token in text::words(content) {
            token_count += 1;
            let word = text::normalize_word(token);
            if !word.is_empty() && word.chars().count() >= self.config.min_word_len {
                self.words.increment(&word);
            }
        }

        let slot = self.sender_slot(msg.sender());
        self.senders[slot].1.add(SenderCounters {
            messages: 1,
            words: token_count,
            characters: text::utf16_len(content) as u64,
            emojis: text::emoji_count(content) as u64,
        });

        self.weekdays.record(msg.weekday());
        self.hours.record(msg.hour());
        self.duck_count += text::duck_count(content) as u64;
        self.dates.increment(&msg.date_key());
    }

    /// Combines the totals of another accumulator into this one.
    ///
    /// Senders, words and dates first seen in `other` are ordered after those
    /// already known here, exactly as if `other`'s messages had been pushed
    /// after this accumulator's. The configuration of `self` is kept.
    pub fn merge(&mut self, other: &StatsAccumulator) {
        for (sender, counters) in &other.senders {
            let slot = self.sender_slot(sender);
            self.senders[slot].1.add(*counters);
        }
        self.weekdays.merge(&other.weekdays);
        self.hours.merge(&other.hours);
        self.words.merge(&other.words);
        self.dates.merge(&other.dates);
        self.duck_count += other.duck_count;
    }

    /// Ends the fold, deriving averages and the word ranking.
    pub fn finish(self) -> ChatStats {
        debug!(
            "finishing fold: {} senders, {} distinct words, {} dates",
            self.senders.len(),
            self.words.len(),
            self.dates.len()
        );

        let senders: Vec<SenderStats> = self
            .senders
            .into_iter()
            .map(|(sender, counters)| SenderStats::from_counters(sender, counters))
            .collect();
        let most_used_words = self.words.top(self.config.top_words);

        let stats = ChatStats {
            duck_count: self.duck_count,
            senders,
            day_of_week_distribution: self.weekdays,
            hourly_distribution: self.hours,
            most_used_words,
            messages_by_date: self.dates,
        };

        info!(
            "aggregated {} messages from {} senders",
            stats.total_message_count(),
            stats.senders.len()
        );
        stats
    }

    fn sender_slot(&mut self, sender: &str) -> usize {
        if let Some(&i) = self.sender_index.get(sender) {
            return i;
        }
        let i = self.senders.len();
        self.sender_index.insert(sender.to_string(), i);
        self.senders.push((sender.to_string(), SenderCounters::default()));
        i
    }
}

impl<'a> Extend<&'a Message> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = &'a Message>>(&mut self, iter: I) {
        for msg in iter {
            self.push(msg);
        }
    }
}

/// Immutable result of one complete fold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatStats {
    duck_count: u64,
    senders: Vec<SenderStats>,
    day_of_week_distribution: WeekdayDistribution,
    hourly_distribution: HourlyDistribution,
    #[serde(serialize_with = "serialize_ranking")]
    most_used_words: Vec<(String, u64)>,
    messages_by_date: FrequencyCounter,
}

impl ChatStats {
    /// Total non-overlapping occurrences of `"duck"`.
    pub fn duck_count(&self) -> u64 {
        self.duck_count
    }

    /// Per-sender figures in first-seen order.
    pub fn senders(&self) -> &[SenderStats] {
        &self.senders
    }

    /// Figures for a single sender.
    pub fn sender(&self, name: &str) -> Option<&SenderStats> {
        self.senders.iter().find(|s| s.sender == name)
    }

    /// Accepted messages from `sender`.
    pub fn total_messages(&self, sender: &str) -> Option<u64> {
        self.sender(sender).map(|s| s.messages)
    }

    /// Words written by `sender`.
    pub fn total_words(&self, sender: &str) -> Option<u64> {
        self.sender(sender).map(|s| s.words)
    }

    /// Characters (UTF-16 code units) written by `sender`.
    pub fn total_characters(&self, sender: &str) -> Option<u64> {
        self.sender(sender).map(|s| s.characters)
    }

    /// Emoji sent by `sender`.
    pub fn emoji_usage(&self, sender: &str) -> Option<u64> {
        self.sender(sender).map(|s| s.emojis)
    }

    /// Mean words per message for `sender`.
    pub fn average_words_per_message(&self, sender: &str) -> Option<f64> {
        self.sender(sender).map(|s| s.average_words_per_message)
    }

    /// Accepted messages across all senders.
    pub fn total_message_count(&self) -> u64 {
        self.senders.iter().map(|s| s.messages).sum()
    }

    /// Messages per weekday.
    pub fn day_of_week_distribution(&self) -> &WeekdayDistribution {
        &self.day_of_week_distribution
    }

    /// Messages per hour of day.
    pub fn hourly_distribution(&self) -> &HourlyDistribution {
        &self.hourly_distribution
    }

    /// Top words by frequency, highest first.
    pub fn most_used_words(&self) -> &[(String, u64)] {
        &self.most_used_words
    }

    /// Messages per `DD.MM.YY` date, in first-seen order.
    pub fn messages_by_date(&self) -> &FrequencyCounter {
        &self.messages_by_date
    }

    /// The date with the most messages; the earliest-seen date wins a tie.
    pub fn busiest_date(&self) -> Option<(&str, u64)> {
        self.messages_by_date.max()
    }
}

fn serialize_ranking<S: Serializer>(
    ranking: &[(String, u64)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(ranking.iter().map(|(word, n)| (word, n)))
}

/// Folds `messages` into a snapshot with default configuration.
pub fn analyze<'a, I>(messages: I) -> ChatStats
where
    I: IntoIterator<Item = &'a Message>,
{
    analyze_with_config(messages, StatsConfig::default())
}

/// Folds `messages` into a snapshot.
pub fn analyze_with_config<'a, I>(messages: I, config: StatsConfig) -> ChatStats
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut acc = StatsAccumulator::with_config(config);
    acc.extend(messages);
    acc.finish()
}
