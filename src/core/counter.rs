//! Insertion-ordered frequency counter.
//!
//! Word rankings and busiest-date lookups break ties by the order in which keys
//! were first seen, so the counter remembers first-encounter order alongside
//! the counts.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Counts string keys and remembers the order each key first appeared in.
///
/// # Example
///
/// ```rust
/// use chatstat::core::FrequencyCounter;
///
/// let mut counter = FrequencyCounter::new();
/// counter.increment("pear");
/// counter.increment("apple");
/// counter.increment("apple");
///
/// assert_eq!(counter.get("apple"), Some(2));
/// assert_eq!(counter.top(1), vec![("apple".to_string(), 2)]);
/// assert_eq!(counter.keys().collect::<Vec<_>>(), ["pear", "apple"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `n` to `key`, inserting it at the end if unseen.
    pub fn add(&mut self, key: &str, n: u64) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += n;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), n));
        }
    }

    /// Returns the count for `key`, if it was ever seen.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Iterates `(key, count)` in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Iterates keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Adds every count from `other`.
    ///
    /// Keys new to `self` are appended in `other`'s order, so merging the
    /// counters of two consecutive runs gives the same order as counting the
    /// concatenated run.
    pub fn merge(&mut self, other: &FrequencyCounter) {
        for (key, n) in other.iter() {
            self.add(key, n);
        }
    }

    /// The `n` most frequent entries, highest first; equal counts keep
    /// first-encounter order.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// The entry with the highest count; the earliest wins a tie.
    pub fn max(&self) -> Option<(&str, u64)> {
        self.iter()
            .fold(None, |best: Option<(&str, u64)>, (key, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((key, n)),
            })
    }
}

impl Serialize for FrequencyCounter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'a> FromIterator<&'a str> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
