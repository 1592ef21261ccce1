//! Weekday and hour buckets, and date-key rendering.
//!
//! All names and renderings come from fixed tables and explicit calendar
//! arithmetic, so the output never depends on the host locale or timezone.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

/// English weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Number of hourly buckets.
pub const HOURS_PER_DAY: usize = 24;

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// Renders a date as `DD.MM.YY`.
///
/// ```rust
/// use chatstat::core::calendar::date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(date_key(date), "05.03.24");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    format!(
        "{:02}.{:02}.{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

/// Message counts per weekday. All seven buckets always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayDistribution {
    counts: [u64; 7],
}

impl WeekdayDistribution {
    /// Creates a distribution with every bucket at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one message on `weekday`.
    pub fn record(&mut self, weekday: Weekday) {
        self.counts[weekday.num_days_from_sunday() as usize] += 1;
    }

    /// Count for `weekday`.
    pub fn get(&self, weekday: Weekday) -> u64 {
        self.counts[weekday.num_days_from_sunday() as usize]
    }

    /// Count for a weekday given by its English name, e.g. `"Monday"`.
    pub fn get_by_name(&self, name: &str) -> Option<u64> {
        WEEKDAY_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.counts[i])
    }

    /// Iterates `(name, count)` from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        WEEKDAY_NAMES.iter().copied().zip(self.counts.iter().copied())
    }

    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds every bucket of `other`.
    pub fn merge(&mut self, other: &WeekdayDistribution) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }
}

impl Serialize for WeekdayDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Message counts per hour of day, 0-23. All 24 buckets always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyDistribution {
    counts: [u64; HOURS_PER_DAY],
}

impl HourlyDistribution {
    /// Creates a distribution with every bucket at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one message in `hour`. Hours outside 0-23 are ignored.
    pub fn record(&mut self, hour: u32) {
        if let Some(slot) = self.counts.get_mut(hour as usize) {
            *slot += 1;
        }
    }

    /// Count for `hour`; zero for hours outside 0-23.
    pub fn get(&self, hour: u32) -> u64 {
        self.counts.get(hour as usize).copied().unwrap_or(0)
    }

    /// Iterates `(hour, count)` from 0 to 23.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        (0u32..).zip(self.counts.iter().copied())
    }

    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds every bucket of `other`.
    pub fn merge(&mut self, other: &HourlyDistribution) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }
}

impl Serialize for HourlyDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
