//! Core statistics for chatstat.
//!
//! This module contains:
//! - [`stats`] - The statistics fold and its snapshot
//! - [`counter`] - Insertion-ordered frequency counting
//! - [`calendar`] - Weekday and hourly buckets, date keys
//! - [`text`] - Word, character, emoji and "duck" measures
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{StatsAccumulator, analyze};
//! use chatstat::parser::parse_str;
//!
//! let messages = parse_str("[05.03.24, 14:05:30] Alice: Hello world");
//!
//! // One-shot
//! let stats = analyze(&messages);
//! assert_eq!(stats.total_message_count(), 1);
//!
//! // Or incrementally
//! let mut acc = StatsAccumulator::new();
//! acc.extend(&messages);
//! assert_eq!(acc.finish(), stats);
//! ```

pub mod calendar;
pub mod counter;
pub mod stats;
pub mod text;

// Re-export main types for convenience
pub use calendar::{HourlyDistribution, WEEKDAY_NAMES, WeekdayDistribution};
pub use counter::FrequencyCounter;
pub use stats::{ChatStats, SenderStats, StatsAccumulator, analyze, analyze_with_config};

// Re-export Message from the crate root
pub use crate::Message;
