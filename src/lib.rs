//! # Chatstat
//!
//! A Rust library for computing descriptive statistics over exported chat
//! transcripts.
//!
//! ## Overview
//!
//! Chatstat reads transcripts where every message starts a line of the form
//!
//! ```text
//! [DD.MM.YY, HH:MM:SS] Sender: Content
//! ```
//!
//! and produces a single statistics snapshot:
//! - **Per sender**: messages, words, characters (UTF-16 units), emojis,
//!   average words per message
//! - **Calendar**: messages per weekday, per hour of day and per date
//! - **Vocabulary**: the most used normalized words
//! - **Fun**: how often the text "duck" appears
//!
//! Lines that do not match the header shape (continuation lines, system
//! notices) and placeholder messages such as `image omitted` are skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let transcript = "\
//! [05.03.24, 14:05:30] Alice: Hello world
//! [05.03.24, 14:06:00] Bob: image omitted
//! [06.03.24, 09:00:00] Bob: Morning, hello!";
//!
//! let messages = parse_str(transcript);
//! assert_eq!(messages.len(), 2);
//!
//! let stats = analyze(&messages);
//! assert_eq!(stats.total_messages("Alice"), Some(1));
//! assert_eq!(stats.most_used_words()[0], ("hello".to_string(), 2));
//! assert_eq!(stats.day_of_week_distribution().get_by_name("Tuesday"), Some(1));
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = LineParser::with_config(ParserConfig::new().with_marker("sticker omitted"));
//!     let messages = parser.parse_file("_chat.txt")?;
//!
//!     let stats = analyze_with_config(&messages, StatsConfig::new().with_top_words(20));
//!     println!("{}", to_text(&stats));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - line parser and bulk helpers ([`LineParser`](parser::LineParser), [`parse_str`](parser::parse_str))
//! - [`message`] - the parsed [`Message`]
//! - [`core`] - the statistics fold ([`StatsAccumulator`](core::StatsAccumulator)) and snapshot ([`ChatStats`](core::ChatStats))
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`output`] - text, JSON and CSV report writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`] - clap argument types (feature `cli`)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::{LineParser, parse_line, parse_str};

    // Configuration
    pub use crate::config::{ParserConfig, StatsConfig};

    // Statistics
    pub use crate::core::{ChatStats, SenderStats, StatsAccumulator, analyze, analyze_with_config};

    // Reports
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::{format_percentage, to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
