//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - report format options, convertible to
//!   [`crate::format::OutputFormat`]
//!
//! [`Args::parser_config`] and [`Args::stats_config`] turn the flags into the
//! library's configuration types, so the binary stays a thin shell.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MIN_WORD_LEN, DEFAULT_TOP_WORDS, ParserConfig, StatsConfig};

/// Statistics for bracket-timestamped chat transcripts:
/// per-sender activity, weekday and hourly patterns, most used words.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat _chat.txt
    chatstat _chat.txt -f json -o stats.json
    chatstat _chat.txt --top 20 --min-word-len 4
    chatstat _chat.txt --marker \"sticker omitted\"")]
pub struct Args {
    /// Path to the transcript file
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report format [default: inferred from --output, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of most used words to report
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Minimum normalized word length (in characters) to be counted
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MIN_WORD_LEN)]
    pub min_word_len: usize,

    /// Additional placeholder text marking non-text messages (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub marker: Vec<String>,

    /// Log parsing and aggregation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser configuration: the default markers plus any `--marker` values.
    pub fn parser_config(&self) -> ParserConfig {
        self.marker
            .iter()
            .fold(ParserConfig::new(), |config, marker| config.with_marker(marker))
    }

    /// Report format: `-f` when given, otherwise the `-o` file extension,
    /// otherwise text.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }

    /// Aggregation configuration from `--top` and `--min-word-len`.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig::new()
            .with_top_words(self.top)
            .with_min_word_len(self.min_word_len)
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Full statistics as JSON
    Json,

    /// Per-sender table, semicolon delimited
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
