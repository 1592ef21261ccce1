//! Report writers.
//!
//! Every writer consumes only the public surface of a [`ChatStats`](crate::core::ChatStats)
//! snapshot:
//! - [`write_text`] / [`to_text`] - human-readable console report
//! - [`write_json`] / [`to_json`] - the full snapshot as JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-sender table with semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::analyze;
//! use chatstat::output::{format_percentage, to_text};
//! use chatstat::parser::parse_str;
//!
//! let messages = parse_str("[05.03.24, 14:05:30] Alice: Hello world");
//! let report = to_text(&analyze(&messages));
//!
//! assert!(report.contains("Alice: 1 (100.0%)"));
//! assert_eq!(format_percentage(3, 8), "37.5%");
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};

/// Renders `count` as a share of `total` with one decimal, e.g. `"37.5%"`.
///
/// A zero total renders as `"0.0%"`.
pub fn format_percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}
