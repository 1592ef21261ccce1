//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::ChatStats;
use crate::error::Result;

/// Writes the full statistics snapshot to a JSON file.
///
/// # Format
/// ```json
/// {
///   "duck_count": 1,
///   "senders": [{"sender": "Alice", "messages": 2, ...}],
///   "day_of_week_distribution": {"Sunday": 0, ...},
///   "hourly_distribution": {"0": 0, ...},
///   "most_used_words": {"hello": 3},
///   "messages_by_date": {"05.03.24": 2}
/// }
/// ```
pub fn write_json(stats: &ChatStats, output_path: &str) -> Result<()> {
    let json = to_json(stats)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`], but returns the document as a string.
pub fn to_json(stats: &ChatStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
