//! CSV output writer.

use std::fs::File;
use std::io;

use crate::core::{ChatStats, SenderStats};
use crate::error::Result;

const HEADER: [&str; 6] = [
    "Sender",
    "Messages",
    "Words",
    "Characters",
    "Emojis",
    "AverageWords",
];

/// Writes the per-sender table with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages`, `Words`, `Characters`, `Emojis`, `AverageWords`
/// - One row per sender, first-appearance order
/// - Encoding: UTF-8
pub fn write_csv(stats: &ChatStats, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(stats, file)
}

/// Same as [`write_csv`], but returns the table as a string.
pub fn to_csv(stats: &ChatStats) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(stats, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: io::Write>(stats: &ChatStats, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(HEADER)?;
    for sender in stats.senders() {
        writer.write_record(build_record(sender))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(stats: &SenderStats) -> [String; 6] {
    [
        stats.sender.clone(),
        stats.messages.to_string(),
        stats.words.to_string(),
        stats.characters.to_string(),
        stats.emojis.to_string(),
        format!("{:.2}", stats.average_words_per_message),
    ]
}
