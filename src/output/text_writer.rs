//! Plain-text report writer.

use std::fs::File;
use std::io::Write;

use super::format_percentage;
use crate::core::ChatStats;
use crate::error::Result;

/// Writes the text report to a file.
pub fn write_text(stats: &ChatStats, output_path: &str) -> Result<()> {
    let report = to_text(stats);
    let mut file = File::create(output_path)?;
    file.write_all(report.as_bytes())?;
    Ok(())
}

/// Renders the snapshot as a sectioned, human-readable report.
///
/// # Format
/// ```text
/// Messages
///   Alice: 2 (66.7%)
///   Bob: 1 (33.3%)
///
/// Most used words
///   1. hello: 3
/// ```
pub fn to_text(stats: &ChatStats) -> String {
    let mut out = String::new();
    let senders = stats.senders();

    let total_messages = stats.total_message_count();
    let total_words: u64 = senders.iter().map(|s| s.words).sum();
    let total_characters: u64 = senders.iter().map(|s| s.characters).sum();
    let total_emojis: u64 = senders.iter().map(|s| s.emojis).sum();

    section(
        &mut out,
        "Messages",
        senders.iter().map(|s| (s.sender.as_str(), s.messages)),
        total_messages,
    );
    section(
        &mut out,
        "Words",
        senders.iter().map(|s| (s.sender.as_str(), s.words)),
        total_words,
    );
    section(
        &mut out,
        "Characters",
        senders.iter().map(|s| (s.sender.as_str(), s.characters)),
        total_characters,
    );
    section(
        &mut out,
        "Emojis",
        senders.iter().map(|s| (s.sender.as_str(), s.emojis)),
        total_emojis,
    );

    out.push_str("Average words per message\n");
    for s in senders {
        out.push_str(&format!("  {}: {:.2}\n", s.sender, s.average_words_per_message));
    }
    out.push('\n');

    section(
        &mut out,
        "Messages by weekday",
        stats.day_of_week_distribution().iter(),
        total_messages,
    );

    out.push_str("Messages by hour\n");
    for (hour, count) in stats.hourly_distribution().iter() {
        out.push_str(&format!(
            "  {:02}:00: {} ({})\n",
            hour,
            count,
            format_percentage(count, total_messages)
        ));
    }
    out.push('\n');

    out.push_str("Most used words\n");
    for (rank, (word, count)) in stats.most_used_words().iter().enumerate() {
        out.push_str(&format!("  {}. {}: {}\n", rank + 1, word, count));
    }
    out.push('\n');

    match stats.busiest_date() {
        Some((date, count)) => {
            out.push_str(&format!("Busiest day: {} with {} messages\n", date, count));
        }
        None => out.push_str("Busiest day: none\n"),
    }
    out.push_str(&format!("Duck count: {}\n", stats.duck_count()));

    out
}

fn section<'a>(
    out: &mut String,
    title: &str,
    rows: impl Iterator<Item = (&'a str, u64)>,
    total: u64,
) {
    out.push_str(title);
    out.push('\n');
    for (label, count) in rows {
        out.push_str(&format!(
            "  {}: {} ({})\n",
            label,
            count,
            format_percentage(count, total)
        ));
    }
    out.push('\n');
}
