//! Synthetic transcript generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🤖", "🦄", "🐉", "🌈",
    "🔥", "👍", "❤️", "⚡", "🦆", "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Jörg Müller",
    "Иван",
    "村上",
    "User;With;Semicolons",
    "User\"With\"Quotes",
    "🔥FireUser🔥",
    "   Padded   ",
];

const WORDS: &[&str] = &[
    "hello", "world", "duck", "ducks", "morning", "tonight", "coffee", "über", "grüße", "straße",
    "okay", "maybe", "really", "thanks", "see", "you", "later", "lol", "the", "and",
];

const PLACEHOLDERS: &[&str] = &[
    "image omitted",
    "GIF omitted",
    "‎image omitted",
    "sticker omitted",
    "audio omitted",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut clock = first_timestamp();

    for i in 0..count {
        clock += TimeDelta::seconds(rng.gen_range(1..=3_600));

        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
        let content = generate_content(&mut rng, i);

        let line = format!(
            "[{}] {}: {}\n",
            clock.format("%d.%m.%y, %H:%M:%S"),
            sender,
            content
        );
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasionally insert garbage lines to test robustness
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes())?;
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn first_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    match index % 20 {
        0..=9 => sentence(rng, 3..=12),

        // Multi-line: the tail lands on continuation lines
        10 => format!("{}\n{}", sentence(rng, 2..=5), sentence(rng, 2..=5)),
        11 => format!("{}\n\n{}", sentence(rng, 1..=3), sentence(rng, 1..=3)),

        // Emoji spam
        12 => (0..rng.gen_range(1..=20))
            .filter_map(|_| EMOJIS.choose(rng).copied())
            .collect::<Vec<_>>()
            .join(""),

        13 => PLACEHOLDERS.choose(rng).copied().unwrap_or("image omitted").to_string(),

        // Separator inside content
        14 => format!("note: {} #{}", sentence(rng, 2..=4), index),

        // Giant message
        15 => format!("Giant message #{}: {}", index, "quack ".repeat(10_000)),

        16 => format!("Mixed: Hello Привет 你好 🌍 Grüße #{}", index),
        17 => String::new(),
        18 => "   ".to_string(),

        _ => "duck duck duckduck".to_string(),
    }
}

fn sentence(rng: &mut impl Rng, len: std::ops::RangeInclusive<usize>) -> String {
    let n = rng.gen_range(len);
    (0..n)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..6) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[Invalid date format here] Someone: message\n".to_string(),
        2 => "[31.02.24, 10:00:00] Nobody: February 31st\n".to_string(),
        3 => "[12.05.24, 25:61:00] Nobody: out of range time\n".to_string(),
        4 => "\n".to_string(),
        _ => "[05.03.24, 14:05:30] no separator here\n".to_string(),
    }
}
