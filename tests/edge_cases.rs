//! Edge case tests for chatstat
//!
//! These tests cover boundary conditions of the line format and of the
//! statistics that the unit tests only touch one module at a time.

use chatstat::Message;
use chatstat::core::{StatsAccumulator, analyze};
use chatstat::parser::{LineParser, parse_line, parse_str};
use chrono::{NaiveDate, Weekday};

fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

// =========================================================================
// Unicode and special characters
// =========================================================================

#[test]
fn test_unicode_senders() {
    let input = "\
[05.03.24, 10:00:00] Иван: Привет мир
[05.03.24, 10:01:00] 田中太郎: こんにちは
[05.03.24, 10:02:00] User 🎉: party";

    let stats = analyze(&parse_str(input));
    let names: Vec<&str> = stats.senders().iter().map(|s| s.sender.as_str()).collect();
    assert_eq!(names, vec!["Иван", "田中太郎", "User 🎉"]);
}

#[test]
fn test_non_latin_words_not_ranked() {
    // Normalization keeps only a-z and German letters
    let stats = analyze(&parse_str("[05.03.24, 10:00:00] Иван: Привет мир"));
    assert!(stats.most_used_words().is_empty());
    assert_eq!(stats.total_words("Иван"), Some(2));
}

#[test]
fn test_german_words_kept() {
    let stats = analyze(&parse_str(
        "[05.03.24, 10:00:00] Jörg: Grüße aus der Straße, GRÜSSE!",
    ));
    let words: Vec<&str> = stats
        .most_used_words()
        .iter()
        .map(|(w, _)| w.as_str())
        .collect();
    assert_eq!(words, vec!["grüße", "aus", "der", "straße", "grüsse"]);
}

#[test]
fn test_emoji_threshold_boundary() {
    let msgs = vec![
        Message::new(at(5, 10), "A", "\u{1F000}"),
        Message::new(at(5, 10), "B", "\u{1F001}"),
        Message::new(at(5, 10), "C", "\u{2764}\u{FE0F}"),
    ];
    let stats = analyze(&msgs);

    assert_eq!(stats.emoji_usage("A"), Some(0));
    assert_eq!(stats.emoji_usage("B"), Some(1));
    // BMP symbols such as the heart are below the threshold
    assert_eq!(stats.emoji_usage("C"), Some(0));
}

#[test]
fn test_zwj_sequence_counts_each_code_point() {
    // man, ZWJ, woman, ZWJ, girl: three astral code points
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let stats = analyze(&[Message::new(at(5, 10), "A", family)]);

    assert_eq!(stats.emoji_usage("A"), Some(3));
    assert_eq!(stats.total_characters("A"), Some(8));
}

#[test]
fn test_characters_are_utf16_units() {
    let stats = analyze(&[Message::new(at(5, 10), "A", "é𝄞")]);
    assert_eq!(stats.total_characters("A"), Some(3));
}

#[test]
fn test_sender_with_semicolons_and_quotes() {
    let msg = parse_line(r#"[05.03.24, 10:00:00] User;"Quoted": hi"#).unwrap();
    assert_eq!(msg.sender(), r#"User;"Quoted""#);
}

// =========================================================================
// Content edge cases
// =========================================================================

#[test]
fn test_whitespace_only_content_is_empty_message() {
    let messages = parse_str("[05.03.24, 10:00:00] Alice:     \n[05.03.24, 10:01:00] Alice: two words");
    assert_eq!(messages.len(), 2);
    assert!(messages[0].is_empty());

    let stats = analyze(&messages);
    assert_eq!(stats.total_messages("Alice"), Some(2));
    assert_eq!(stats.total_words("Alice"), Some(2));
    assert!((stats.average_words_per_message("Alice").unwrap() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_sender_padding_merges() {
    let stats = analyze(&parse_str(
        "[05.03.24, 10:00:00]  Alice  : one\n[05.03.24, 10:01:00] Alice: two",
    ));
    assert_eq!(stats.senders().len(), 1);
    assert_eq!(stats.total_messages("Alice"), Some(2));
}

#[test]
fn test_sender_names_case_sensitive() {
    let stats = analyze(&parse_str(
        "[05.03.24, 10:00:00] alice: one\n[05.03.24, 10:01:00] Alice: two",
    ));
    assert_eq!(stats.senders().len(), 2);
}

#[test]
fn test_duck_substrings_and_case() {
    let msgs = vec![
        Message::new(at(5, 10), "A", "duckduck"),
        Message::new(at(5, 10), "A", "Duck DUCK"),
        Message::new(at(5, 10), "B", "ducks and a duckling"),
    ];
    assert_eq!(analyze(&msgs).duck_count(), 4);
}

#[test]
fn test_marker_substring_anywhere() {
    assert!(parse_line("[05.03.24, 10:00:00] Alice: \u{200E}image omitted").is_none());
    assert!(parse_line("[05.03.24, 10:00:00] Alice: <GIF omitted>").is_none());
    assert!(parse_line("[05.03.24, 10:00:00] Alice: imageomitted").is_some());
}

#[test]
fn test_word_threshold_boundary() {
    let stats = analyze(&parse_str("[05.03.24, 10:00:00] A: ab abc 12 a1b2c3"));
    let words: Vec<(&str, u64)> = stats
        .most_used_words()
        .iter()
        .map(|(w, n)| (w.as_str(), *n))
        .collect();
    // "12" normalizes to nothing, "a1b2c3" to "abc"
    assert_eq!(words, vec![("abc", 2)]);
    assert_eq!(stats.total_words("A"), Some(4));
}

// =========================================================================
// Calendar edge cases
// =========================================================================

#[test]
fn test_midnight_and_last_second() {
    let stats = analyze(&parse_str(
        "[09.03.24, 23:59:59] A: late\n[10.03.24, 00:00:00] A: early",
    ));

    assert_eq!(stats.hourly_distribution().get(23), 1);
    assert_eq!(stats.hourly_distribution().get(0), 1);
    assert_eq!(stats.day_of_week_distribution().get(Weekday::Sat), 1);
    assert_eq!(stats.day_of_week_distribution().get(Weekday::Sun), 1);
    assert_eq!(stats.messages_by_date().len(), 2);
}

#[test]
fn test_year_2000_and_2099() {
    let stats = analyze(&parse_str(
        "[01.01.00, 12:00:00] A: y2k\n[31.12.99, 12:00:00] A: end",
    ));
    let dates: Vec<&str> = stats.messages_by_date().keys().collect();
    assert_eq!(dates, vec!["01.01.00", "31.12.99"]);
    // 2000-01-01 was a Saturday, 2099-12-31 is a Thursday
    assert_eq!(stats.day_of_week_distribution().get(Weekday::Sat), 1);
    assert_eq!(stats.day_of_week_distribution().get(Weekday::Thu), 1);
}

#[test]
fn test_dates_keep_first_seen_order_when_unsorted() {
    let stats = analyze(&parse_str(
        "[07.03.24, 10:00:00] A: b\n[05.03.24, 10:00:00] A: a\n[07.03.24, 11:00:00] A: c",
    ));
    let dates: Vec<(&str, u64)> = stats.messages_by_date().iter().collect();
    assert_eq!(dates, vec![("07.03.24", 2), ("05.03.24", 1)]);
}

#[test]
fn test_busiest_date_tie_goes_to_first_seen() {
    let stats = analyze(&parse_str(
        "[07.03.24, 10:00:00] A: x\n[05.03.24, 10:00:00] A: y",
    ));
    assert_eq!(stats.busiest_date(), Some(("07.03.24", 1)));
}

// =========================================================================
// Word ranking limits
// =========================================================================

#[test]
fn test_ranking_capped_at_one_hundred() {
    // 120 distinct words, word i appears (i % 3) + 1 times
    let mut acc = StatsAccumulator::new();
    for i in 0..120u32 {
        let word = format!("wo{}", letters(i));
        for _ in 0..=(i % 3) {
            acc.push(&Message::new(at(5, 10), "A", word.clone()));
        }
    }
    let stats = acc.finish();
    let ranking = stats.most_used_words();

    assert_eq!(ranking.len(), 100);
    assert!(ranking.windows(2).all(|w| w[0].1 >= w[1].1));
    // All 40 words seen three times come first, the earliest one leading
    assert_eq!(ranking[0], (format!("wo{}", letters(2)), 3));
    assert_eq!(ranking[39].1, 3);
    assert_eq!(ranking[40], (format!("wo{}", letters(1)), 2));
}

#[test]
fn test_huge_message() {
    let content = "quack ".repeat(50_000);
    let line = format!("[05.03.24, 10:00:00] A: {content}");
    let messages = LineParser::new().parse_str(&line);
    let stats = analyze(&messages);

    assert_eq!(stats.total_words("A"), Some(50_000));
    assert_eq!(stats.most_used_words(), &[("quack".to_string(), 50_000)]);
}

/// Maps `n` to a distinct lowercase letter string ("a", "b", ..., "ba", ...).
fn letters(mut n: u32) -> String {
    let mut out = Vec::new();
    loop {
        out.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.iter().rev().collect()
}
