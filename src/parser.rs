//! Line parser for bracketed chat transcripts.
//!
//! Every line of an export is parsed on its own. A line is either turned into a
//! [`Message`] or rejected; there is no error channel, because exports are full
//! of content that is legitimately not a text message (attachment placeholders,
//! continuation lines, system notices).
//!
//! Expected shape:
//!
//! ```text
//! [DD.MM.YY, HH:MM:SS] Sender: Content
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::{LineParser, parse_line};
//!
//! let msg = parse_line("[05.03.24, 14:05:30] Alice: Hello world").unwrap();
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "Hello world");
//!
//! // Continuation lines and attachments are rejected
//! assert!(parse_line("second line of a long message").is_none());
//! assert!(parse_line("[05.03.24, 14:06:00] Bob: image omitted").is_none());
//!
//! let parser = LineParser::new();
//! let messages = parser.parse_str("[05.03.24, 14:05:30] Alice: Hi\n[05.03.24, 14:05:31] Bob: Hey");
//! assert_eq!(messages.len(), 2);
//! ```
//!
//! # Known limitations
//!
//! - Multi-line messages keep only their first line; continuation lines do not
//!   start with `[` and are dropped.
//! - The sender ends at the first `": "`, so names containing that separator
//!   are split early.
//! - Two-digit years are read as `2000 + YY`.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};

/// Separates the sender from the content in the line tail.
const SENDER_SEPARATOR: &str = ": ";

/// Separates the date from the time inside the brackets.
const DATE_TIME_SEPARATOR: &str = ", ";

/// Century assumed for two-digit years.
const CENTURY: i32 = 2000;

static DEFAULT_CONFIG: LazyLock<ParserConfig> = LazyLock::new(ParserConfig::default);

/// Parses a single transcript line with the default non-text markers.
///
/// Returns `None` if the line is not a well-formed text message.
pub fn parse_line(line: &str) -> Option<Message> {
    parse_line_with(line, &DEFAULT_CONFIG)
}

/// Parses a single transcript line using the given configuration.
pub fn parse_line_with(line: &str, config: &ParserConfig) -> Option<Message> {
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;
    let raw_timestamp = &rest[..close];

    // Skip the "] " separator: the bracket and whatever single character follows it.
    let mut after = rest[close + 1..].chars();
    after.next();
    let tail = after.as_str();

    let (sender, content) = tail.split_once(SENDER_SEPARATOR)?;
    let sender = sender.trim();
    let content = content.trim();

    if config.is_non_text(content) {
        return None;
    }

    let timestamp = parse_timestamp(raw_timestamp)?;

    if sender.is_empty() {
        return None;
    }

    Some(Message::new(timestamp, sender, content))
}

/// Parses the bracketed `DD.MM.YY, HH:MM:SS` field.
///
/// Every component must be purely numeric and the result a real calendar
/// point; `32.13.24` or `25:00:00` yield `None`.
///
/// # Example
///
/// ```rust
/// use chatstat::parser::parse_timestamp;
///
/// let ts = parse_timestamp("29.02.24, 23:59:59").unwrap();
/// assert_eq!(ts.to_string(), "2024-02-29 23:59:59");
///
/// assert!(parse_timestamp("29.02.23, 10:00:00").is_none()); // not a leap year
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let (date, time) = raw.trim().split_once(DATE_TIME_SEPARATOR)?;

    let [day, month, year] = numeric_fields(date, '.')?;
    let [hour, minute, second] = numeric_fields(time, ':')?;

    if year > 99 {
        return None;
    }

    // Month is 1-based in the export, which is what chrono expects too.
    NaiveDate::from_ymd_opt(CENTURY + year as i32, month, day)?.and_hms_opt(hour, minute, second)
}

/// Splits `s` on `sep` into exactly three unsigned decimal fields.
fn numeric_fields(s: &str, sep: char) -> Option<[u32; 3]> {
    let mut parts = s.split(sep);
    let mut fields = [0u32; 3];

    for field in &mut fields {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *field = part.parse().ok()?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(fields)
}

/// Parser for bracketed transcript exports.
///
/// Wraps a [`ParserConfig`] and applies [`parse_line_with`] across inputs
/// of different shapes, always preserving line order.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one line.
    pub fn parse_line(&self, line: &str) -> Option<Message> {
        let parsed = parse_line_with(line, &self.config);
        if parsed.is_none() {
            trace!("rejected line: {line:?}");
        }
        parsed
    }

    /// Parses every line of an in-memory transcript.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.parse_lines(content.lines())
    }

    /// Parses an ordered sequence of lines, keeping accepted messages in order.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Vec<Message>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let messages: Vec<Message> = lines
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|line| self.parse_line(line))
            .collect();

        debug!(
            "parsed {} lines: {} accepted, {} rejected",
            total,
            messages.len(),
            total - messages.len()
        );
        messages
    }

    /// Lazily parses a buffered reader line by line.
    ///
    /// Rejected lines are skipped; only I/O failures surface as errors.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> MessageLines<'_, R> {
        MessageLines {
            parser: self,
            lines: reader.lines(),
            lines_read: 0,
            rejected: 0,
        }
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Message>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ChatstatError::read(path, e))?;

        let mut lines = self.parse_reader(BufReader::new(file));
        let messages = lines.by_ref().collect::<Result<Vec<_>>>()?;

        debug!(
            "{}: {} lines read, {} messages, {} rejected",
            path.display(),
            lines.lines_read(),
            messages.len(),
            lines.rejected()
        );
        Ok(messages)
    }
}

/// Iterator over messages parsed from a [`BufRead`].
///
/// Created by [`LineParser::parse_reader`].
pub struct MessageLines<'a, R> {
    parser: &'a LineParser,
    lines: Lines<R>,
    lines_read: usize,
    rejected: usize,
}

impl<R> MessageLines<'_, R> {
    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of lines rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<R: BufRead> Iterator for MessageLines<'_, R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.lines_read += 1;

            match self.parser.parse_line(&line) {
                Some(msg) => return Some(Ok(msg)),
                None => self.rejected += 1,
            }
        }
    }
}

/// Parses an in-memory transcript with default configuration.
pub fn parse_str(content: &str) -> Vec<Message> {
    LineParser::new().parse_str(content)
}
