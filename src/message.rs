//! The structured message produced by the line parser.
//!
//! A [`Message`] only exists for lines that parsed completely: it always
//! carries a valid calendar timestamp and a non-empty, trimmed sender.
//!
//! # Example
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 30)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello world");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.hour(), 14);
//! assert_eq!(msg.date_key(), "05.03.24");
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::calendar::date_key;

/// A single accepted chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time as written in the export, second precision |
/// | `sender` | `String` | Trimmed display name of the author |
/// | `content` | `String` | Trimmed text; may be empty |
///
/// The timestamp is naive: the export records local wall-clock time and the
/// weekday, hour and date buckets are computed from it as written, never
/// through the host timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the exporter's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub content: String,
}

impl Message {
    /// Creates a message from its parts.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Day of the week the message was sent on.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Calendar date rendered as `DD.MM.YY`.
    pub fn date_key(&self) -> String {
        date_key(self.timestamp.date())
    }

    /// Returns `true` if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
