//! The parsed chat record type.
//!
//! This module provides [`Record`], the normalized representation of one
//! chat message extracted from an export. The parser converts raw log text
//! into a sequence of these, enabling uniform aggregation downstream.
//!
//! # Overview
//!
//! A record consists of:
//! - **`timestamp`**: when the message was sent (timezone-naive, as exports
//!   carry no zone information)
//! - **`sender`**: trimmed display name
//! - **`message`**: raw text, possibly spanning multiple lines and containing
//!   emoji or URLs
//!
//! Two fields are derived once at construction and cached on the record:
//! `date` (calendar date) and `hour` (0–23). Records whose timestamp could
//! not be parsed never make it into a record list, so `timestamp` is always
//! valid here.
//!
//! # Example
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let rec = Record::new(ts, "Alice", "Hello!");
//!
//! assert_eq!(rec.sender(), "Alice");
//! assert_eq!(rec.hour(), 9);
//! assert_eq!(rec.date().to_string(), "2023-02-01");
//! ```

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One logical chat entry: timestamp, sender, and message body.
///
/// Records are created fresh per parse call and live only for the duration
/// of one parse-and-analyze cycle. Ordering within a record list follows the
/// order of appearance in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent. Always successfully parsed; entries with
    /// unparsable timestamps are dropped before record construction.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author, with surrounding whitespace
    /// trimmed.
    pub sender: String,

    /// Raw text content of the message.
    ///
    /// May contain newlines for multiline messages, emoji, and URLs. The
    /// tokenizer is responsible for any cleanup.
    pub message: String,

    /// Calendar date component of `timestamp`.
    pub date: NaiveDate,

    /// Hour-of-day component of `timestamp` (0–23).
    pub hour: u32,
}

impl Record {
    /// Creates a record, deriving `date` and `hour` from the timestamp.
    ///
    /// The sender is trimmed of surrounding whitespace.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let sender: String = sender.into();
        Self {
            date: timestamp.date(),
            hour: timestamp.hour(),
            timestamp,
            sender: sender.trim().to_string(),
            message: message.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the raw message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the full timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the hour of day (0–23) the message was sent.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns `true` if this record's message is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}
