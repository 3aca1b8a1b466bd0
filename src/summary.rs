//! Summary building: the final aggregation step.
//!
//! [`analyze`] combines the tokenizer and aggregator outputs with scalar
//! stats into one [`Summary`], serialized with the camelCase field names the
//! consuming shell expects (`topWords`, `hourlyActivity`, ...).
//!
//! The record list must be non-empty: the date range of zero records is
//! undefined, so emptiness surfaces as an explicit
//! [`EmptyExport`](crate::ChatlensError::EmptyExport) error instead of a
//! partial summary.

use std::collections::HashSet;

use serde::Serialize;

use crate::Record;
use crate::config::AnalyzerConfig;
use crate::error::{ChatlensError, Result};
use crate::stats::{EmojiCount, HourlyBucket, WordCount, hourly_activity, top_emojis, top_words};
use crate::text::{emoji_tokens, raw_emoji_count, raw_word_count, word_tokens};

/// Date format used for `startDate`/`endDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Aggregate statistics over one parsed chat export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Ranked word frequencies, stop words excluded.
    pub top_words: Vec<WordCount>,

    /// Ranked emoji frequencies.
    pub top_emojis: Vec<EmojiCount>,

    /// Exactly 24 hour buckets, hours 0–23 ascending.
    pub hourly_activity: Vec<HourlyBucket>,

    /// Number of parsed records.
    pub total_messages: usize,

    /// Raw whitespace-separated token count across all messages.
    ///
    /// Includes stop words, URLs, and non-alphabetic tokens, so this is
    /// usually larger than the sum of `top_words` counts.
    pub total_words: usize,

    /// Emoji-table character count across all messages.
    pub total_emojis: usize,

    /// Earliest message date, formatted `YYYY-MM-DD`.
    pub start_date: String,

    /// Latest message date, formatted `YYYY-MM-DD`.
    pub end_date: String,

    /// Distinct sender names, in first-seen order.
    pub participants: Vec<String>,
}

/// Builds a [`Summary`] from parsed records.
///
/// Pure and deterministic: calling it twice on the same records yields an
/// identical summary.
///
/// # Errors
///
/// Returns [`ChatlensError::EmptyExport`] if `records` is empty.
///
/// # Example
///
/// ```rust
/// use chatlens::{analyze, parse_str};
/// use chatlens::config::AnalyzerConfig;
///
/// let records = parse_str("1/2/23, 9:00 AM - Alice: Hello world")?;
/// let summary = analyze(&records, &AnalyzerConfig::new())?;
/// assert_eq!(summary.total_messages, 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn analyze(records: &[Record], config: &AnalyzerConfig) -> Result<Summary> {
    if records.is_empty() {
        return Err(ChatlensError::empty_export(
            "the export contained no parsable messages",
        ));
    }

    let words = word_tokens(records);
    let emojis = emoji_tokens(records);

    // Non-empty records guarantee min/max exist.
    let start_date = records.iter().map(Record::date).min().unwrap_or_default();
    let end_date = records.iter().map(Record::date).max().unwrap_or_default();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut participants: Vec<String> = Vec::new();
    for record in records {
        if seen.insert(record.sender()) {
            participants.push(record.sender().to_string());
        }
    }

    Ok(Summary {
        top_words: top_words(&words, config.top_words),
        top_emojis: top_emojis(&emojis, config.top_emojis),
        hourly_activity: hourly_activity(records),
        total_messages: records.len(),
        total_words: records.iter().map(|r| raw_word_count(r.message())).sum(),
        total_emojis: records.iter().map(|r| raw_emoji_count(r.message())).sum(),
        start_date: start_date.format(DATE_FORMAT).to_string(),
        end_date: end_date.format(DATE_FORMAT).to_string(),
        participants,
    })
}
