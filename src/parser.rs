//! WhatsApp TXT export parser.
//!
//! Turns the raw bytes of an exported chat log into an ordered list of
//! [`Record`]s. The export format is locale-dependent: day/month order,
//! seconds, and AM/PM markers all vary. The timestamp format is resolved
//! once over the whole batch rather than per line, so a file cannot end up
//! with a mix of US- and EU-interpreted dates.
//!
//! Supported entry shape:
//!
//! ```text
//! 1/2/23, 9:00 AM - Alice: Hello
//! 15/1/2024, 10:30:00 - Bob: Hi
//! ```
//!
//! A message body continues across lines until the next recognized entry
//! start or end of input. System notifications (timestamp prefix but no
//! `Sender:` part) are skipped entirely.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::Record;
use crate::error::Result;

/// Pattern matching the start of a chat entry with a sender.
///
/// Captures: date, time, sender, first line of the message body.
const ENTRY_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap][Mm])?)\s-\s([^:]+):\s(.*)$";

/// Pattern matching the timestamp prefix alone.
///
/// Lines that carry this prefix but fail [`ENTRY_PATTERN`] are system
/// notifications ("Messages are end-to-end encrypted", group renames) and
/// are dropped rather than treated as continuations of the previous message.
const TIMESTAMP_PREFIX_PATTERN: &str =
    r"^\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap][Mm])?\s-\s";

/// Timestamp formats tried against the batch of extracted entries, in order.
///
/// Centralized so format-coverage tests can enumerate them directly.
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%y, %I:%M %p",    // US: 1/15/23, 9:00 AM
    "%d/%m/%Y, %H:%M:%S",    // international: 15/1/2023, 21:00:00
    "%d/%m/%y, %I:%M %p",    // UK: 15/1/23, 9:00 PM
    "%m/%d/%Y, %I:%M:%S %p", // US with seconds: 1/15/2023, 9:00:00 AM
];

fn entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ENTRY_PATTERN).unwrap())
}

fn timestamp_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIMESTAMP_PREFIX_PATTERN).unwrap())
}

/// An entry whose timestamp has not been resolved yet.
#[derive(Debug)]
struct RawEntry {
    /// Reconstructed `date, time` string, e.g. `1/2/23, 9:00 AM`.
    timestamp: String,
    sender: String,
    message: String,
}

/// Decodes input bytes, trying UTF-8 first.
///
/// Falls back to Latin-1, which maps every byte to a scalar value and
/// therefore never fails. The order matters: valid UTF-8 must not be run
/// through the fallback, or multibyte sequences would be mangled.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Scans decoded text into raw entries.
///
/// Three cases per line:
/// - full entry match: a new raw entry starts
/// - timestamp prefix only: system notification, skipped
/// - neither: continuation of the previous entry's body, or an orphan line
///   before the first entry, which is skipped
fn extract_entries(content: &str) -> Vec<RawEntry> {
    let entry_re = entry_regex();
    let prefix_re = timestamp_prefix_regex();

    let mut entries: Vec<RawEntry> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = entry_re.captures(line) {
            let date_str = caps.get(1).map_or("", |m| m.as_str());
            let time_str = caps.get(2).map_or("", |m| m.as_str());
            let sender = caps.get(3).map_or("", |m| m.as_str());
            let body = caps.get(4).map_or("", |m| m.as_str());

            entries.push(RawEntry {
                timestamp: format!("{date_str}, {time_str}"),
                sender: sender.to_string(),
                message: body.to_string(),
            });
        } else if prefix_re.is_match(line) {
            // System notification without a sender.
            continue;
        } else if let Some(last) = entries.last_mut() {
            last.message.push('\n');
            last.message.push_str(line);
        }
    }

    entries
}

/// Picks the timestamp format for the whole batch.
///
/// Every format in [`TIMESTAMP_FORMATS`] is scored by how many entries it
/// fails to parse; the first format with zero failures wins. If none fully
/// succeeds, the format with the fewest failures is kept (ties broken by
/// list order) and the entries it cannot parse are dropped later. Scoring
/// all candidates avoids the trap of defaulting to the last attempted
/// format, which could silently lose most of a file under the wrong trial
/// order.
fn resolve_format(entries: &[RawEntry]) -> &'static str {
    let mut best = TIMESTAMP_FORMATS[0];
    let mut best_failures = usize::MAX;

    for &format in TIMESTAMP_FORMATS {
        let failures = entries
            .iter()
            .filter(|e| NaiveDateTime::parse_from_str(&e.timestamp, format).is_err())
            .count();

        if failures == 0 {
            return format;
        }
        if failures < best_failures {
            best = format;
            best_failures = failures;
        }
    }

    best
}

/// Parses a decoded chat export into records.
///
/// Entries whose timestamp does not parse under the resolved format are
/// dropped. An input with zero recognizable entries yields an empty vec,
/// not an error; emptiness is the summary builder's concern.
pub fn parse_str(content: &str) -> Result<Vec<Record>> {
    let entries = extract_entries(content);
    if entries.is_empty() {
        return Ok(vec![]);
    }

    let format = resolve_format(&entries);

    let records = entries
        .into_iter()
        .filter_map(|entry| {
            NaiveDateTime::parse_from_str(&entry.timestamp, format)
                .ok()
                .map(|ts| Record::new(ts, entry.sender, entry.message))
        })
        .collect();

    Ok(records)
}

/// Parses raw export bytes into records.
///
/// Decodes as UTF-8 with a Latin-1 fallback, then delegates to
/// [`parse_str`]. This is the entry point for callers holding the upload
/// in memory; no disk staging is needed.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Record>> {
    parse_str(&decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_basic_two_lines() {
        let input = "1/2/23, 9:00 AM - Alice: Hello 😀 http://x.com\n\
                     1/2/23, 9:05 AM - Bob: Hi there";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sender(), "Alice");
        assert_eq!(records[1].sender(), "Bob");
        assert_eq!(records[0].hour(), 9);
    }

    #[test]
    fn test_us_format_wins_for_ambiguous_dates() {
        // 1/2/23 parses under both US and UK formats; the US format comes
        // first in the trial order and must win deterministically.
        let input = "1/2/23, 9:00 AM - Alice: Hello";
        let records = parse_str(input).unwrap();
        assert_eq!(records[0].date().to_string(), "2023-01-02");
    }

    #[test]
    fn test_international_format() {
        let input = "15/1/2024, 21:30:00 - Bob: Guten Abend";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date().month(), 1);
        assert_eq!(records[0].date().day(), 15);
        assert_eq!(records[0].hour(), 21);
    }

    #[test]
    fn test_uk_format_resolved_by_batch() {
        // 25/12/23 fails the US format (month 25), so the whole batch must
        // fall through to the UK format, including the ambiguous first line.
        let input = "1/2/23, 9:00 AM - Alice: Hi\n\
                     25/12/23, 9:05 PM - Bob: Merry Christmas";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date().to_string(), "2023-02-01");
        assert_eq!(records[1].date().to_string(), "2023-12-25");
        assert_eq!(records[1].hour(), 21);
    }

    #[test]
    fn test_partial_failure_keeps_best_format() {
        // No format parses every line; the one with the fewest failures
        // must be kept and the stragglers dropped.
        let input = "1/2/23, 9:00 AM - Alice: Hi\n\
                     3/4/23, 9:05 AM - Bob: Hey\n\
                     15/1/2024, 21:30:00 - Carol: mixed locale line";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sender(), "Alice");
        assert_eq!(records[1].sender(), "Bob");
    }

    #[test]
    fn test_multiline_message() {
        let input = "1/2/23, 9:00 AM - Alice: first line\n\
                     second line\n\
                     third line\n\
                     1/2/23, 9:05 AM - Bob: reply";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "first line\nsecond line\nthird line");
        assert_eq!(records[1].message(), "reply");
    }

    #[test]
    fn test_system_notification_skipped() {
        let input = "1/2/23, 9:00 AM - Messages and calls are end-to-end encrypted\n\
                     1/2/23, 9:01 AM - Alice: Hello";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender(), "Alice");
        assert_eq!(records[0].message(), "Hello");
    }

    #[test]
    fn test_system_notification_not_appended_to_previous() {
        let input = "1/2/23, 9:00 AM - Alice: Hello\n\
                     1/2/23, 9:01 AM - Bob left";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), "Hello");
    }

    #[test]
    fn test_orphan_lines_before_first_entry_skipped() {
        let input = "random preamble\n1/2/23, 9:00 AM - Alice: Hello";
        let records = parse_str(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), "Hello");
    }

    #[test]
    fn test_empty_input_yields_empty_records() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("no entries here at all").unwrap().is_empty());
    }

    #[test]
    fn test_sender_whitespace_trimmed() {
        let input = "1/2/23, 9:00 AM -  Alice : Hello";
        let records = parse_str(input).unwrap();
        assert_eq!(records[0].sender(), "Alice");
    }

    #[test]
    fn test_parse_bytes_utf8() {
        let input = "1/2/23, 9:00 AM - Alice: Héllo 😀".as_bytes();
        let records = parse_bytes(input).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].message().contains('😀'));
    }

    #[test]
    fn test_parse_bytes_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 but invalid as a lone UTF-8 byte.
        let mut input = b"1/2/23, 9:00 AM - Alice: caf".to_vec();
        input.push(0xE9);
        let records = parse_bytes(&input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message(), "café");
    }

    #[test]
    fn test_decode_prefers_utf8() {
        // A valid UTF-8 multibyte sequence must not be mangled by Latin-1.
        assert_eq!(decode("émoji 😀".as_bytes()), "émoji 😀");
    }

    #[test]
    fn test_all_formats_enumerable() {
        // Each named format must parse its own canonical example.
        let examples = [
            "1/15/23, 9:00 AM",
            "15/1/2023, 21:00:00",
            "15/1/23, 9:00 PM",
            "1/15/2023, 9:00:00 AM",
        ];
        for (format, example) in TIMESTAMP_FORMATS.iter().zip(examples) {
            assert!(
                NaiveDateTime::parse_from_str(example, format).is_ok(),
                "format {format} failed on {example}"
            );
        }
    }

    #[test]
    fn test_order_of_appearance_preserved() {
        let input = "1/2/23, 11:00 PM - Bob: later message listed first\n\
                     1/2/23, 9:00 AM - Alice: earlier message listed second";
        let records = parse_str(input).unwrap();
        // Ordering follows the source text, not chronology.
        assert_eq!(records[0].sender(), "Bob");
        assert_eq!(records[1].sender(), "Alice");
    }
}
