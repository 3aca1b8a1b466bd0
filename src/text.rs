//! Tokenization and normalization of message text.
//!
//! Two independent token streams are produced from a record list:
//!
//! - **word tokens**: emoji and URL runs removed, text lowercased, runs of
//!   3–15 ASCII letters extracted, stop words filtered out
//! - **emoji tokens**: every emoji-table character in the *unmodified* text,
//!   in order of appearance, repeats kept
//!
//! Both streams preserve source order, which the frequency ranking relies on
//! for its first-seen tie-break.

use std::sync::OnceLock;

use regex::Regex;

use crate::Record;
use crate::emoji::is_emoji;

/// Common short English words excluded from word-frequency ranking.
///
/// Note these only affect the ranked word list; the raw `totalWords` count
/// in a summary includes them.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "is", "in", "it", "to", "of", "for", "with", "on", "that", "this", "was", "at",
    "from", "by", "as", "an", "are", "be", "been", "being", "if", "into", "not", "such", "no",
    "nor", "too", "very", "can", "just", "should", "now",
];

/// A run of non-whitespace characters starting with `http`.
const URL_PATTERN: &str = r"http\S+";

/// Runs of 3–15 ASCII letters bounded by word boundaries.
const WORD_PATTERN: &str = r"\b[a-z]{3,15}\b";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).unwrap())
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).unwrap())
}

/// Returns `true` if the word is in the stop-word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// All message bodies joined with single spaces, in record order.
fn joined_messages(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::message)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts candidate word tokens from all messages.
///
/// Emoji characters are removed first, then URL-like substrings, then the
/// remainder is lowercased and scanned for letter runs. Stop words are
/// filtered out. Output order follows source position.
pub fn word_tokens(records: &[Record]) -> Vec<String> {
    let text: String = joined_messages(records)
        .chars()
        .filter(|&c| !is_emoji(c))
        .collect();
    let text = url_regex().replace_all(&text, "");
    let text = text.to_lowercase();

    word_regex()
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .filter(|w| !is_stop_word(w))
        .collect()
}

/// Extracts emoji characters from all messages, in order of appearance.
///
/// Scans the unmodified text, so emoji inside URLs or stop words are still
/// counted. Repeats are kept; the frequency aggregator does the counting.
pub fn emoji_tokens(records: &[Record]) -> Vec<char> {
    joined_messages(records).chars().filter(|&c| is_emoji(c)).collect()
}

/// Counts raw whitespace-separated tokens in one message.
///
/// This intentionally differs from [`word_tokens`]: stop words, URLs, and
/// non-alphabetic tokens all count. Used for the `totalWords` scalar.
pub fn raw_word_count(message: &str) -> usize {
    message.split_whitespace().count()
}

/// Counts emoji-table characters in one message.
pub fn raw_emoji_count(message: &str) -> usize {
    message.chars().filter(|&c| is_emoji(c)).count()
}
