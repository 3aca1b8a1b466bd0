//! Frequency and temporal aggregation.
//!
//! [`top_n`] ranks a token stream by count, descending, with ties broken by
//! first appearance in the stream. Naive histogram-then-sort loses that
//! tie-break because hash map iteration order is arbitrary; the counter here
//! keeps tokens in insertion order and relies on a stable sort, so equal
//! counts stay in first-seen order.
//!
//! [`hourly_activity`] buckets records by hour of day into exactly 24 slots,
//! zero-filled where no record landed.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::Record;

/// Default number of entries in a ranked frequency list.
pub const DEFAULT_TOP_N: usize = 10;

/// A ranked word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// A ranked emoji with its occurrence count.
///
/// Serializes the emoji as a one-character JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: u64,
}

/// Message count for one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyBucket {
    /// Hour of day, 0–23.
    pub hour: u32,
    pub count: u64,
}

/// Counts distinct tokens and returns the `n` most frequent.
///
/// Ranking is by count descending; equal counts keep the order in which the
/// distinct tokens were first encountered. If fewer than `n` distinct tokens
/// exist, all of them are returned.
pub fn top_n<T>(tokens: &[T], n: usize) -> Vec<(T, u64)>
where
    T: Eq + Hash + Clone,
{
    // Insertion-ordered counter: the vec holds first-seen order, the map
    // points back into it.
    let mut index: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(&T, u64)> = Vec::new();

    for token in tokens {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);

    counts
        .into_iter()
        .map(|(token, count)| (token.clone(), count))
        .collect()
}

/// Ranks word tokens into the top `n` [`WordCount`] entries.
pub fn top_words(tokens: &[String], n: usize) -> Vec<WordCount> {
    top_n(tokens, n)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Ranks emoji tokens into the top `n` [`EmojiCount`] entries.
pub fn top_emojis(tokens: &[char], n: usize) -> Vec<EmojiCount> {
    top_n(tokens, n)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}

/// Buckets records by hour of day.
///
/// Always returns exactly 24 buckets, hours 0 through 23 ascending, with a
/// zero count for hours no record fell in.
pub fn hourly_activity(records: &[Record]) -> Vec<HourlyBucket> {
    let mut counts = [0u64; 24];
    for record in records {
        counts[record.hour() as usize % 24] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourlyBucket {
            hour: hour as u32,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec_at(hour: u32) -> Record {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Record::new(ts, "Alice", "hello")
    }

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_n_counts() {
        let tokens = words(&["cat", "dog", "cat", "cat", "dog", "bird"]);
        let ranked = top_n(&tokens, 10);
        assert_eq!(
            ranked,
            vec![
                ("cat".to_string(), 3),
                ("dog".to_string(), 2),
                ("bird".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_n_tie_break_first_seen() {
        // zebra appears before apple; both have count 2, so zebra ranks
        // first despite sorting after it alphabetically.
        let tokens = words(&["zebra", "apple", "zebra", "apple"]);
        let ranked = top_n(&tokens, 10);
        assert_eq!(ranked[0].0, "zebra");
        assert_eq!(ranked[1].0, "apple");
    }

    #[test]
    fn test_top_n_many_way_tie_keeps_stream_order() {
        let tokens = words(&["e", "d", "c", "b", "a"]);
        let ranked = top_n(&tokens, 10);
        let order: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let tokens = words(&["a", "b", "c", "d"]);
        assert_eq!(top_n(&tokens, 2).len(), 2);
    }

    #[test]
    fn test_top_n_fewer_than_n() {
        let tokens = words(&["a", "b"]);
        assert_eq!(top_n(&tokens, 10).len(), 2);
    }

    #[test]
    fn test_top_n_empty() {
        let tokens: Vec<String> = vec![];
        assert!(top_n(&tokens, 10).is_empty());
    }

    #[test]
    fn test_top_emojis_chars() {
        let tokens = vec!['😀', '😂', '😀'];
        let ranked = top_emojis(&tokens, 10);
        assert_eq!(ranked[0], EmojiCount { emoji: '😀', count: 2 });
        assert_eq!(ranked[1], EmojiCount { emoji: '😂', count: 1 });
    }

    #[test]
    fn test_emoji_count_serializes_as_string() {
        let entry = EmojiCount { emoji: '😀', count: 1 };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"emoji":"😀","count":1}"#);
    }

    #[test]
    fn test_hourly_activity_full_coverage() {
        let records = vec![rec_at(9), rec_at(9), rec_at(23)];
        let buckets = hourly_activity(&records);
        assert_eq!(buckets.len(), 24);
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.hour, i as u32);
        }
        assert_eq!(buckets[9].count, 2);
        assert_eq!(buckets[23].count, 1);
        assert_eq!(buckets[0].count, 0);
    }

    #[test]
    fn test_hourly_activity_empty_records() {
        let buckets = hourly_activity(&[]);
        assert_eq!(buckets.len(), 24);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_hourly_counts_sum_to_total() {
        let records = vec![rec_at(0), rec_at(5), rec_at(5), rec_at(12)];
        let total: u64 = hourly_activity(&records).iter().map(|b| b.count).sum();
        assert_eq!(total, records.len() as u64);
    }
}
