//! Group-and-count helpers behind the home cards and the stats charts.

use crate::models::{CountEntry, FeedbackRecord};
use std::collections::HashMap;

/// Count records per key, in order of first appearance of each key.
pub fn count_by<F>(records: &[FeedbackRecord], key: F) -> Vec<CountEntry>
where
    F: Fn(&FeedbackRecord) -> &str,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<CountEntry> = Vec::new();

    for rec in records {
        let k = key(rec);
        match slots.get(k) {
            Some(&i) => out[i].value += 1,
            None => {
                slots.insert(k, out.len());
                out.push(CountEntry::new(k, 1));
            }
        }
    }

    out
}

/// Counts per exact `place` value.
pub fn count_by_place(records: &[FeedbackRecord]) -> Vec<CountEntry> {
    count_by(records, |r| r.place.as_str())
}

/// Counts per raw `emotion` value.
pub fn count_by_emotion(records: &[FeedbackRecord]) -> Vec<CountEntry> {
    count_by(records, |r| r.emotion.as_str())
}

/// Sort descending by value (stable, ties keep their order) and keep the first `n`.
pub fn top_n(grouped: &[CountEntry], n: usize) -> Vec<CountEntry> {
    let mut sorted = grouped.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted.truncate(n);
    sorted
}
