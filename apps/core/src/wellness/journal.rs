//! Read-side helpers over journal entries. Persistence belongs to the caller.

use chrono::{NaiveDate, TimeZone};
use std::collections::HashMap;

use crate::models::{JournalEntry, Mood};

/// Entries written on the calendar `date` as seen in `tz`, in input order
pub fn entries_on_date<'a, Tz: TimeZone>(
    entries: &'a [JournalEntry],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a JournalEntry> {
    entries
        .iter()
        .filter(|e| e.created_at.with_timezone(tz).date_naive() == date)
        .collect()
}

pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Count of entries per mood. Untagged entries are not counted.
pub fn mood_breakdown(entries: &[JournalEntry]) -> HashMap<Mood, usize> {
    let mut counts = HashMap::new();
    for mood in entries.iter().filter_map(|e| e.mood) {
        *counts.entry(mood).or_insert(0) += 1;
    }
    counts
}

pub fn latest_entry(entries: &[JournalEntry]) -> Option<&JournalEntry> {
    entries.iter().max_by_key(|e| e.created_at)
}
