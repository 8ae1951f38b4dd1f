//! Cross-player ranked score list.
//!
//! The list keeps at most one entry per name, ordered by score descending
//! with ties broken by name ascending. Storage is unbounded; display
//! truncation is the caller's choice via [`top`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ranked player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// ISO-8601 timestamp of the last score change.
    pub date: String,
}

/// Replace the entry for `name` (updating score and date) or append a new
/// one, then restore sort order.
pub fn upsert(entries: &mut Vec<LeaderboardEntry>, name: &str, score: u32, date: impl Into<String>) {
    let date = date.into();
    match entries.iter_mut().find(|e| e.name == name) {
        Some(entry) => {
            entry.score = score;
            entry.date = date;
        }
        None => entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            date,
        }),
    }
    sort_entries(entries);
}

/// Sort by score descending, name ascending on ties.
pub fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
}

/// The first `n` entries, for display.
pub fn top(entries: &[LeaderboardEntry], n: usize) -> &[LeaderboardEntry] {
    &entries[..entries.len().min(n)]
}
