//! Leaderboard persistence under the global `leaderboard` key.

use crate::storage::{keys, KeyValueStore};
use casequest_logic::leaderboard::{self, LeaderboardEntry};

/// Load the persisted list, or empty if nothing usable exists. Re-sorts
/// defensively so a hand-edited or stale record still ranks correctly.
pub fn load_leaderboard<S: KeyValueStore>(store: &S) -> Vec<LeaderboardEntry> {
    let Some(raw) = store.get(keys::LEADERBOARD) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<LeaderboardEntry>>(&raw) {
        Ok(mut entries) => {
            leaderboard::sort_entries(&mut entries);
            entries
        }
        Err(e) => {
            log::warn!("[BOARD] corrupt leaderboard, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Upsert `name` with `score`, then persist the full re-sorted list.
pub fn upsert_score<S: KeyValueStore>(store: &mut S, name: &str, score: u32, date: &str) {
    let mut entries = load_leaderboard(store);
    leaderboard::upsert(&mut entries, name, score, date);
    match serde_json::to_string(&entries) {
        Ok(raw) => store.set(keys::LEADERBOARD, &raw),
        Err(e) => log::warn!("[BOARD] serialize failed: {}", e),
    }
}
