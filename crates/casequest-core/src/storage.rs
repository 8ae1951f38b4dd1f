//! String-keyed, JSON-valued storage behind the session and leaderboard
//! stores.
//!
//! Persistence is best effort throughout: a store that cannot read gives
//! back nothing, a store that cannot write drops the value, and neither
//! surfaces an error to the player. The game degrades to an unscored,
//! non-persistent session rather than failing.
//!
//! Concurrent writers to the same backing store (two tabs, one player
//! name) are unguarded: last write wins.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Well-known storage keys.
pub mod keys {
    /// Current player name.
    pub const PLAYER: &str = "player";
    /// The global ranked list.
    pub const LEADERBOARD: &str = "leaderboard";

    /// Per-player session record key.
    pub fn session_key(name: &str) -> String {
        format!("session:{name}")
    }
}

/// Minimal key-value contract the stores need.
///
/// Values are JSON documents serialized to strings by the callers; the
/// store itself never parses them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// Drop everything. Only the explicit restart path calls this.
    fn clear(&mut self);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// In-memory store for tests and ephemeral play.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// File-backed store: one JSON object per file, rewritten on every
/// mutation.
///
/// Opening a store with a missing or corrupt file starts empty; write
/// failures are logged and swallowed.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading whatever valid state exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[STORE] corrupt store file {:?}, starting empty: {}", path, e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[STORE] serialize failed: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, raw) {
            log::warn!("[STORE] write to {:?} failed: {}", self.path, e);
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.flush();
    }
}
