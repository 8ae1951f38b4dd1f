//! Session persistence: full-record load and save under `session:<name>`.
//!
//! Missing or corrupt records come back as a fresh session — the player
//! never sees a deserialization error, they just start over. Loads heal
//! the total-score invariant before handing the session out.

use crate::storage::{keys, KeyValueStore};
use casequest_logic::session::Session;

/// Load the session for `name`, or a fresh one if nothing usable exists.
pub fn load_session<S: KeyValueStore>(store: &S, name: &str) -> Session {
    let Some(raw) = store.get(&keys::session_key(name)) else {
        return Session::new(name);
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(mut session) => {
            session.recompute_total();
            session
        }
        Err(e) => {
            log::warn!("[SESSION] corrupt record for {}, starting fresh: {}", name, e);
            Session::new(name)
        }
    }
}

/// Persist the full session record, replacing any prior value. Best
/// effort: a failed serialize is logged and dropped.
pub fn save_session<S: KeyValueStore>(store: &mut S, session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => store.set(&keys::session_key(&session.name), &raw),
        Err(e) => log::warn!("[SESSION] serialize failed for {}: {}", session.name, e),
    }
}

/// The device's current player name, if one has been registered.
pub fn current_player<S: KeyValueStore>(store: &S) -> Option<String> {
    let raw = store.get(keys::PLAYER)?;
    serde_json::from_str(&raw).ok()
}

/// Register the current player name.
pub fn set_current_player<S: KeyValueStore>(store: &mut S, name: &str) {
    match serde_json::to_string(name) {
        Ok(raw) => store.set(keys::PLAYER, &raw),
        Err(e) => log::warn!("[SESSION] serialize player name failed: {}", e),
    }
}

/// Forget the current player (restart path).
pub fn clear_current_player<S: KeyValueStore>(store: &mut S) {
    store.remove(keys::PLAYER);
}
