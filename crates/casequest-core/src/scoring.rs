//! The scoring service: exactly-once point awards.
//!
//! All points flow through [`award_points`]. It is the sole writer of
//! `Session::total_score` and the sole trigger of leaderboard updates, so
//! the (player, task key) exactly-once guarantee holds everywhere by
//! construction.

use crate::leaderboard_store;
use crate::session_store;
use crate::storage::KeyValueStore;
use casequest_logic::session::Session;

/// What an award attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringOutcome {
    /// Points applied; session saved and leaderboard updated.
    Awarded { points: u32, total_score: u32 },
    /// The task key had already scored; nothing changed.
    AlreadySolved,
}

impl ScoringOutcome {
    pub fn is_awarded(self) -> bool {
        matches!(self, ScoringOutcome::Awarded { .. })
    }
}

/// Award `points` for `task_key` exactly once.
///
/// On first solve: records `{points, timestamp}` under the key, bumps the
/// session total, persists the session, and upserts the leaderboard with
/// the new total. Repeated calls with the same key are no-ops regardless
/// of the point value they carry.
pub fn award_points<S: KeyValueStore>(
    store: &mut S,
    session: &mut Session,
    task_key: &str,
    points: u32,
    timestamp: &str,
) -> ScoringOutcome {
    if !session.record(task_key, points, timestamp) {
        return ScoringOutcome::AlreadySolved;
    }

    session_store::save_session(store, session);
    leaderboard_store::upsert_score(store, &session.name, session.total_score, timestamp);
    log::info!(
        "[SCORE] player:{} task:{} points:{} total:{}",
        session.name,
        task_key,
        points,
        session.total_score
    );

    ScoringOutcome::Awarded {
        points,
        total_score: session.total_score,
    }
}
