//! Per-player session record: solved tasks and cumulative score.
//!
//! A [`Session`] is the unit of persistence for one player's progress.
//! The one invariant worth stating: `total_score` always equals the sum
//! of `solved[*].points`, and every task key scores at most once.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single solved task: what it was worth and when it was solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedTask {
    /// Points awarded for this task.
    pub points: u32,
    /// ISO-8601 timestamp of the award.
    pub timestamp: String,
}

/// One player's persisted progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Player name, unique per device.
    pub name: String,
    /// Solved tasks keyed by task key. BTreeMap keeps serialized output
    /// stable across runs.
    pub solved: BTreeMap<String, SolvedTask>,
    /// Cumulative score; always the sum of `solved[*].points`.
    pub total_score: u32,
}

impl Session {
    /// Fresh session with no solved tasks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            solved: BTreeMap::new(),
            total_score: 0,
        }
    }

    /// Whether this task has already scored.
    pub fn is_solved(&self, task_key: &str) -> bool {
        self.solved.contains_key(task_key)
    }

    /// Record a solve exactly once.
    ///
    /// Returns `false` without mutating anything if `task_key` is already
    /// present — repeated calls with the same key never double-count, even
    /// with a different point value.
    pub fn record(&mut self, task_key: &str, points: u32, timestamp: impl Into<String>) -> bool {
        if self.is_solved(task_key) {
            return false;
        }
        self.solved.insert(
            task_key.to_string(),
            SolvedTask {
                points,
                timestamp: timestamp.into(),
            },
        );
        self.total_score += points;
        true
    }

    /// Restore the score invariant after deserializing untrusted data.
    pub fn recompute_total(&mut self) {
        self.total_score = self.solved.values().map(|t| t.points).sum();
    }
}
