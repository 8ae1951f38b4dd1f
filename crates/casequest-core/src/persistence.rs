//! Whole-game snapshot export and import.
//!
//! Uses bincode for compact binary serialization of the complete game
//! state — session, leaderboard, and current stage — independent of the
//! key-value store, so a host can back up or move a game in one blob.

use casequest_logic::leaderboard::LeaderboardEntry;
use casequest_logic::session::Session;
use casequest_logic::stages::StageId;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Version number for the snapshot format (increment when it changes).
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the full game state.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    /// Snapshot format version.
    pub version: u32,
    /// The active session, if a game is in progress.
    pub session: Option<Session>,
    /// The full (unbounded) leaderboard.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Where the player is in the case.
    pub stage: StageId,
}

/// Write a snapshot of the given state.
pub fn save_game<W: Write>(
    writer: W,
    session: Option<&Session>,
    leaderboard: &[LeaderboardEntry],
    stage: StageId,
) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        session: session.cloned(),
        leaderboard: leaderboard.to_vec(),
        stage,
    };
    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Read a snapshot back, rejecting unknown versions.
pub fn load_game<R: Read>(reader: R) -> Result<SaveData, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    Ok(save_data)
}

/// Errors that can occur during snapshot save/load.
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Snapshot version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
