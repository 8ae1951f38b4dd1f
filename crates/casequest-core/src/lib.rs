//! CaseQuest Core - Game Engine
//!
//! Sessions, exactly-once scoring, a ranked leaderboard, and best-effort
//! key-value persistence for the stage-based business-case game. The
//! rules themselves live in `casequest-logic`; this crate owns storage,
//! timestamps, events, and orchestration.
//!
//! # Example
//!
//! ```rust
//! use casequest_core::prelude::*;
//!
//! let mut game = GameEngine::new(MemoryStore::new());
//! game.start_game("Ava").unwrap();
//!
//! game.record_market_estimate(2_000_000, 15.0, 4.0);
//! let final_score = game.finalize_game();
//! assert!(final_score > 0);
//! ```

pub mod engine;
pub mod events;
pub mod leaderboard_store;
pub mod persistence;
pub mod scoring;
pub mod session_store;
pub mod storage;
pub mod timer;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{GameEngine, StartError};
    pub use crate::events::GameEvent;
    pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
    pub use crate::timer::Countdown;
}
