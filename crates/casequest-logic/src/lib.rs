//! Pure game rules for CaseQuest.
//!
//! This crate contains all rules of the stage-based business-case game
//! that are independent of storage, clocks, and any UI. Functions take
//! plain data and return results, making them unit-testable and portable
//! across hosts.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`badges`] | Achievement badges with stable one-time scoring keys |
//! | [`constants`] | Point values, task keys, rule thresholds |
//! | [`crisis`] | Crisis-response qualification and countdown formatting |
//! | [`leaderboard`] | Ranked score list: upsert, ordering, display cut |
//! | [`market`] | Market-size estimate for the calculator stage |
//! | [`pitch`] | Final-pitch validation and board feedback |
//! | [`session`] | Per-player solved-task record with exactly-once scoring |
//! | [`similarity`] | Normalized edit-distance similarity for free text |
//! | [`stages`] | Linear stage identity and the briefing branch choice |

pub mod badges;
pub mod constants;
pub mod crisis;
pub mod leaderboard;
pub mod market;
pub mod pitch;
pub mod session;
pub mod similarity;
pub mod stages;
