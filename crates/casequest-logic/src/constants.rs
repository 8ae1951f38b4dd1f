//! Game constants — point values, task keys, and rule thresholds.
//!
//! Plain constants with no storage dependency. Both the engine crate and
//! any host UI use these, so point values and task keys stay in one place.

/// Points awarded per scorable activity.
pub mod points {
    /// Every badge is worth the same flat bonus.
    pub const BADGE: u32 = 25;
    /// Choosing an investigation path in the briefing stage.
    pub const PATH_CHOICE: u32 = 50;
    /// Running the market-size calculation.
    pub const MARKET_CALC: u32 = 50;
    /// Submitting a qualifying crisis response in time.
    pub const CRISIS_RESPONSE: u32 = 50;
    /// Trading intel with another team.
    pub const CLUE_TRADE: u32 = 30;
    /// Blocking the rival team.
    pub const RIVAL_BLOCK: u32 = 20;
    /// Submitting a valid final pitch.
    pub const FINAL_PITCH: u32 = 100;
    /// Bonus question: partnering with the NGO.
    pub const BONUS_PARTNER: u32 = 40;
    /// Bonus question: staying focused on core business.
    pub const BONUS_FOCUS: u32 = 20;
}

/// Stable identifiers for scorable activities. Scoring is exactly-once
/// per (player, task key), so these must never change between releases.
pub mod task_keys {
    pub const PATH_CHOICE: &str = "briefing:path";
    pub const MARKET_CALC: &str = "market:calc";
    pub const CRISIS_RESPONSE: &str = "crisis:response";
    pub const CLUE_TRADE: &str = "negotiation:trade";
    pub const RIVAL_BLOCK: &str = "negotiation:block";
    pub const FINAL_PITCH: &str = "pitch:submit";
    pub const BONUS_ANSWER: &str = "pitch:bonus";
}

/// Seconds on the crisis countdown before the response auto-submits.
pub const CRISIS_RESPONSE_SECS: u32 = 300;

/// A crisis response must be longer than this many characters to score.
pub const CRISIS_MIN_RESPONSE_CHARS: usize = 50;

/// Minimum word count for the final pitch.
pub const MIN_PITCH_WORDS: usize = 50;

/// Minimum number of key actions selected alongside the pitch.
pub const MIN_PITCH_ACTIONS: usize = 3;

/// Selecting this many actions earns the comprehensive-plan badge.
pub const COMPREHENSIVE_ACTIONS: usize = 4;

/// How many entries the leaderboard display shows (storage keeps all).
pub const LEADERBOARD_DISPLAY_LIMIT: usize = 10;

/// Intel items available in the clue trade.
pub const CLUE_TRADES: [&str; 3] = ["Market Data", "Cost Analysis", "Customer Survey"];
