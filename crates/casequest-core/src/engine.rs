//! Game engine - main entry point for driving a case.
//!
//! `GameEngine` owns the key-value store, the active session, the current
//! stage, and the event bus. Every stage operation routes its points
//! through the scoring service, so exactly-once semantics hold no matter
//! which surface an award comes from. Without an active session the
//! engine degrades to an unscored no-op rather than failing.

use crate::events::{EventBus, GameEvent};
use crate::leaderboard_store;
use crate::scoring::{self, ScoringOutcome};
use crate::session_store;
use crate::storage::KeyValueStore;
use casequest_logic::badges::Badge;
use casequest_logic::constants::{points, task_keys, CLUE_TRADES, LEADERBOARD_DISPLAY_LIMIT};
use casequest_logic::leaderboard::LeaderboardEntry;
use casequest_logic::market;
use casequest_logic::pitch::{self, BonusChoice, PitchAssessment, PitchError};
use casequest_logic::session::Session;
use casequest_logic::stages::{CasePath, StageId};
use casequest_logic::{crisis, leaderboard};
use rand::seq::SliceRandom;

/// Why a game could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// Blank (or whitespace-only) player name. The UI re-prompts.
    EmptyName,
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::EmptyName => write!(f, "player name must not be empty"),
        }
    }
}

impl std::error::Error for StartError {}

/// Main game engine.
pub struct GameEngine<S: KeyValueStore> {
    store: S,
    session: Option<Session>,
    stage: StageId,
    events: EventBus,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Create an engine over `store` with no active session.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
            stage: StageId::first(),
            events: EventBus::new(),
        }
    }

    /// Subscribe a UI listener to game events.
    pub fn on_event(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.events.subscribe(listener);
    }

    /// Register the player and begin (or continue) their case.
    ///
    /// Loads the existing session for `name` if one is persisted, so a
    /// returning player keeps their solved tasks. Awards the starting
    /// badge — a no-op on resumption thanks to exactly-once scoring.
    pub fn start_game(&mut self, name: &str) -> Result<(), StartError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StartError::EmptyName);
        }

        session_store::set_current_player(&mut self.store, name);
        self.session = Some(session_store::load_session(&self.store, name));
        self.stage = StageId::first();
        log::info!("[GAME] start player:{}", name);

        self.award_badge(Badge::DetectiveRookie);
        Ok(())
    }

    /// Restore the session for the persisted player name, if any.
    pub fn resume(&mut self) -> bool {
        let Some(name) = session_store::current_player(&self.store) else {
            return false;
        };
        self.session = Some(session_store::load_session(&self.store, &name));
        log::info!("[GAME] resume player:{}", name);
        true
    }

    /// The active session, if a game is running.
    pub fn load_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current stage of the case.
    pub fn stage(&self) -> StageId {
        self.stage
    }

    /// Move to the next stage; `None` (and no change) at the end.
    pub fn advance_stage(&mut self) -> Option<StageId> {
        let next = self.stage.next()?;
        self.stage = next;
        log::info!("[GAME] stage:{:?}", next);
        Some(next)
    }

    /// Award `points` for `task_key` exactly once. Returns whether the
    /// award applied. Unscored no-op when no session is active.
    pub fn award_points(&mut self, task_key: &str, points: u32) -> bool {
        let timestamp = now();
        let Some(session) = self.session.as_mut() else {
            log::warn!("[SCORE] no active session, dropping award task:{}", task_key);
            return false;
        };

        let outcome = scoring::award_points(&mut self.store, session, task_key, points, &timestamp);
        if let ScoringOutcome::Awarded {
            points,
            total_score,
        } = outcome
        {
            self.events.emit(&GameEvent::PointsAwarded {
                task_key: task_key.to_string(),
                points,
                total_score,
            });
        }
        outcome.is_awarded()
    }

    /// Earn `badge` at most once, worth the flat badge bonus.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        let already = self
            .session
            .as_ref()
            .is_some_and(|s| s.is_solved(badge.task_key()));
        if already {
            return false;
        }

        let awarded = self.award_points(badge.task_key(), points::BADGE);
        if awarded {
            self.events.emit(&GameEvent::BadgeEarned { badge });
        }
        awarded
    }

    /// Titles of every badge the player has earned, in award order.
    pub fn earned_badges(&self) -> Vec<&'static str> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        Badge::ALL
            .into_iter()
            .filter(|b| session.is_solved(b.task_key()))
            .map(Badge::title)
            .collect()
    }

    // ── Stage operations ───────────────────────────────────────────────

    /// Briefing: commit to an investigation path. Returns the unlock
    /// title for the chosen mini-case.
    pub fn choose_path(&mut self, path: CasePath) -> &'static str {
        self.award_points(task_keys::PATH_CHOICE, points::PATH_CHOICE);
        path.unlock_title()
    }

    /// Market: run the sales estimate. Scores once and returns the
    /// formatted bottle count for display.
    pub fn record_market_estimate(
        &mut self,
        population: u64,
        penetration_pct: f64,
        purchase_rate: f64,
    ) -> String {
        let estimate = market::potential_monthly_sales(population, penetration_pct, purchase_rate);
        self.award_points(task_keys::MARKET_CALC, points::MARKET_CALC);
        self.award_badge(Badge::DataCruncher);
        market::format_quantity(estimate)
    }

    /// Crisis: submit the response (typed or auto-submitted on expiry).
    /// Returns whether it qualified for points.
    pub fn submit_crisis_response(&mut self, text: &str) -> bool {
        if !crisis::response_qualifies(text) {
            return false;
        }
        self.award_points(task_keys::CRISIS_RESPONSE, points::CRISIS_RESPONSE);
        self.award_badge(Badge::CrisisManager);
        true
    }

    /// Negotiation: trade intel with another team. Returns the item
    /// received.
    pub fn trade_clue(&mut self) -> &'static str {
        let mut rng = rand::thread_rng();
        let item = CLUE_TRADES
            .choose(&mut rng)
            .copied()
            .unwrap_or(CLUE_TRADES[0]);
        self.award_points(task_keys::CLUE_TRADE, points::CLUE_TRADE);
        self.award_badge(Badge::SmartNegotiator);
        item
    }

    /// Negotiation: block the rival team.
    pub fn block_rival(&mut self) -> bool {
        self.award_points(task_keys::RIVAL_BLOCK, points::RIVAL_BLOCK)
    }

    /// Pitch: validate and score the final pitch. A rejected pitch scores
    /// nothing and may be retried.
    pub fn submit_pitch(
        &mut self,
        text: &str,
        actions_selected: usize,
    ) -> Result<PitchAssessment, PitchError> {
        let assessment = pitch::validate(text, actions_selected)?;
        self.award_points(task_keys::FINAL_PITCH, points::FINAL_PITCH);
        self.award_badge(Badge::MasterStrategist);
        if assessment.comprehensive {
            self.award_badge(Badge::Innovator);
        }
        Ok(assessment)
    }

    /// Pitch: answer the bonus question. Returns the board's reaction.
    pub fn answer_bonus(&mut self, choice: BonusChoice) -> &'static str {
        self.award_points(task_keys::BONUS_ANSWER, choice.points());
        choice.response()
    }

    /// Close out the case: emits `GameComplete` and returns the final
    /// score.
    pub fn finalize_game(&mut self) -> u32 {
        let final_score = self.session.as_ref().map_or(0, |s| s.total_score);
        log::info!("[GAME] complete score:{}", final_score);
        self.events.emit(&GameEvent::GameComplete { final_score });
        final_score
    }

    // ── Leaderboard views ──────────────────────────────────────────────

    /// The full persisted leaderboard, best first.
    pub fn load_leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard_store::load_leaderboard(&self.store)
    }

    /// The display slice of the leaderboard (top 10 by default).
    pub fn leaderboard_top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let entries = self.load_leaderboard();
        leaderboard::top(&entries, n).to_vec()
    }

    /// Convenience: the standard display cut.
    pub fn leaderboard_display(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard_top(LEADERBOARD_DISPLAY_LIMIT)
    }

    /// Wipe the store and all in-memory state. The only deletion path.
    pub fn restart(&mut self) {
        self.store.clear();
        self.session = None;
        self.stage = StageId::first();
        log::info!("[GAME] restart");
    }
}

/// ISO-8601 timestamp for awards and leaderboard dates.
fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn engine() -> GameEngine<MemoryStore> {
        GameEngine::new(MemoryStore::new())
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut game = engine();
        assert_eq!(game.start_game(""), Err(StartError::EmptyName));
        assert_eq!(game.start_game("   "), Err(StartError::EmptyName));
        assert!(game.load_session().is_none());
    }

    #[test]
    fn test_start_awards_rookie_badge() {
        let mut game = engine();
        game.start_game("Ava").unwrap();

        let session = game.load_session().unwrap();
        assert!(session.is_solved(Badge::DetectiveRookie.task_key()));
        assert_eq!(session.total_score, points::BADGE);
        assert_eq!(game.earned_badges(), ["Detective Rookie"]);
    }

    #[test]
    fn test_award_without_session_is_noop() {
        let mut game = engine();
        assert!(!game.award_points("q1", 50));
        assert!(game.load_leaderboard().is_empty());
    }

    #[test]
    fn test_stage_operations_score_once() {
        let mut game = engine();
        game.start_game("Ava").unwrap();
        let base = game.load_session().unwrap().total_score;

        let unlock = game.choose_path(CasePath::Pricing);
        assert_eq!(unlock, "Supplier Negotiation Mini-Puzzle");
        let after_choice = game.load_session().unwrap().total_score;
        assert_eq!(after_choice, base + points::PATH_CHOICE);

        // Choosing again (either path) does not re-score.
        game.choose_path(CasePath::Distribution);
        assert_eq!(game.load_session().unwrap().total_score, after_choice);
    }

    #[test]
    fn test_market_estimate_scores_and_formats() {
        let mut game = engine();
        game.start_game("Ava").unwrap();

        let display = game.record_market_estimate(2_000_000, 15.0, 4.0);
        assert_eq!(display, "1,200,000");

        let session = game.load_session().unwrap();
        assert!(session.is_solved(task_keys::MARKET_CALC));
        assert!(session.is_solved(Badge::DataCruncher.task_key()));
    }

    #[test]
    fn test_crisis_response_gate() {
        let mut game = engine();
        game.start_game("Ava").unwrap();
        let base = game.load_session().unwrap().total_score;

        assert!(!game.submit_crisis_response("too short"));
        assert_eq!(game.load_session().unwrap().total_score, base);

        let substantial = "Recall the batch, notify retailers, and publish a statement within the hour.";
        assert!(game.submit_crisis_response(substantial));
        let session = game.load_session().unwrap();
        assert!(session.is_solved(Badge::CrisisManager.task_key()));
    }

    #[test]
    fn test_trade_clue_returns_known_item() {
        let mut game = engine();
        game.start_game("Ava").unwrap();

        let item = game.trade_clue();
        assert!(CLUE_TRADES.contains(&item));
        assert!(game
            .load_session()
            .unwrap()
            .is_solved(task_keys::CLUE_TRADE));
    }

    #[test]
    fn test_pitch_rejection_scores_nothing() {
        let mut game = engine();
        game.start_game("Ava").unwrap();
        let base = game.load_session().unwrap().total_score;

        assert!(game.submit_pitch("short pitch", 4).is_err());
        assert_eq!(game.load_session().unwrap().total_score, base);
    }

    #[test]
    fn test_comprehensive_pitch_earns_innovator() {
        let mut game = engine();
        game.start_game("Ava").unwrap();

        let text = "grow revenue ".repeat(60);
        let assessment = game.submit_pitch(&text, 4).unwrap();
        assert!(assessment.comprehensive);

        let session = game.load_session().unwrap();
        assert!(session.is_solved(Badge::MasterStrategist.task_key()));
        assert!(session.is_solved(Badge::Innovator.task_key()));
    }

    #[test]
    fn test_events_fire_on_awards() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let mut game = engine();
        game.on_event(move |event| {
            log.borrow_mut().push(match event {
                GameEvent::PointsAwarded { .. } => "points",
                GameEvent::BadgeEarned { .. } => "badge",
                GameEvent::GameComplete { .. } => "complete",
            });
        });

        game.start_game("Ava").unwrap();
        game.finalize_game();

        assert_eq!(*seen.borrow(), ["points", "badge", "complete"]);
    }

    #[test]
    fn test_finalize_reports_total() {
        let mut game = engine();
        game.start_game("Ava").unwrap();
        game.block_rival();

        let expected = points::BADGE + points::RIVAL_BLOCK;
        assert_eq!(game.finalize_game(), expected);
        assert_eq!(game.load_leaderboard()[0].score, expected);
    }

    #[test]
    fn test_restart_wipes_everything() {
        let mut game = engine();
        game.start_game("Ava").unwrap();
        game.block_rival();
        game.restart();

        assert!(game.load_session().is_none());
        assert!(game.load_leaderboard().is_empty());
        assert_eq!(game.stage(), StageId::first());
        assert!(!game.resume());
    }

    #[test]
    fn test_advance_stage_stops_at_end() {
        let mut game = engine();
        game.start_game("Ava").unwrap();

        let mut seen = 1;
        while game.advance_stage().is_some() {
            seen += 1;
        }
        assert_eq!(seen, StageId::ALL.len());
        assert_eq!(game.stage(), StageId::Pitch);
        assert_eq!(game.advance_stage(), None);
    }
}
