//! End-to-end scenarios for the engine: scoring, leaderboard, resumption,
//! and recovery. All tests drive the public API over an in-memory store.

use casequest_core::prelude::*;
use casequest_core::session_store;
use casequest_core::storage::keys;
use casequest_logic::constants::points;
use casequest_logic::stages::CasePath;

const ROOKIE: u32 = points::BADGE;

// ── Spec scenarios ─────────────────────────────────────────────────────

#[test]
fn fresh_player_scores_and_ranks() {
    let mut game = GameEngine::new(MemoryStore::new());
    game.start_game("Ava").unwrap();

    // Starting badge aside, one award of 50 lands on the board as 50+.
    assert!(game.award_points("q1", 50));

    let session = game.load_session().unwrap();
    assert_eq!(session.total_score, ROOKIE + 50);

    let board = game.load_leaderboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Ava");
    assert_eq!(board[0].score, ROOKIE + 50);
}

#[test]
fn repeated_award_keeps_first_value() {
    let mut game = GameEngine::new(MemoryStore::new());
    game.start_game("Ava").unwrap();

    assert!(game.award_points("q1", 50));
    assert!(!game.award_points("q1", 999));

    assert_eq!(game.load_session().unwrap().total_score, ROOKIE + 50);
    assert_eq!(game.load_leaderboard()[0].score, ROOKIE + 50);
}

#[test]
fn equal_scores_rank_alphabetically() {
    let mut store = MemoryStore::new();

    // Two players share one device store; each plays to the same total.
    {
        let mut game = GameEngine::new(&mut store);
        game.start_game("Ben").unwrap();
        game.award_points("q1", 80 - ROOKIE);
    }
    {
        let mut game = GameEngine::new(&mut store);
        game.start_game("Ava").unwrap();
        game.award_points("q1", 80 - ROOKIE);
    }

    let game = GameEngine::new(&mut store);
    let board = game.load_leaderboard();
    let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Ava", "Ben"]);
    assert_eq!(board[0].score, 80);
    assert_eq!(board[1].score, 80);
}

// ── Session resumption ─────────────────────────────────────────────────

#[test]
fn resumed_session_keeps_progress() {
    let mut store = MemoryStore::new();

    {
        let mut game = GameEngine::new(&mut store);
        game.start_game("Ava").unwrap();
        game.choose_path(CasePath::Distribution);
    }

    // New engine over the same store: resume picks up the player.
    let mut game = GameEngine::new(&mut store);
    assert!(game.resume());

    let session = game.load_session().unwrap();
    assert_eq!(session.name, "Ava");
    assert_eq!(session.total_score, ROOKIE + points::PATH_CHOICE);

    // Restarting the game flow does not re-award solved tasks.
    game.start_game("Ava").unwrap();
    game.choose_path(CasePath::Distribution);
    assert_eq!(
        game.load_session().unwrap().total_score,
        ROOKIE + points::PATH_CHOICE
    );
}

#[test]
fn resume_without_player_fails() {
    let mut game = GameEngine::new(MemoryStore::new());
    assert!(!game.resume());
    assert!(game.load_session().is_none());
}

// ── Degraded storage states ────────────────────────────────────────────

#[test]
fn corrupt_records_recover_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(&keys::session_key("Ava"), "{broken json");
    store.set(keys::LEADERBOARD, "not even close");
    session_store::set_current_player(&mut store, "Ava");

    let mut game = GameEngine::new(&mut store);
    assert!(game.resume());

    // Fresh session, empty board, nothing surfaced to the player.
    assert_eq!(game.load_session().unwrap().total_score, 0);
    assert!(game.load_leaderboard().is_empty());

    // Play continues normally on the healed state.
    assert!(game.award_points("q1", 50));
    assert_eq!(game.load_leaderboard()[0].score, 50);
}

// ── Display truncation ─────────────────────────────────────────────────

#[test]
fn display_truncates_storage_does_not() {
    let mut store = MemoryStore::new();

    for i in 0..15u32 {
        let mut game = GameEngine::new(&mut store);
        game.start_game(&format!("player{i:02}")).unwrap();
        game.award_points("q1", i * 10);
    }

    let game = GameEngine::new(&mut store);
    assert_eq!(game.load_leaderboard().len(), 15);
    assert_eq!(game.leaderboard_display().len(), 10);
    assert_eq!(game.leaderboard_top(3).len(), 3);
}

// ── Crisis countdown wiring ────────────────────────────────────────────

#[test]
fn expired_countdown_submits_the_response() {
    use std::cell::RefCell;
    use std::rc::Rc;

    // The host snapshots the textarea into this slot on every tick and
    // lets expiry submit whatever is there — same shape as the original
    // interval callback, minus the DOM.
    let response = Rc::new(RefCell::new(String::new()));
    let submitted = Rc::new(RefCell::new(None::<String>));

    let text_slot = Rc::clone(&response);
    let out = Rc::clone(&submitted);
    let mut countdown = Countdown::start(
        3,
        |_remaining| {},
        move || {
            *out.borrow_mut() = Some(text_slot.borrow().clone());
        },
    );

    response.borrow_mut().push_str(
        "Recall the affected batch, notify all retail partners, and publish a statement today.",
    );
    for _ in 0..3 {
        countdown.tick();
    }
    assert!(!countdown.is_running());

    let mut game = GameEngine::new(MemoryStore::new());
    game.start_game("Ava").unwrap();
    let text = submitted.borrow().clone().expect("expiry should have fired");
    assert!(game.submit_crisis_response(&text));
}

#[test]
fn canceled_countdown_never_submits() {
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let mut countdown = Countdown::start(300, |_| {}, move || flag.set(true));

    countdown.tick();
    countdown.cancel();
    for _ in 0..400 {
        countdown.tick();
    }
    assert!(!fired.get());
}
