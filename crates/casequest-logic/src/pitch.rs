//! Final-pitch validation and board feedback.
//!
//! A pitch is free text plus a set of selected key actions. Validation
//! enforces minimum substance; the assessment drives the board's feedback
//! lines and the comprehensive-plan badge.

use crate::constants::{COMPREHENSIVE_ACTIONS, MIN_PITCH_ACTIONS, MIN_PITCH_WORDS};
use serde::{Deserialize, Serialize};

/// Count words the way the UI does: whitespace-split, empties dropped.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Why a pitch was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchError {
    /// Fewer than [`MIN_PITCH_WORDS`] words.
    TooShort { words: usize },
    /// Fewer than [`MIN_PITCH_ACTIONS`] actions selected.
    TooFewActions { selected: usize },
}

impl std::fmt::Display for PitchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitchError::TooShort { words } => write!(
                f,
                "pitch has {} words, minimum is {}",
                words, MIN_PITCH_WORDS
            ),
            PitchError::TooFewActions { selected } => write!(
                f,
                "{} actions selected, minimum is {}",
                selected, MIN_PITCH_ACTIONS
            ),
        }
    }
}

impl std::error::Error for PitchError {}

/// The board's read on an accepted pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchAssessment {
    pub word_count: usize,
    pub actions_selected: usize,
    /// Pitch mentions profit or revenue.
    pub mentions_financials: bool,
    /// Enough actions for the comprehensive-plan badge.
    pub comprehensive: bool,
}

impl PitchAssessment {
    /// Feedback lines in display order.
    pub fn feedback(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        if self.mentions_financials {
            lines.push("Good focus on financial impact!");
        } else {
            lines.push("What about the profit implications?");
        }
        if self.comprehensive {
            lines.push("Comprehensive action plan!");
        }
        lines
    }
}

/// Validate a pitch and assess it.
///
/// Rejects before assessing: a rejected pitch scores nothing and the
/// player may retry.
pub fn validate(text: &str, actions_selected: usize) -> Result<PitchAssessment, PitchError> {
    let words = word_count(text);
    if words < MIN_PITCH_WORDS {
        return Err(PitchError::TooShort { words });
    }
    if actions_selected < MIN_PITCH_ACTIONS {
        return Err(PitchError::TooFewActions {
            selected: actions_selected,
        });
    }

    let lowered = text.to_lowercase();
    Ok(PitchAssessment {
        word_count: words,
        actions_selected,
        mentions_financials: lowered.contains("profit") || lowered.contains("revenue"),
        comprehensive: actions_selected >= COMPREHENSIVE_ACTIONS,
    })
}

/// The end-of-game bonus question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusChoice {
    /// Partner with the NGO.
    Partner,
    /// Stay focused on the core business.
    Focus,
}

impl BonusChoice {
    /// Points for this answer. Both answers score; the partnership pays
    /// more for the strategic reach.
    pub fn points(self) -> u32 {
        match self {
            BonusChoice::Partner => crate::constants::points::BONUS_PARTNER,
            BonusChoice::Focus => crate::constants::points::BONUS_FOCUS,
        }
    }

    /// The board's one-line reaction.
    pub fn response(self) -> &'static str {
        match self {
            BonusChoice::Partner => "Great strategic thinking! NGO partnerships can build trust.",
            BonusChoice::Focus => "Practical approach! Focus is important.",
        }
    }
}
