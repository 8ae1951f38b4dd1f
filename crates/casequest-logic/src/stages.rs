//! Stage identity for the linear case sequence.
//!
//! The host UI maps a [`StageId`] to its own page or view handler once at
//! startup; the core never inspects page names or URLs. Stage flow is
//! strictly linear, with one branching choice ([`CasePath`]) inside the
//! briefing stage that flavors later content without forking the sequence.

use serde::{Deserialize, Serialize};

/// The five stages of the case, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageId {
    /// Choose the main issue to investigate.
    Briefing,
    /// Market-size calculation.
    Market,
    /// Timed crisis response.
    Crisis,
    /// Intel trading with rival teams.
    Negotiation,
    /// Final pitch to the board.
    Pitch,
}

impl StageId {
    /// All stages in play order.
    pub const ALL: [StageId; 5] = [
        StageId::Briefing,
        StageId::Market,
        StageId::Crisis,
        StageId::Negotiation,
        StageId::Pitch,
    ];

    /// The opening stage.
    pub fn first() -> StageId {
        StageId::Briefing
    }

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// The following stage, or `None` at the end of the case.
    pub fn next(self) -> Option<StageId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Whether this is the last stage.
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// The stage-1 investigation branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasePath {
    /// Follow the distribution problem.
    Distribution,
    /// Follow the pricing problem.
    Pricing,
}

impl CasePath {
    /// The mini-case unlocked by this choice.
    pub fn unlock_title(self) -> &'static str {
        match self {
            CasePath::Distribution => "Warehouse Routes Mini-Case",
            CasePath::Pricing => "Supplier Negotiation Mini-Puzzle",
        }
    }
}
