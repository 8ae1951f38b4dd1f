//! Achievement badges earned during the case.
//!
//! Each badge is awarded at most once per player and carries the flat
//! [`points::BADGE`](crate::constants::points::BADGE) bonus. One-time
//! enforcement goes through the same task-key mechanism as any other
//! score, using [`Badge::task_key`].

use serde::{Deserialize, Serialize};

/// All badges a player can earn, in rough order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Starting the case.
    DetectiveRookie,
    /// Running the market-size calculation.
    DataCruncher,
    /// Submitting a qualifying crisis response.
    CrisisManager,
    /// Trading intel with another team.
    SmartNegotiator,
    /// Submitting a valid final pitch.
    MasterStrategist,
    /// Selecting a comprehensive action plan.
    Innovator,
}

impl Badge {
    /// All badges in award order.
    pub const ALL: [Badge; 6] = [
        Badge::DetectiveRookie,
        Badge::DataCruncher,
        Badge::CrisisManager,
        Badge::SmartNegotiator,
        Badge::MasterStrategist,
        Badge::Innovator,
    ];

    /// Display name shown in the badge tray.
    pub fn title(self) -> &'static str {
        match self {
            Badge::DetectiveRookie => "Detective Rookie",
            Badge::DataCruncher => "Data Cruncher",
            Badge::CrisisManager => "Crisis Manager",
            Badge::SmartNegotiator => "Smart Negotiator",
            Badge::MasterStrategist => "Master Strategist",
            Badge::Innovator => "Innovator",
        }
    }

    /// Stable scoring key; must never change between releases.
    pub fn task_key(self) -> &'static str {
        match self {
            Badge::DetectiveRookie => "badge:detective-rookie",
            Badge::DataCruncher => "badge:data-cruncher",
            Badge::CrisisManager => "badge:crisis-manager",
            Badge::SmartNegotiator => "badge:smart-negotiator",
            Badge::MasterStrategist => "badge:master-strategist",
            Badge::Innovator => "badge:innovator",
        }
    }
}
