//! Player model and per-player career statistics.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Playing position. Synthesized players default to Midfielder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    #[default]
    Midfielder,
    Forward,
}

impl Position {
    /// Positions credited with a clean sheet when their side keeps a
    /// shutout. Every listed goalkeeper and defender gets the credit, not
    /// only the keeper.
    pub fn defends(&self) -> bool {
        matches!(self, Position::Goalkeeper | Position::Defender)
    }
}

/// Career statistics.
///
/// Stored values are the baseline — they may contain manual admin
/// corrections. Reconciliation adds event-derived deltas on top of this
/// baseline; it never resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub clean_sheets: u32,
    pub potm_wins: u32,
}

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Identity — registered by admin tooling or synthesized on first sight
    pub id: PlayerId,

    /// Display name (free text, authoritative for matching)
    pub name: String,

    #[serde(default)]
    pub position: Position,

    /// Shirt number (0 for synthesized players)
    #[serde(default)]
    pub number: u32,

    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Create a registered player with zeroed stats.
    pub fn new(id: i64, name: impl Into<String>, position: Position, number: u32) -> Self {
        Self {
            id: PlayerId::Registered(id),
            name: name.into(),
            position,
            number,
            stats: PlayerStats::default(),
        }
    }

    /// Create a synthesized roster entry for a name seen only in event data.
    pub fn synthesize(name: &str) -> Self {
        Self {
            id: PlayerId::synthesize(name),
            name: name.to_string(),
            position: Position::default(),
            number: 0,
            stats: PlayerStats::default(),
        }
    }

    /// Builder method to set baseline stats.
    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }
}
