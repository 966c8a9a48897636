//! Team model and the derived league-table row.

use serde::{Deserialize, Serialize};

use super::Player;
use crate::normalize::NormalizedKey;

/// Number of recent results kept in the form guide.
pub const FORM_WINDOW: usize = 5;

/// Derived league-table row.
///
/// Reset to zero and recomputed on every standings pass; an admin override
/// survives only until the next recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i32,
    pub points: u32,

    /// Away wins, used as the last defined tie-break.
    pub away_wins: u32,

    /// Recent results, most recent first, e.g. "D W L".
    pub form: String,
}

impl TableRow {
    /// Prepend a result letter ('W'/'D'/'L'), keeping the five most recent.
    pub fn push_form(&mut self, letter: char) {
        let mut letters: Vec<String> = vec![letter.to_string()];
        letters.extend(self.form.split_whitespace().map(str::to_string));
        letters.truncate(FORM_WINDOW);
        self.form = letters.join(" ");
    }
}

/// A competition team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Stable identifier assigned by admin tooling
    pub id: i64,

    /// Display name (free text, authoritative for matching)
    pub name: String,

    #[serde(default)]
    pub players: Vec<Player>,

    /// Derived table row
    #[serde(default)]
    pub stats: TableRow,
}

impl Team {
    /// Create a team with an empty roster.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
            stats: TableRow::default(),
        }
    }

    /// Builder method to set the roster.
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Identity key for name matching.
    pub fn key(&self) -> NormalizedKey {
        NormalizedKey::new(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_form_prepends() {
        let mut row = TableRow::default();
        row.push_form('W');
        row.push_form('D');

        assert_eq!(row.form, "D W");
    }

    #[test]
    fn test_push_form_caps_at_window() {
        let mut row = TableRow::default();
        for letter in ['W', 'W', 'L', 'D', 'W', 'L', 'D'] {
            row.push_form(letter);
        }

        assert_eq!(row.form, "D L W D L");
    }

    #[test]
    fn test_team_key() {
        let team = Team::new(1, "Mbabane Swallows FC");
        assert_eq!(team.key(), NormalizedKey::new("mbabane-swallows fc"));
    }

    #[test]
    fn test_missing_optional_fields_deserialize_to_defaults() {
        let json = r#"{"id": 5, "name": "Green Mamba FC"}"#;
        let team: Team = serde_json::from_str(json).unwrap();

        assert!(team.players.is_empty());
        assert_eq!(team.stats, TableRow::default());
    }

    #[test]
    fn test_serialization_round_trip() {
        let team = Team::new(2, "Royal Leopards");
        let json = serde_json::to_string(&team).unwrap();
        let parsed: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(team, parsed);
    }
}
