//! Match history model — statuses, events, lineups.
//!
//! Matches reference their sides by free-text team name, matched by
//! normalized identity rather than foreign key. Events are the atomic unit
//! the engine folds into statistics; they are never summarized or compacted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedKey;

/// Match lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Abandoned,
    Suspended,
    Postponed,
}

impl MatchStatus {
    /// Statuses whose scores count toward the table.
    pub fn is_decided(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Abandoned)
    }
}

/// Kind of a match event.
///
/// Upstream feeds carry more kinds than the engine tracks; anything
/// unrecognized deserializes to `Other` and carries no stat weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Goal,
    Assist,
    YellowCard,
    RedCard,
    Substitution,
    Info,
    #[serde(other)]
    Other,
}

/// A single in-match event, referenced by free-text names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(default)]
    pub minute: Option<u32>,

    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Player name as entered (free text)
    #[serde(default)]
    pub player_name: String,

    /// Authoritative player id, when the editor picked one
    #[serde(default)]
    pub player_id: Option<i64>,

    /// Team name as entered (free text)
    #[serde(default)]
    pub team_name: String,
}

impl MatchEvent {
    pub fn new(kind: EventKind, player_name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            minute: None,
            kind,
            player_name: player_name.into(),
            player_id: None,
            team_name: team_name.into(),
        }
    }

    /// Builder method to set the minute.
    pub fn at_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Builder method to set the player id.
    pub fn with_player_id(mut self, id: i64) -> Self {
        self.player_id = Some(id);
        self
    }
}

/// One side's lineup, by player id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lineup {
    pub starters: Vec<i64>,
    pub subs: Vec<i64>,
}

impl Lineup {
    /// Every listed player id, starters then subs.
    pub fn all_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.starters.iter().chain(self.subs.iter()).copied()
    }
}

/// Player-of-the-match award, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOfTheMatch {
    pub name: String,
    pub team_name: String,
    #[serde(default)]
    pub player_id: Option<i64>,
}

/// A fixture or result in the competition's match history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,

    /// Home side name (free text)
    pub team_a: String,

    /// Away side name (free text)
    pub team_b: String,

    /// Home score; None until decided
    #[serde(default)]
    pub score_a: Option<u32>,

    /// Away score; None until decided
    #[serde(default)]
    pub score_b: Option<u32>,

    pub status: MatchStatus,

    /// Ordering timestamp; may be missing on malformed entries
    #[serde(default)]
    pub kickoff: Option<DateTime<Utc>>,

    #[serde(default)]
    pub events: Vec<MatchEvent>,

    #[serde(default)]
    pub lineup_a: Option<Lineup>,

    #[serde(default)]
    pub lineup_b: Option<Lineup>,

    #[serde(default)]
    pub player_of_the_match: Option<PlayerOfTheMatch>,
}

impl Match {
    /// Create a scheduled match with no score, events or lineups.
    pub fn new(id: i64, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            id,
            team_a: team_a.into(),
            team_b: team_b.into(),
            score_a: None,
            score_b: None,
            status: MatchStatus::Scheduled,
            kickoff: None,
            events: Vec::new(),
            lineup_a: None,
            lineup_b: None,
            player_of_the_match: None,
        }
    }

    /// Builder method to set the score.
    pub fn with_score(mut self, a: u32, b: u32) -> Self {
        self.score_a = Some(a);
        self.score_b = Some(b);
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the kickoff time.
    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }

    /// Builder method to append an event.
    pub fn with_event(mut self, event: MatchEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Builder method to set both lineups.
    pub fn with_lineups(mut self, a: Lineup, b: Lineup) -> Self {
        self.lineup_a = Some(a);
        self.lineup_b = Some(b);
        self
    }

    /// Builder method to set the player of the match.
    pub fn with_player_of_the_match(mut self, potm: PlayerOfTheMatch) -> Self {
        self.player_of_the_match = Some(potm);
        self
    }

    /// Identity key of the home side.
    pub fn key_a(&self) -> NormalizedKey {
        NormalizedKey::new(&self.team_a)
    }

    /// Identity key of the away side.
    pub fn key_b(&self) -> NormalizedKey {
        NormalizedKey::new(&self.team_b)
    }

    /// Whether this match counts toward the table: a final status and both
    /// scores present. Matches missing either score are excluded from
    /// standings, not defaulted to 0-0.
    pub fn is_decided(&self) -> bool {
        self.status.is_decided() && self.score_a.is_some() && self.score_b.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_decided() {
        assert!(MatchStatus::Finished.is_decided());
        assert!(MatchStatus::Abandoned.is_decided());
        assert!(!MatchStatus::Scheduled.is_decided());
        assert!(!MatchStatus::Live.is_decided());
        assert!(!MatchStatus::Suspended.is_decided());
        assert!(!MatchStatus::Postponed.is_decided());
    }

    #[test]
    fn test_match_decided_needs_both_scores() {
        let mut m = Match::new(1, "Green Mamba FC", "Royal Leopards")
            .with_status(MatchStatus::Finished);
        assert!(!m.is_decided());

        m.score_a = Some(2);
        assert!(!m.is_decided());

        m.score_b = Some(1);
        assert!(m.is_decided());
    }

    #[test]
    fn test_live_match_not_decided() {
        let m = Match::new(1, "A", "B")
            .with_status(MatchStatus::Live)
            .with_score(1, 0);
        assert!(!m.is_decided());
    }

    #[test]
    fn test_unknown_event_kind_deserializes_to_other() {
        let json = r#"{"type": "var-review", "player_name": "X", "team_name": "Y"}"#;
        let event: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Other);
    }

    #[test]
    fn test_event_kind_kebab_case() {
        let json = r#"{"type": "yellow-card", "player_name": "X", "team_name": "Y"}"#;
        let event: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::YellowCard);
    }

    #[test]
    fn test_side_identity_keys() {
        let m = Match::new(1, "Green Mamba FC", "royal-leopards");

        assert_eq!(m.key_a(), NormalizedKey::new("green mamba fc"));
        assert_eq!(m.key_b(), NormalizedKey::new("Royal Leopards"));
        assert!(m.key_a().matches(&NormalizedKey::new("GREEN MAMBA FC")));
    }

    #[test]
    fn test_lineup_all_ids() {
        let lineup = Lineup {
            starters: vec![1, 2, 3],
            subs: vec![14, 15],
        };
        let ids: Vec<i64> = lineup.all_ids().collect();
        assert_eq!(ids, vec![1, 2, 3, 14, 15]);
    }

    #[test]
    fn test_match_builder() {
        let kickoff = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let m = Match::new(7, "Mbabane Swallows FC", "Young Buffaloes")
            .with_status(MatchStatus::Finished)
            .with_score(2, 1)
            .with_kickoff(kickoff)
            .with_event(MatchEvent::new(EventKind::Goal, "S. Gamedze", "Mbabane Swallows FC").at_minute(12));

        assert!(m.is_decided());
        assert_eq!(m.kickoff, Some(kickoff));
        assert_eq!(m.events.len(), 1);
        assert_eq!(m.events[0].minute, Some(12));
    }

    #[test]
    fn test_missing_optional_fields_deserialize_to_defaults() {
        let json = r#"{"id": 1, "team_a": "A", "team_b": "B", "status": "scheduled"}"#;
        let m: Match = serde_json::from_str(json).unwrap();

        assert!(m.score_a.is_none());
        assert!(m.kickoff.is_none());
        assert!(m.events.is_empty());
        assert!(m.lineup_a.is_none());
        assert!(m.player_of_the_match.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let m = Match::new(3, "A", "B")
            .with_status(MatchStatus::Abandoned)
            .with_score(1, 1);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);
    }
}
