//! Cross-team top-scorer leaderboard.
//!
//! Derived from reconciled rosters: every player with at least one goal or
//! player-of-the-match award gets a record, ranked by a weighted composite
//! score. Players with neither are excluded outright, not zero-ranked.

use serde::{Deserialize, Serialize};

use crate::models::{Match, Team};
use crate::reconcile::reconcile;
use crate::standings::union_matches;

/// Composite-score weight of a goal.
const GOAL_WEIGHT: u32 = 10;

/// Composite-score weight of a player-of-the-match award.
const POTM_WEIGHT: u32 = 25;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRecord {
    pub name: String,
    pub team: String,
    pub goals: u32,
    pub potm_wins: u32,
    pub composite_score: u32,
}

/// Build the leaderboard from the full match set.
///
/// Runs the reconciler over the union of `fixtures` and `results` first, so
/// the leaderboard reflects every recorded event regardless of which array a
/// match currently lives in. Sorted descending by composite score; the sort
/// is stable, so equal scores keep roster order.
pub fn top_scorers(teams: &[Team], fixtures: &[Match], results: &[Match]) -> Vec<ScorerRecord> {
    let combined = union_matches(results, fixtures);
    let teams = reconcile(teams, &combined);

    let mut records: Vec<ScorerRecord> = Vec::new();
    for team in &teams {
        for player in &team.players {
            if player.stats.goals == 0 && player.stats.potm_wins == 0 {
                continue;
            }
            records.push(ScorerRecord {
                name: player.name.clone(),
                team: team.name.clone(),
                goals: player.stats.goals,
                potm_wins: player.stats.potm_wins,
                composite_score: player.stats.goals * GOAL_WEIGHT
                    + player.stats.potm_wins * POTM_WEIGHT,
            });
        }
    }
    records.sort_by(|a, b| b.composite_score.cmp(&a.composite_score));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EventKind, MatchEvent, MatchStatus, Player, PlayerOfTheMatch, PlayerStats, Position,
    };
    use pretty_assertions::assert_eq;

    fn teams() -> Vec<Team> {
        vec![
            Team::new(1, "Green Mamba FC").with_players(vec![
                Player::new(10, "Mlotsa", Position::Goalkeeper, 1),
                Player::new(12, "Sandile Gamedze", Position::Forward, 9),
            ]),
            Team::new(2, "Royal Leopards").with_players(vec![Player::new(
                20,
                "Mxo Nkambule",
                Position::Midfielder,
                8,
            )]),
        ]
    }

    #[test]
    fn test_composite_score_and_ranking() {
        let matches = vec![
            Match::new(1, "Green Mamba FC", "Royal Leopards")
                .with_status(MatchStatus::Finished)
                .with_score(2, 1)
                .with_event(MatchEvent::new(EventKind::Goal, "Sandile Gamedze", "Green Mamba FC"))
                .with_event(MatchEvent::new(EventKind::Goal, "Sandile Gamedze", "Green Mamba FC"))
                .with_event(MatchEvent::new(EventKind::Goal, "Mxo Nkambule", "Royal Leopards"))
                .with_player_of_the_match(PlayerOfTheMatch {
                    name: "Mxo Nkambule".to_string(),
                    team_name: "Royal Leopards".to_string(),
                    player_id: None,
                }),
        ];

        let records = top_scorers(&teams(), &[], &matches);

        // Nkambule: 1 goal + 1 award = 35; Gamedze: 2 goals = 20.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Mxo Nkambule");
        assert_eq!(records[0].composite_score, 35);
        assert_eq!(records[1].name, "Sandile Gamedze");
        assert_eq!(records[1].composite_score, 20);
    }

    #[test]
    fn test_zero_contributors_excluded() {
        let matches = vec![Match::new(1, "Green Mamba FC", "Royal Leopards")
            .with_status(MatchStatus::Finished)
            .with_score(1, 0)
            .with_event(MatchEvent::new(EventKind::Goal, "Sandile Gamedze", "Green Mamba FC"))];

        let records = top_scorers(&teams(), &[], &matches);

        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.name != "Mlotsa"));
    }

    #[test]
    fn test_baseline_goals_rank_without_events() {
        let mut teams = teams();
        teams[0].players[1].stats = PlayerStats {
            goals: 5,
            ..Default::default()
        };

        let records = top_scorers(&teams, &[], &[]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Sandile Gamedze");
        assert_eq!(records[0].composite_score, 50);
    }

    #[test]
    fn test_counts_fixtures_and_results_union_once() {
        let m = Match::new(1, "Green Mamba FC", "Royal Leopards")
            .with_status(MatchStatus::Live)
            .with_event(MatchEvent::new(EventKind::Goal, "Sandile Gamedze", "Green Mamba FC"));

        let records = top_scorers(&teams(), std::slice::from_ref(&m), std::slice::from_ref(&m));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].goals, 1);
    }

    #[test]
    fn test_synthesized_players_appear() {
        let matches = vec![Match::new(1, "Green Mamba FC", "Royal Leopards")
            .with_status(MatchStatus::Live)
            .with_event(MatchEvent::new(EventKind::Goal, "J. Dlamini", "Green Mamba FC"))];

        let records = top_scorers(&teams(), &[], &matches);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "J. Dlamini");
        assert_eq!(records[0].team, "Green Mamba FC");
    }
}
