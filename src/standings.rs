//! League-table computation.
//!
//! Replays decided matches in kickoff order into per-team table rows, then
//! ranks by points, goal difference, goals scored and away wins. Rosters are
//! reconciled over the full match set first, so a live match's goals reach
//! player statistics even though only decided matches move the table.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{Match, TableRow, Team};
use crate::normalize::NormalizedKey;
use crate::reconcile::{reconcile, resolve_team, team_index};

/// Points awarded for a win.
const WIN_POINTS: u32 = 3;

/// Points awarded to each side of a draw.
const DRAW_POINTS: u32 = 1;

/// Compute the ranked league table.
///
/// `results` and `fixtures` are whatever split the caller keeps; a match may
/// sit in the wrong array while its status transitions, so the two are
/// unioned (deduplicated by match id, `results` copy winning) before any
/// filtering. Returned teams carry reconciled rosters and fresh table rows.
pub fn compute_standings(teams: &[Team], results: &[Match], fixtures: &[Match]) -> Vec<Team> {
    let combined = union_matches(results, fixtures);
    let mut teams = reconcile(teams, &combined);

    // Table rows are derived from scratch on every pass; any admin override
    // is overwritten here.
    for team in &mut teams {
        team.stats = TableRow::default();
    }

    let index = team_index(&teams);

    let mut decided: Vec<&Match> = combined.iter().filter(|m| m.is_decided()).collect();
    // Form is a rolling window, so replay order matters. Sort by kickoff;
    // undated matches sort first, stably.
    decided.sort_by_key(|m| m.kickoff);

    for m in decided {
        replay(&mut teams, &index, m);
    }

    // Beyond away wins no tie-break is defined; the sort is stable, so a
    // remaining tie keeps the incoming team order.
    teams.sort_by(|a, b| {
        b.stats
            .points
            .cmp(&a.stats.points)
            .then(b.stats.goal_difference.cmp(&a.stats.goal_difference))
            .then(b.stats.goals_scored.cmp(&a.stats.goals_scored))
            .then(b.stats.away_wins.cmp(&a.stats.away_wins))
    });

    teams
}

/// Union of the two match arrays, deduplicated by match id. The first copy
/// seen wins, and `results` is walked first.
pub fn union_matches(results: &[Match], fixtures: &[Match]) -> Vec<Match> {
    let mut seen = HashSet::new();
    let mut combined = Vec::with_capacity(results.len() + fixtures.len());
    for m in results.iter().chain(fixtures.iter()) {
        if seen.insert(m.id) {
            combined.push(m.clone());
        } else {
            debug!(match_id = m.id, "match present in both arrays, keeping first copy");
        }
    }
    combined
}

fn replay(teams: &mut [Team], index: &HashMap<NormalizedKey, usize>, m: &Match) {
    let (Some(score_a), Some(score_b)) = (m.score_a, m.score_b) else {
        return;
    };
    // A decided match against an unknown side still counts for the side we
    // can resolve.
    if let Some(ti) = resolve_team(index, &m.key_a()) {
        apply_result(&mut teams[ti], score_a, score_b, false);
    }
    if let Some(ti) = resolve_team(index, &m.key_b()) {
        apply_result(&mut teams[ti], score_b, score_a, true);
    }
}

fn apply_result(team: &mut Team, scored: u32, conceded: u32, away: bool) {
    let row = &mut team.stats;
    row.played += 1;
    row.goals_scored += scored;
    row.goals_conceded += conceded;
    row.goal_difference = row.goals_scored as i32 - row.goals_conceded as i32;

    let letter = if scored > conceded {
        row.won += 1;
        row.points += WIN_POINTS;
        if away {
            row.away_wins += 1;
        }
        'W'
    } else if scored == conceded {
        row.drawn += 1;
        row.points += DRAW_POINTS;
        'D'
    } else {
        row.lost += 1;
        'L'
    };
    row.push_form(letter);
}
