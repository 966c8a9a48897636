//! Player-statistic reconciliation.
//!
//! Replays the full match history over team rosters so that every player's
//! statistics equal their stored baseline plus the sum of all event-derived
//! deltas. The pass only accumulates counts — it is idempotent over a fixed
//! input and independent of match order.
//!
//! Unresolvable team or player references are skipped, never fatal: the
//! match history is uncontrolled free text, and aborting on a ghost name
//! would lose the rest of the recompute. Data quality is surfaced by the
//! `audit` module instead.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{EventKind, Lineup, Match, MatchStatus, Player, Team};
use crate::normalize::NormalizedKey;

/// Reconcile rosters against the match history.
///
/// Returns updated copies of `teams`. Players referenced by events but
/// missing from their team's roster are synthesized (deterministic id,
/// Midfielder, shirt 0) and appended. The input is never mutated.
pub fn reconcile(teams: &[Team], matches: &[Match]) -> Vec<Team> {
    let mut teams: Vec<Team> = teams.to_vec();
    let index = team_index(&teams);

    for m in matches {
        apply_player_of_the_match(&mut teams, &index, m);
        apply_events(&mut teams, &index, m);
        apply_lineups(&mut teams, &index, m);
    }

    teams
}

/// Index teams by normalized name. Teams whose name normalizes to the empty
/// key are unmatchable and left out.
pub(crate) fn team_index(teams: &[Team]) -> HashMap<NormalizedKey, usize> {
    let mut index = HashMap::new();
    for (i, team) in teams.iter().enumerate() {
        let key = team.key();
        if !key.is_empty() {
            index.insert(key, i);
        }
    }
    index
}

/// Resolve a team identity key to an index, or None. Empty keys carry no
/// identity and never resolve.
pub(crate) fn resolve_team(index: &HashMap<NormalizedKey, usize>, key: &NormalizedKey) -> Option<usize> {
    if key.is_empty() {
        return None;
    }
    index.get(key).copied()
}

/// Locate a player within a roster: by id first, then by normalized name.
fn player_index(team: &Team, id: Option<i64>, name: &str) -> Option<usize> {
    if let Some(id) = id {
        if let Some(i) = team.players.iter().position(|p| p.id.value() == id) {
            return Some(i);
        }
    }
    let key = NormalizedKey::new(name);
    team.players
        .iter()
        .position(|p| NormalizedKey::new(&p.name).matches(&key))
}

fn apply_player_of_the_match(
    teams: &mut [Team],
    index: &HashMap<NormalizedKey, usize>,
    m: &Match,
) {
    let Some(potm) = &m.player_of_the_match else {
        return;
    };
    let Some(ti) = resolve_team(index, &NormalizedKey::new(&potm.team_name)) else {
        debug!(
            match_id = m.id,
            team = %potm.team_name,
            "player of the match references unknown team, skipping"
        );
        return;
    };
    let team = &mut teams[ti];
    match player_index(team, potm.player_id, &potm.name) {
        Some(pi) => team.players[pi].stats.potm_wins += 1,
        // An award alone never synthesizes a roster entry.
        None => debug!(
            match_id = m.id,
            player = %potm.name,
            team = %team.name,
            "player of the match not on roster, skipping"
        ),
    }
}

fn apply_events(teams: &mut [Team], index: &HashMap<NormalizedKey, usize>, m: &Match) {
    for event in &m.events {
        // Synthesis keys off the name, so a name with no usable key would be
        // re-synthesized on every run. Skip it along with blank references.
        if NormalizedKey::new(&event.player_name).is_empty()
            || event.team_name.trim().is_empty()
        {
            continue;
        }
        let Some(ti) = resolve_team(index, &NormalizedKey::new(&event.team_name)) else {
            debug!(
                match_id = m.id,
                team = %event.team_name,
                "event references unknown team, skipping"
            );
            continue;
        };
        let team = &mut teams[ti];
        let pi = match player_index(team, event.player_id, &event.player_name) {
            Some(pi) => pi,
            None => {
                debug!(
                    match_id = m.id,
                    player = %event.player_name,
                    team = %team.name,
                    "synthesizing roster entry"
                );
                team.players.push(Player::synthesize(&event.player_name));
                team.players.len() - 1
            }
        };
        let stats = &mut team.players[pi].stats;
        match event.kind {
            EventKind::Goal => stats.goals += 1,
            EventKind::Assist => stats.assists += 1,
            EventKind::YellowCard => stats.yellow_cards += 1,
            EventKind::RedCard => stats.red_cards += 1,
            // Substitutions, info entries and unknown kinds carry no stat
            // weight here.
            EventKind::Substitution | EventKind::Info | EventKind::Other => {}
        }
    }
}

fn apply_lineups(teams: &mut [Team], index: &HashMap<NormalizedKey, usize>, m: &Match) {
    // A clean sheet requires a finished match and a shutout of the opponent.
    let shutout_a = m.status == MatchStatus::Finished && m.score_b == Some(0);
    let shutout_b = m.status == MatchStatus::Finished && m.score_a == Some(0);
    apply_side(teams, index, m, &m.team_a, m.key_a(), m.lineup_a.as_ref(), shutout_a);
    apply_side(teams, index, m, &m.team_b, m.key_b(), m.lineup_b.as_ref(), shutout_b);
}

#[allow(clippy::too_many_arguments)]
fn apply_side(
    teams: &mut [Team],
    index: &HashMap<NormalizedKey, usize>,
    m: &Match,
    team_name: &str,
    key: NormalizedKey,
    lineup: Option<&Lineup>,
    shutout: bool,
) {
    let Some(lineup) = lineup else {
        return;
    };
    let Some(ti) = resolve_team(index, &key) else {
        debug!(
            match_id = m.id,
            team = %team_name,
            "lineup references unknown team, skipping side"
        );
        return;
    };
    let team = &mut teams[ti];
    for id in lineup.all_ids() {
        let Some(pi) = team.players.iter().position(|p| p.id.value() == id) else {
            debug!(
                match_id = m.id,
                player_id = id,
                team = %team.name,
                "lineup id not on roster, skipping"
            );
            continue;
        };
        let player = &mut team.players[pi];
        player.stats.appearances += 1;
        if shutout && player.position.defends() {
            player.stats.clean_sheets += 1;
        }
    }
}
