//! Roster auditing — ghost names and colliding identities.
//!
//! The reconciler drops unresolvable references silently and merges anything
//! that shares a normalized key; this pass is where those policies become
//! visible. It reports synthesized ("ghost") roster entries — usually a
//! misspelt name in event data — and players on one team whose names
//! collapse to a single key, which the engine cannot tell apart.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Team;
use crate::normalize::NormalizedKey;

/// A roster entry minted by the reconciler rather than admin tooling.
#[derive(Debug, Clone, Serialize)]
pub struct GhostPlayer {
    pub team: String,
    pub name: String,
    pub id: i64,
    pub goals: u32,
    pub appearances: u32,
}

/// Distinct roster entries on one team sharing a normalized key.
#[derive(Debug, Clone, Serialize)]
pub struct NameCollision {
    pub team: String,
    pub key: String,
    pub names: Vec<String>,
}

/// Data-quality findings over a set of rosters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub ghosts: Vec<GhostPlayer>,
    pub collisions: Vec<NameCollision>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.ghosts.is_empty() && self.collisions.is_empty()
    }
}

/// Audit rosters, typically after a reconciliation pass.
pub fn roster_report(teams: &[Team]) -> AuditReport {
    let mut report = AuditReport::default();

    for team in teams {
        for player in &team.players {
            if player.id.is_synthesized() {
                report.ghosts.push(GhostPlayer {
                    team: team.name.clone(),
                    name: player.name.clone(),
                    id: player.id.value(),
                    goals: player.stats.goals,
                    appearances: player.stats.appearances,
                });
            }
        }

        let mut by_key: HashMap<NormalizedKey, Vec<&str>> = HashMap::new();
        for player in &team.players {
            let key = NormalizedKey::new(&player.name);
            if !key.is_empty() {
                by_key.entry(key).or_default().push(player.name.as_str());
            }
        }
        let mut collisions: Vec<NameCollision> = by_key
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(key, names)| NameCollision {
                team: team.name.clone(),
                key: key.as_str().to_string(),
                names: names.into_iter().map(str::to_string).collect(),
            })
            .collect();
        collisions.sort_by(|a, b| a.key.cmp(&b.key));
        report.collisions.extend(collisions);
    }

    report
}
