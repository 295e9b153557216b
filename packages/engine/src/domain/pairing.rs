//! Pairing fairness scoring and lineup construction for organizers.
//!
//! Runs before a round starts and is independent of the match-state machine.
//! Nothing here returns an error: degenerate player pools degrade to
//! shorter/empty output, and validation findings come back as structured
//! warning/error lists for the caller to act on.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::rules::{MatchFormat, FAIRNESS_PENALTY_PER_STROKE, FAIRNESS_WARN_THRESHOLD};
use crate::domain::state::Team;

/// A player as the pairing engine sees one: identity plus handicap index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// Signed decimal; negative for plus-handicap players.
    pub handicap_index: f64,
}

/// Player assignments for one proposed match, by id per side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedMatch {
    pub team_a: Vec<Uuid>,
    pub team_b: Vec<Uuid>,
}

/// A full proposed lineup: the format plus every match in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingSession {
    pub format: MatchFormat,
    pub matches: Vec<ProposedMatch>,
}

/// Hard pairing problems; any of these makes the session invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PairingError {
    #[error("match {match_no}: {side} has {found} players, format requires {required}")]
    TeamSizeMismatch {
        /// 1-based match position within the session.
        match_no: usize,
        side: Team,
        found: usize,
        required: usize,
    },
}

/// Soft pairing findings; surfaced to the organizer but never blocking.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum PairingWarning {
    #[error("{name} appears in more than one match for {side}")]
    DuplicatePlayer { name: String, side: Team },
    #[error("fairness score {score:.1} is below {threshold}")]
    LowFairness { score: f64, threshold: f64 },
}

/// Validation report for a proposed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingValidation {
    /// True exactly when `errors` is empty; warnings never block.
    pub is_valid: bool,
    pub warnings: Vec<PairingWarning>,
    pub errors: Vec<PairingError>,
}

/// One slot in a snake draft order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    /// 0-based team index.
    pub team: usize,
    /// 1-based sequential pick counter, independent of team.
    pub pick: usize,
}

/// One suggested match: full player objects per side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPairing {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

/// How balanced a set of proposed matches is, 0..=100 (100 = perfectly even).
///
/// Per match, each side's assigned players average their handicap indices
/// (0 when a side has nobody assigned). Each stroke of average gap across
/// the session costs 10 points; a 10-stroke gap floors the score at 0. An
/// empty match list is vacuously fair: exactly 100.
pub fn calculate_fairness_score(
    matches: &[ProposedMatch],
    team_a_pool: &[Player],
    team_b_pool: &[Player],
) -> f64 {
    if matches.is_empty() {
        return 100.0;
    }

    let total_diff: f64 = matches
        .iter()
        .map(|m| {
            let a_avg = side_average(&m.team_a, team_a_pool);
            let b_avg = side_average(&m.team_b, team_b_pool);
            (a_avg - b_avg).abs()
        })
        .sum();
    let avg_diff = total_diff / matches.len() as f64;

    (100.0 - avg_diff * FAIRNESS_PENALTY_PER_STROKE).max(0.0)
}

/// Average handicap index of the assigned players found in the pool; 0 when
/// none resolve.
fn side_average(ids: &[Uuid], pool: &[Player]) -> f64 {
    let indices: Vec<f64> = ids
        .iter()
        .filter_map(|id| pool.iter().find(|p| p.id == *id))
        .map(|p| p.handicap_index)
        .collect();
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().sum::<f64>() / indices.len() as f64
}

/// Validate a proposed session against its format and player pools.
///
/// Errors: a side whose player count does not match the format. Warnings: a
/// player appearing in more than one match on the same side (every later
/// occurrence is reported, naming the player), and a session fairness score
/// below [`FAIRNESS_WARN_THRESHOLD`].
pub fn validate_pairings(
    session: &PairingSession,
    team_a_pool: &[Player],
    team_b_pool: &[Player],
) -> PairingValidation {
    let required = session.format.players_per_team();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_a: HashSet<Uuid> = HashSet::new();
    let mut seen_b: HashSet<Uuid> = HashSet::new();

    for (idx, m) in session.matches.iter().enumerate() {
        let match_no = idx + 1;
        check_side(
            match_no,
            Team::A,
            &m.team_a,
            team_a_pool,
            required,
            &mut seen_a,
            &mut errors,
            &mut warnings,
        );
        check_side(
            match_no,
            Team::B,
            &m.team_b,
            team_b_pool,
            required,
            &mut seen_b,
            &mut errors,
            &mut warnings,
        );
    }

    let score = calculate_fairness_score(&session.matches, team_a_pool, team_b_pool);
    if score < FAIRNESS_WARN_THRESHOLD {
        warnings.push(PairingWarning::LowFairness {
            score,
            threshold: FAIRNESS_WARN_THRESHOLD,
        });
    }

    PairingValidation {
        is_valid: errors.is_empty(),
        warnings,
        errors,
    }
}

#[allow(clippy::too_many_arguments)]
fn check_side(
    match_no: usize,
    side: Team,
    ids: &[Uuid],
    pool: &[Player],
    required: usize,
    seen: &mut HashSet<Uuid>,
    errors: &mut Vec<PairingError>,
    warnings: &mut Vec<PairingWarning>,
) {
    if ids.len() != required {
        errors.push(PairingError::TeamSizeMismatch {
            match_no,
            side,
            found: ids.len(),
            required,
        });
    }
    for id in ids {
        if !seen.insert(*id) {
            let name = pool
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.to_string());
            warnings.push(PairingWarning::DuplicatePlayer { name, side });
        }
    }
}

/// Standard snake draft order: even rounds pick teams 0..N in order, odd
/// rounds reversed, until `total_picks` entries exist. Zero teams yields an
/// empty order.
pub fn snake_draft_order(total_picks: usize, teams: usize) -> Vec<DraftPick> {
    if teams == 0 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(total_picks);
    let mut round = 0usize;
    'rounds: loop {
        let forward = round % 2 == 0;
        for slot in 0..teams {
            if order.len() == total_picks {
                break 'rounds;
            }
            let team = if forward { slot } else { teams - 1 - slot };
            order.push(DraftPick {
                team,
                pick: order.len() + 1,
            });
        }
        round += 1;
    }
    order
}

/// Suggest singles-style pairings: each side sorted ascending by handicap
/// index, the i-th ranked players paired together.
///
/// A side with fewer players than `match_count` leaves its slot empty for
/// the excess matches. Team-of-two pairings are a caller-level composition
/// of these suggestions.
pub fn suggest_pairings(
    team_a: &[Player],
    team_b: &[Player],
    match_count: usize,
) -> Vec<SuggestedPairing> {
    let a_ranked = sorted_by_handicap(team_a);
    let b_ranked = sorted_by_handicap(team_b);

    (0..match_count)
        .map(|i| SuggestedPairing {
            team_a: a_ranked.get(i).cloned().into_iter().collect(),
            team_b: b_ranked.get(i).cloned().into_iter().collect(),
        })
        .collect()
}

fn sorted_by_handicap(pool: &[Player]) -> Vec<Player> {
    let mut ranked = pool.to_vec();
    ranked.sort_by(|x, y| {
        x.handicap_index
            .partial_cmp(&y.handicap_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
