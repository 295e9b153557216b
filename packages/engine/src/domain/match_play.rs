//! Hole-winner determination and match-state derivation.
//!
//! A match is a strictly append-only sequence of [`HoleResult`]; state and
//! finalization are always pure derivations of that sequence, never
//! separately mutated fields. That is the invariant that keeps state correct
//! under undo/redo: correct a hole, hand the corrected history back in, and
//! every derived value follows.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{MatchFormat, HOLES};
use crate::domain::stableford::{stableford_points, StablefordTable};
use crate::domain::state::{
    HoleResult, HoleWinner, MatchFinalResult, MatchOutcome, MatchState, Momentum, Team,
};

/// Lower net score wins the hole; equal nets halve it.
pub fn determine_hole_winner(team_a_net: i32, team_b_net: i32) -> HoleWinner {
    match team_a_net.cmp(&team_b_net) {
        std::cmp::Ordering::Less => HoleWinner::TeamA,
        std::cmp::Ordering::Greater => HoleWinner::TeamB,
        std::cmp::Ordering::Equal => HoleWinner::Halved,
    }
}

/// One player's gross score and strokes received on a hole.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerHoleScore {
    pub gross: i32,
    pub strokes: i32,
}

impl PlayerHoleScore {
    pub fn net(&self) -> i32 {
        self.gross - self.strokes
    }
}

/// Best-ball hole winner: each side counts only its lowest net.
///
/// A side with no recorded scores halves the hole (defensive default; the
/// engine never fails on incomplete input).
pub fn fourball_hole_winner(team_a: &[PlayerHoleScore], team_b: &[PlayerHoleScore]) -> HoleWinner {
    let (Some(a_best), Some(b_best)) = (best_net(team_a), best_net(team_b)) else {
        return HoleWinner::Halved;
    };
    determine_hole_winner(a_best, b_best)
}

fn best_net(side: &[PlayerHoleScore]) -> Option<i32> {
    side.iter().map(PlayerHoleScore::net).min()
}

/// Hole winner under the active format.
///
/// Stroke-play formats count each side's best net (for singles that is the
/// lone player's net); Stableford-scored best-ball counts each side's best
/// point total instead, where MORE points win the hole.
pub fn hole_winner_for_format(
    format: MatchFormat,
    par: i32,
    table: &StablefordTable,
    team_a: &[PlayerHoleScore],
    team_b: &[PlayerHoleScore],
) -> HoleWinner {
    match format {
        MatchFormat::Singles | MatchFormat::Fourball | MatchFormat::Foursomes => {
            fourball_hole_winner(team_a, team_b)
        }
        MatchFormat::BestBallStableford => {
            let a_points = best_side_points(team_a, par, table);
            let b_points = best_side_points(team_b, par, table);
            match a_points.cmp(&b_points) {
                std::cmp::Ordering::Greater => HoleWinner::TeamA,
                std::cmp::Ordering::Less => HoleWinner::TeamB,
                std::cmp::Ordering::Equal => HoleWinner::Halved,
            }
        }
    }
}

/// Each player's points computed independently from their own net; a side
/// with no recorded scores totals zero.
fn best_side_points(side: &[PlayerHoleScore], par: i32, table: &StablefordTable) -> i32 {
    side.iter()
        .map(|p| stableford_points(p.gross, par, p.strokes, table))
        .max()
        .unwrap_or(0)
}

/// Running match score and the first closeout point, if any.
///
/// `closeout` is `(match_score, holes_remaining)` at the first hole where the
/// leader's margin exceeded the holes remaining. That snapshot is what N&M
/// notation reports, even if (out-of-contract) holes were recorded after it.
fn walk_history(results: &[HoleResult]) -> (i32, Option<(i32, u8)>) {
    let mut score = 0i32;
    let mut closeout = None;
    for (idx, result) in results.iter().enumerate() {
        match result.winner {
            HoleWinner::TeamA => score += 1,
            HoleWinner::TeamB => score -= 1,
            HoleWinner::Halved => {}
        }
        let remaining = HOLES.saturating_sub(idx + 1) as u8;
        if closeout.is_none() && score.abs() > i32::from(remaining) {
            closeout = Some((score, remaining));
        }
    }
    (score, closeout)
}

fn leader(match_score: i32) -> Team {
    if match_score > 0 {
        Team::A
    } else {
        Team::B
    }
}

/// Derive the full match state from the ordered hole history.
///
/// Pure: calling this twice on the same history yields identical output.
/// Dormie (margin equals holes remaining, at least one left) and closed out
/// (margin exceeds holes remaining) are mutually exclusive by construction.
pub fn calculate_match_state(results: &[HoleResult]) -> MatchState {
    let (match_score, closeout) = walk_history(results);

    let holes_played = results.len().min(HOLES) as u8;
    let holes_remaining = HOLES as u8 - holes_played;
    let margin = match_score.abs();

    let is_dormie = margin > 0 && margin == i32::from(holes_remaining) && holes_remaining > 0;
    let is_closed_out = margin > i32::from(holes_remaining);
    let can_continue = !is_closed_out && holes_remaining > 0;

    let status_text = status_text(match_score, holes_played, is_dormie, closeout);

    MatchState {
        match_score,
        holes_played,
        holes_remaining,
        is_dormie,
        is_closed_out,
        can_continue,
        status_text,
    }
}

fn status_text(
    match_score: i32,
    holes_played: u8,
    is_dormie: bool,
    closeout: Option<(i32, u8)>,
) -> String {
    if holes_played == 0 {
        return "Not Started".to_string();
    }

    // Closed out with holes to spare: conventional N&M result.
    if let Some((score_at_closeout, remaining)) = closeout {
        if remaining > 0 {
            return format!(
                "{} wins {}&{}",
                leader(score_at_closeout),
                score_at_closeout.abs(),
                remaining
            );
        }
    }

    if usize::from(holes_played) == HOLES {
        return if match_score == 0 {
            "Halved".to_string()
        } else {
            format!("{} wins {} UP", leader(match_score), match_score.abs())
        };
    }

    if is_dormie {
        return "Dormie".to_string();
    }

    if match_score == 0 {
        return "All Square".to_string();
    }

    format!("{} {} UP", leader(match_score), match_score.abs())
}

/// Finalize a match from its hole history.
///
/// The first closeout decides the match at that point's margin and holes
/// remaining (N&M). A full 18 without an earlier closeout is decided by the
/// final score's sign (halved at zero). Anything shorter without a closeout
/// is `NotFinished` with zero margin and zero holes remaining.
pub fn finalize_match(results: &[HoleResult]) -> MatchFinalResult {
    let (match_score, closeout) = walk_history(results);

    if let Some((score_at_closeout, remaining)) = closeout {
        let outcome = match leader(score_at_closeout) {
            Team::A => MatchOutcome::TeamAWin,
            Team::B => MatchOutcome::TeamBWin,
        };
        return MatchFinalResult {
            outcome,
            margin: score_at_closeout.unsigned_abs() as u8,
            holes_remaining: remaining,
        };
    }

    if results.len() >= HOLES {
        let outcome = match match_score {
            0 => MatchOutcome::Halved,
            s if s > 0 => MatchOutcome::TeamAWin,
            _ => MatchOutcome::TeamBWin,
        };
        return MatchFinalResult {
            outcome,
            margin: match_score.unsigned_abs() as u8,
            holes_remaining: 0,
        };
    }

    MatchFinalResult {
        outcome: MatchOutcome::NotFinished,
        margin: 0,
        holes_remaining: 0,
    }
}

/// Tally of outcomes over the trailing `last_n` recorded holes (or fewer if
/// the match is younger than that).
pub fn momentum(results: &[HoleResult], last_n: usize) -> Momentum {
    let start = results.len().saturating_sub(last_n);
    results[start..]
        .iter()
        .fold(Momentum::default(), |mut m, result| {
            match result.winner {
                HoleWinner::TeamA => m.team_a_wins += 1,
                HoleWinner::TeamB => m.team_b_wins += 1,
                HoleWinner::Halved => m.halves += 1,
            }
            m
        })
}
