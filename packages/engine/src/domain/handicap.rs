//! Handicap allocation: course handicap, per-hole strokes, and net-score
//! breakdowns.
//!
//! Failure semantics: nothing here returns an error. Malformed structural
//! input (a hole-handicap table that is not a permutation of 1..=18, or
//! wrong-length score arrays) degrades to an all-zero default, logged at
//! `warn` level. Upstream data integrity is the caller's responsibility.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::rules::{HOLES, SLOPE_BASE};
use crate::domain::state::CourseDifficulty;

/// Course handicap from a handicap index and a tee-set's difficulty.
///
/// `round(index × slope/113 + (rating − par))`, rounding half away from zero
/// (`f64::round` semantics). No bounds clamping: plus-handicap players on
/// easy courses legitimately produce negative results.
pub fn course_handicap(handicap_index: f64, slope_rating: u16, course_rating: f64, par: u8) -> i32 {
    let raw =
        handicap_index * (f64::from(slope_rating) / SLOPE_BASE) + (course_rating - f64::from(par));
    raw.round() as i32
}

impl CourseDifficulty {
    /// [`course_handicap`] against this tee-set.
    pub fn course_handicap(&self, handicap_index: f64) -> i32 {
        course_handicap(handicap_index, self.slope_rating, self.course_rating, self.par)
    }
}

/// Per-hole strokes received for a course handicap.
///
/// Every hole gets `course_handicap / 18` (truncating division); the
/// `|course_handicap % 18|` hardest holes (table value 1 first) get one more
/// stroke carrying the sign of the course handicap. Both `/` and `%` are
/// truncating, so a −3 handicap takes one stroke off each of the 3 hardest
/// holes rather than wrapping. The result always sums to `course_handicap`
/// for a valid table.
pub fn allocate_strokes(course_handicap: i32, hole_handicap_table: &[u8]) -> [i32; HOLES] {
    if !is_valid_handicap_table(hole_handicap_table) {
        warn!(
            len = hole_handicap_table.len(),
            "hole handicap table is not a permutation of 1..=18; allocating zero strokes"
        );
        return [0; HOLES];
    }

    let base = course_handicap / HOLES as i32;
    let extra = course_handicap % HOLES as i32;
    let sign = course_handicap.signum();

    let mut strokes = [base; HOLES];
    for (hole, &rank) in hole_handicap_table.iter().enumerate() {
        if i32::from(rank) <= extra.abs() {
            strokes[hole] += sign;
        }
    }
    strokes
}

/// A valid table is exactly 18 entries, each of 1..=18 exactly once.
fn is_valid_handicap_table(table: &[u8]) -> bool {
    if table.len() != HOLES {
        return false;
    }
    let mut seen = [false; HOLES];
    for &rank in table {
        if !(1..=HOLES as u8).contains(&rank) {
            return false;
        }
        let idx = usize::from(rank) - 1;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

/// Lowest net score (gross − strokes, elementwise) across a group.
///
/// Used for 2-or-4-player best-ball formats. Empty or mismatched input
/// degrades to 0.
pub fn best_ball_net_score(scores: &[i32], strokes: &[i32]) -> i32 {
    if scores.is_empty() || scores.len() != strokes.len() {
        warn!(
            scores = scores.len(),
            strokes = strokes.len(),
            "best-ball input empty or mismatched; returning 0"
        );
        return 0;
    }
    scores
        .iter()
        .zip(strokes)
        .map(|(gross, s)| gross - s)
        .min()
        .unwrap_or(0)
}

/// Net-score sums over the named hole ranges of a full round.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub front9: i32,
    pub back9: i32,
    pub last6: i32,
    pub last3: i32,
    pub last1: i32,
    pub total: i32,
}

/// Net sums over front nine, back nine, and the closing stretches.
///
/// Both arrays must cover all 18 holes; anything else returns all zeros
/// (same defensive-default policy as [`allocate_strokes`]).
pub fn scoring_breakdown(hole_scores: &[i32], strokes: &[i32]) -> ScoringBreakdown {
    if hole_scores.len() != HOLES || strokes.len() != HOLES {
        warn!(
            scores = hole_scores.len(),
            strokes = strokes.len(),
            "scoring breakdown requires 18 scores and 18 strokes; returning zeros"
        );
        return ScoringBreakdown::default();
    }

    let net: Vec<i32> = hole_scores
        .iter()
        .zip(strokes)
        .map(|(gross, s)| gross - s)
        .collect();
    let sum = |range: std::ops::Range<usize>| net[range].iter().sum();

    ScoringBreakdown {
        front9: sum(0..9),
        back9: sum(9..18),
        last6: sum(12..18),
        last3: sum(15..18),
        last1: sum(17..18),
        total: sum(0..18),
    }
}
