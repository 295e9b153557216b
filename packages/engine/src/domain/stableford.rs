//! Stableford point scoring.
//!
//! A stateless lookup from a net-to-par delta into a configurable point
//! table. Two built-in variants (standard and modified) plus full custom
//! point assignment for organizers.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Points per relative-to-par bucket.
///
/// The standard game has a single "double bogey or worse" bucket; keeping
/// `double_bogey` and `worse` separate lets modified/custom tables punish a
/// blow-up hole harder than a plain double.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StablefordTable {
    /// Three or more under par.
    pub albatross: i32,
    pub eagle: i32,
    pub birdie: i32,
    pub par: i32,
    pub bogey: i32,
    pub double_bogey: i32,
    /// Three or more over par.
    pub worse: i32,
}

impl StablefordTable {
    /// Standard Stableford: 5/4/3/2/1, nothing for double bogey or worse.
    pub fn standard() -> Self {
        Self {
            albatross: 5,
            eagle: 4,
            birdie: 3,
            par: 2,
            bogey: 1,
            double_bogey: 0,
            worse: 0,
        }
    }

    /// Modified Stableford: big rewards up top, negative points for bogey
    /// or worse to penalize poor play.
    pub fn modified() -> Self {
        Self {
            albatross: 8,
            eagle: 5,
            birdie: 2,
            par: 0,
            bogey: -1,
            double_bogey: -3,
            worse: -3,
        }
    }

    /// Points for a net score delta relative to par.
    pub fn points_for(&self, net_to_par: i32) -> i32 {
        match net_to_par {
            d if d <= -3 => self.albatross,
            -2 => self.eagle,
            -1 => self.birdie,
            0 => self.par,
            1 => self.bogey,
            2 => self.double_bogey,
            _ => self.worse,
        }
    }
}

impl Default for StablefordTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stableford points for one player's hole: net = gross − strokes received,
/// bucketed against par.
pub fn stableford_points(gross: i32, par: i32, strokes_received: i32, table: &StablefordTable) -> i32 {
    let net = gross - strokes_received;
    table.points_for(net - par)
}

/// Best-ball Stableford: each player's points are computed independently
/// from their own net score and the maximum is returned.
///
/// The max-points player is not necessarily the lowest-net player: with a
/// non-monotonic table (modified variants) the two can diverge, so this must
/// never be derived from the best net score. Empty or mismatched input
/// degrades to 0.
pub fn best_ball_stableford_points(
    scores: &[i32],
    par: i32,
    strokes: &[i32],
    table: &StablefordTable,
) -> i32 {
    if scores.is_empty() || scores.len() != strokes.len() {
        warn!(
            scores = scores.len(),
            strokes = strokes.len(),
            "best-ball stableford input empty or mismatched; returning 0"
        );
        return 0;
    }
    scores
        .iter()
        .zip(strokes)
        .map(|(gross, s)| stableford_points(*gross, par, *s, table))
        .max()
        .unwrap_or(0)
}
