use serde::{Deserialize, Serialize};

/// Holes in a regulation round.
pub const HOLES: usize = 18;

/// Neutral slope rating; a slope-113 course applies no handicap adjustment.
pub const SLOPE_BASE: f64 = 113.0;

/// Maximum retained undo actions per match-editing session.
pub const UNDO_CAPACITY: usize = 5;

/// Fairness scores below this trigger a pairing warning.
pub const FAIRNESS_WARN_THRESHOLD: f64 = 70.0;

/// Fairness points lost per stroke of average handicap gap.
pub const FAIRNESS_PENALTY_PER_STROKE: f64 = 10.0;

/// Scoring format for a match.
///
/// A closed set: scoring functions dispatch on this with a plain `match`,
/// never a trait hierarchy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    /// One player per side, hole winner by lower net score.
    Singles,
    /// Two players per side, better ball counts per hole.
    Fourball,
    /// Two players per side playing alternate shot on a single ball.
    Foursomes,
    /// Two players per side, better Stableford point total counts.
    BestBallStableford,
}

impl MatchFormat {
    /// Players each side must field per match.
    pub fn players_per_team(&self) -> usize {
        match self {
            MatchFormat::Singles => 1,
            MatchFormat::Fourball | MatchFormat::Foursomes | MatchFormat::BestBallStableford => 2,
        }
    }
}
