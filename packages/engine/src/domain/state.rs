//! Core match-play value types.
//!
//! Everything here is a plain immutable value owned by the caller and
//! serializes directly to JSON for the persistence/sync layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Team::A => "Team A",
            Team::B => "Team B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single hole.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleWinner {
    TeamA,
    TeamB,
    Halved,
}

/// Recorded outcome of one played hole. Immutable once recorded; replaceable
/// only through an explicit undo (see [`crate::domain::undo`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HoleResult {
    /// 1-based hole number (1..=18).
    pub hole_number: u8,
    pub winner: HoleWinner,
}

/// Per-tee-set course difficulty inputs.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDifficulty {
    /// Slope rating, typically 55..=155.
    pub slope_rating: u16,
    /// Course rating (expected scratch score).
    pub course_rating: f64,
    pub par: u8,
}

/// Derived match-play state, recomputed from the full hole history on every
/// query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Holes won by Team A minus holes won by Team B; halves contribute 0.
    pub match_score: i32,
    pub holes_played: u8,
    pub holes_remaining: u8,
    /// Leader's margin equals holes remaining: the trailing side can still
    /// halve the match but cannot win it outright.
    pub is_dormie: bool,
    /// Leader's margin exceeds holes remaining: mathematically decided.
    pub is_closed_out: bool,
    pub can_continue: bool,
    /// Human-readable summary ("All Square", "Team A 2 UP", "Dormie", ...).
    pub status_text: String,
}

/// Final outcome classification of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    TeamAWin,
    TeamBWin,
    Halved,
    /// Fewer than 18 holes recorded and no closeout. A terminal/incomplete
    /// state, not an error.
    NotFinished,
}

/// Result of finalizing a match: `margin` and `holes_remaining` give golf's
/// conventional "N&M" notation for a closeout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchFinalResult {
    pub outcome: MatchOutcome,
    pub margin: u8,
    pub holes_remaining: u8,
}

/// Hole-outcome tally over a trailing window, for UI streak indicators.
/// Not part of the authoritative match-state calculation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Momentum {
    pub team_a_wins: u8,
    pub team_b_wins: u8,
    pub halves: u8,
}
