#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Match-play golf scoring and handicapping engine.
//!
//! Pure computation only: callers own persistence, sync, and UI. Every
//! exposed function (other than [`UndoManager`] methods) is a pure function
//! of its inputs, and match state is always recomputed from the full ordered
//! hole history rather than incrementally mutated.
//!
//! Malformed structural input (wrong-length hole tables or score arrays)
//! never fails; it degrades to a documented all-zero default so a scoring
//! session in progress cannot crash on bad upstream data.

pub mod domain;


// Re-exports for public API
pub use domain::handicap::{
    allocate_strokes, best_ball_net_score, course_handicap, scoring_breakdown, ScoringBreakdown,
};
pub use domain::match_play::{
    calculate_match_state, determine_hole_winner, finalize_match, fourball_hole_winner,
    hole_winner_for_format, momentum, PlayerHoleScore,
};
pub use domain::pairing::{
    calculate_fairness_score, snake_draft_order, suggest_pairings, validate_pairings, DraftPick,
    PairingError, PairingSession, PairingValidation, PairingWarning, Player, ProposedMatch,
    SuggestedPairing,
};
pub use domain::rules::{MatchFormat, HOLES, SLOPE_BASE, UNDO_CAPACITY};
pub use domain::stableford::{best_ball_stableford_points, stableford_points, StablefordTable};
pub use domain::state::{
    CourseDifficulty, HoleResult, HoleWinner, MatchFinalResult, MatchOutcome, MatchState, Momentum,
    Team,
};
pub use domain::undo::{UndoAction, UndoManager};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
