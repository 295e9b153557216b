//! Domain layer: pure scoring, handicapping, and pairing logic.

pub mod handicap;
pub mod match_play;
pub mod pairing;
pub mod rules;
pub mod stableford;
pub mod state;
pub mod undo;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_handicap;

// Re-exports for ergonomics
pub use rules::{MatchFormat, HOLES, SLOPE_BASE, UNDO_CAPACITY};
pub use state::{HoleResult, HoleWinner, MatchState, Team};
