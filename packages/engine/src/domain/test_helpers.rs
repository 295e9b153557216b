// Shared builders for unit tests.

use uuid::Uuid;

use crate::domain::pairing::Player;
use crate::domain::state::{HoleResult, HoleWinner};

/// Build an ordered hole history from a winner list (hole numbers 1-based).
pub fn history(winners: &[HoleWinner]) -> Vec<HoleResult> {
    winners
        .iter()
        .enumerate()
        .map(|(i, &winner)| HoleResult {
            hole_number: (i + 1) as u8,
            winner,
        })
        .collect()
}

/// A history where Team A wins the first `a_wins` holes and everything else
/// through `total` is halved.
pub fn a_up_then_halved(a_wins: usize, total: usize) -> Vec<HoleResult> {
    let winners: Vec<HoleWinner> = (0..total)
        .map(|i| {
            if i < a_wins {
                HoleWinner::TeamA
            } else {
                HoleWinner::Halved
            }
        })
        .collect();
    history(&winners)
}

pub fn player(name: &str, handicap_index: f64) -> Player {
    Player {
        id: Uuid::new_v4(),
        name: name.to_string(),
        handicap_index,
    }
}

/// The identity table: hole 1 is ranked hardest, hole 18 easiest.
pub fn sequential_table() -> Vec<u8> {
    (1..=18).collect()
}
