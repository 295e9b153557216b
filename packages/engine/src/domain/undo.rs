//! Bounded per-match undo history.
//!
//! The only stateful component of the engine. One [`UndoManager`] belongs to
//! exactly one match-editing session and is discarded with it; there is no
//! process-wide undo history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::rules::UNDO_CAPACITY;
use crate::domain::state::HoleWinner;

/// A reversible scoring entry: which hole changed and what it showed before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoAction {
    pub hole_number: u8,
    /// Winner recorded before the change; `None` when the hole was unscored.
    pub previous_winner: Option<HoleWinner>,
    pub timestamp: OffsetDateTime,
}

impl UndoAction {
    /// New action stamped with the current UTC time.
    pub fn new(hole_number: u8, previous_winner: Option<HoleWinner>) -> Self {
        Self {
            hole_number,
            previous_winner,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Last-N undo stack, capped at [`UNDO_CAPACITY`] entries.
///
/// Oldest entries are evicted on overflow (FIFO past capacity); retrieval is
/// LIFO via [`UndoManager::pop_last_action`].
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    actions: VecDeque<UndoAction>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            actions: VecDeque::with_capacity(UNDO_CAPACITY),
        }
    }

    /// Push an action, discarding the oldest entry once the cap is reached.
    pub fn record_action(&mut self, action: UndoAction) {
        if self.actions.len() == UNDO_CAPACITY {
            self.actions.pop_front();
        }
        self.actions.push_back(action);
    }

    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Pop and return the most recent action, or `None` if empty.
    pub fn pop_last_action(&mut self) -> Option<UndoAction> {
        self.actions.pop_back()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
