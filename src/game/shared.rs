//! A game instance shared between clients.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{GameState, GameStatus, MoveResult};
use crate::board::Square;

/// Cloneable handle to one game; each `apply_move` is a single critical section.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    state: Arc<Mutex<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        SharedGame {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        *self.state.lock()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.lock().status()
    }

    #[must_use]
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        super::legal_moves_from(&self.state.lock(), square)
    }

    pub fn apply_move(&self, from: Square, to: Square) -> MoveResult {
        let mut guard = self.state.lock();
        let (next, result) = super::apply_move(&guard, from, to);
        *guard = next;
        result
    }

    pub fn reset(&self) {
        *self.state.lock() = super::reset();
    }
}
