#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{BoardView, Color, Position, RejectReason};

/// Classification of a position from the side to move's point of view.
///
/// `Check` is reporting only; moves remain possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The named color is in check and has at least one legal move.
    Check(Color),
    /// The named color delivered mate.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "check ({color})"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate ({winner} wins)"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Outcome of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveResult {
    Applied(GameStatus),
    Rejected(RejectReason),
}

impl MoveResult {
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveResult::Applied(status) => write!(f, "applied {status}"),
            MoveResult::Rejected(reason) => write!(f, "rejected {reason}"),
        }
    }
}

/// A position together with its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) position: Position,
    pub(crate) status: GameStatus,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Read-only copy of the grid, `view[row][col]`.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardView {
        self.position.board().snapshot()
    }
}

impl Default for GameState {
    fn default() -> Self {
        super::new_game()
    }
}
