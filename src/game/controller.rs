//! Game controller: the only place a move is committed.

use tracing::{debug, info, trace};

use super::{GameState, GameStatus, MoveResult};
use crate::board::{
    any_legal_move, check_move, king_in_check, FenError, Move, Position, RejectReason, Square,
};

/// Standard initial position, White to move.
#[must_use]
pub fn new_game() -> GameState {
    GameState {
        position: Position::new(),
        status: GameStatus::InProgress,
    }
}

/// Equivalent to [`new_game`].
#[must_use]
pub fn reset() -> GameState {
    new_game()
}

#[inline]
#[must_use]
pub fn status(state: &GameState) -> GameStatus {
    state.status
}

/// Classify `position` for its side to move.
#[must_use]
pub fn classify(position: &Position) -> GameStatus {
    let side = position.turn();
    let in_check = king_in_check(position.board(), side);
    match (in_check, any_legal_move(position)) {
        (true, false) => GameStatus::Checkmate(side.opponent()),
        (true, true) => GameStatus::Check(side),
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    }
}

/// Wrap an arbitrary position, classifying it.
#[must_use]
pub fn from_position(position: Position) -> GameState {
    GameState {
        status: classify(&position),
        position,
    }
}

/// # Errors
/// Returns a [`FenError`] if `fen` is malformed.
pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
    Position::try_from_fen(fen).map(from_position)
}

#[must_use]
pub fn to_fen(state: &GameState) -> String {
    state.position.to_fen()
}

/// Legal destinations of the piece on `square`; empty once the game is over.
#[must_use]
pub fn legal_moves_from(state: &GameState, square: Square) -> Vec<Square> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    crate::board::legal_moves_from(&state.position, square)
}

#[must_use]
pub fn is_legal_move(state: &GameState, from: Square, to: Square) -> bool {
    !state.status.is_terminal() && check_move(&state.position, from, to).is_ok()
}

/// Validate and commit `from -> to`.
///
/// A rejected move returns `state` unchanged. A terminal state rejects every
/// request with [`RejectReason::GameAlreadyOver`] without looking at the move.
#[must_use]
pub fn apply_move(state: &GameState, from: Square, to: Square) -> (GameState, MoveResult) {
    if state.status.is_terminal() {
        trace!("{from}{to} rejected: game already over ({})", state.status);
        return (*state, MoveResult::Rejected(RejectReason::GameAlreadyOver));
    }

    let kind = match check_move(&state.position, from, to) {
        Ok(kind) => kind,
        Err(reason) => {
            trace!("{from}{to} rejected: {reason}");
            return (*state, MoveResult::Rejected(reason));
        }
    };

    let mv = Move::new(from, to);
    let position = state.position.after(mv, kind);
    let status = classify(&position);
    debug!("applied {mv} ({kind:?}), status {status}");
    if status.is_terminal() {
        info!("game over: {status}");
    }

    (GameState { position, status }, MoveResult::Applied(status))
}
