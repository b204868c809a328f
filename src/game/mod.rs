//! Game controller: turn-strict state machine over [`Position`](crate::board::Position).
//!
//! Every operation is a pure function from a `GameState` to a new one.
//! [`SharedGame`] serializes access when several clients drive one game.

mod controller;
mod shared;
mod state;

pub use controller::{
    apply_move, classify, from_fen, from_position, is_legal_move, legal_moves_from, new_game,
    reset, status, to_fen,
};
pub use shared::SharedGame;
pub use state::{GameState, GameStatus, MoveResult};
