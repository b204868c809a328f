//! Move legality and game-state classification for standard chess.
//!
//! [`board`] holds the rules: movement patterns, the attack oracle and the
//! legality filter. [`game`] commits accepted moves and classifies the result.
//! [`protocol`] is a line-oriented front end over a single game.

pub mod board;
pub mod game;
pub mod protocol;

pub use board::{Board, Color, Move, Piece, PieceKind, Position, RejectReason, Square};
pub use game::{GameState, GameStatus, MoveResult, SharedGame};
