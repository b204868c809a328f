//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert!(any_legal_move(&position));
//! ```

pub use super::{
    any_legal_move, check_move, is_legal_move, king_in_check, legal_moves_from, Board, Color,
    FenError, Move, MoveParseError, Piece, PieceKind, Position, PositionBuilder, RejectReason,
    Square, SquareError,
};
