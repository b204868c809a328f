//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules core:
//! - `PieceKind`, `Color` and `Piece` - tagged piece identity
//! - `Square` - `(row, col)` board coordinate
//! - `Move`, `EnPassantTarget` and `MoveKind` - move requests and their effects
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{EnPassantTarget, Move, MoveKind};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
