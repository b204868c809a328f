//! Chess board representation and move legality.
//!
//! Uses an 8x8 mailbox with value semantics: every candidate move is tried on a
//! copy, so asking about a move never changes the position.
//! Supports the full movement rules including castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{legal_moves_from, Position, Square};
//!
//! let position = Position::new();
//! let knight: Square = "g1".parse().unwrap();
//! println!("g1 knight has {} moves", legal_moves_from(&position, knight).len());
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod legality;
mod movegen;
mod position;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::{attackers_of, king_in_check, piece_attacks, square_attacked_by};
pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, RejectReason, SquareError};
pub use fen::START_FEN;
pub use legality::{all_legal_moves, any_legal_move, check_move, is_legal_move, legal_moves_from, perft};
pub use movegen::geometrically_legal;
pub use position::Position;
pub use state::{Board, BoardView};
pub use types::{CastleSide, CastlingRights, Color, EnPassantTarget, Move, MoveKind, Piece, PieceKind, Square};
