//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PieceKind, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(PieceKind::King, Color::White))
//!     .piece("e8".parse().unwrap(), Piece::new(PieceKind::King, Color::Black))
//!     .piece("a2".parse().unwrap(), Piece::new(PieceKind::Pawn, Color::White))
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.board().pieces().count(), 3);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, EnPassantTarget, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<EnPassantTarget>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder over an empty board with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::new(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing any existing occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling.set(color, side);
        self
    }

    /// Mark the pawn on `square` as having just double-stepped.
    #[must_use]
    pub const fn en_passant(mut self, square: Square, color: Color) -> Self {
        self.en_passant = Some(EnPassantTarget { square, color });
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        Position::from_parts(self.board, self.side_to_move, self.castling, self.en_passant)
    }
}
