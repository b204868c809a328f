//! Board plus the metadata that legality depends on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::legality::simulate;
use super::{
    Board, CastlingRights, Color, EnPassantTarget, Move, MoveKind, Piece, PieceKind,
};

/// A board, the side to move, castling rights and the en-passant target.
///
/// The move counters only feed FEN output; no draw rule reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            turn: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a position from parts; counters start at `0` and `1`.
    #[must_use]
    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant: Option<EnPassantTarget>,
    ) -> Self {
        Position {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The position after committing a move already accepted by the legality filter.
    ///
    /// Applies promotion to a queen, revokes castling rights touched by the move,
    /// sets or clears the en-passant target and hands the turn over.
    #[must_use]
    pub(crate) fn after(&self, mv: Move, kind: MoveKind) -> Position {
        let Some(piece) = self.board.piece_at(mv.from) else {
            return *self;
        };
        let color = piece.color;
        let captured =
            !self.board.is_empty(mv.to) || matches!(kind, MoveKind::EnPassant { .. });

        let mut board = simulate(&self.board, mv, kind);
        if piece.kind == PieceKind::Pawn && mv.to.row() == color.promotion_row() {
            board.set_piece(mv.to, Piece::new(PieceKind::Queen, color));
        }

        let mut castling = self.castling;
        if piece.kind == PieceKind::King {
            castling.revoke_all(color);
        }
        castling.revoke_for_square(mv.from);
        castling.revoke_for_square(mv.to);

        let en_passant = match kind {
            MoveKind::DoubleStep => Some(EnPassantTarget {
                square: mv.to,
                color,
            }),
            _ => None,
        };

        Position {
            board,
            turn: color.opponent(),
            castling,
            en_passant,
            halfmove_clock: if piece.kind == PieceKind::Pawn || captured {
                0
            } else {
                self.halfmove_clock + 1
            },
            fullmove_number: match color {
                Color::White => self.fullmove_number,
                Color::Black => self.fullmove_number + 1,
            },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_step_sets_target_then_clears() {
        let start = Position::new();
        let mv = Move::new(sq("e2"), sq("e4"));
        let after = start.after(mv, MoveKind::DoubleStep);
        assert_eq!(
            after.en_passant(),
            Some(EnPassantTarget {
                square: sq("e4"),
                color: Color::White
            })
        );
        assert_eq!(after.turn(), Color::Black);

        let reply = after.after(Move::new(sq("g8"), sq("f6")), MoveKind::Normal);
        assert_eq!(reply.en_passant(), None);
        assert_eq!(reply.fullmove_number(), 2);
        assert_eq!(reply.halfmove_clock(), 1);
    }

    #[test]
    fn test_promotion_is_to_queen() {
        let mut board = Board::empty();
        board.set_piece(sq("b7"), Piece::new(PieceKind::Pawn, Color::White));
        let position = Position::from_parts(board, Color::White, CastlingRights::none(), None);
        let after = position.after(Move::new(sq("b7"), sq("b8")), MoveKind::Normal);
        assert_eq!(
            after.board().piece_at(sq("b8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn test_king_move_revokes_both_rights() {
        let mut board = Board::new();
        board.remove_piece(sq("e2"));
        let position = Position::from_parts(board, Color::White, CastlingRights::all(), None);
        let after = position.after(Move::new(sq("e1"), sq("e2")), MoveKind::Normal);
        assert!(!after.castling().has(Color::White, CastleSide::Kingside));
        assert!(!after.castling().has(Color::White, CastleSide::Queenside));
        assert!(after.castling().has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_castle_relocates_rook() {
        let mut board = Board::new();
        board.remove_piece(sq("f1"));
        board.remove_piece(sq("g1"));
        let position = Position::from_parts(board, Color::White, CastlingRights::all(), None);
        let kind = MoveKind::Castle {
            side: CastleSide::Kingside,
            rook_from: sq("h1"),
            rook_to: sq("f1"),
        };
        let after = position.after(Move::new(sq("e1"), sq("g1")), kind);
        assert_eq!(
            after.board().piece_at(sq("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(after.board().is_empty(sq("h1")));
        assert_eq!(
            after.board().piece_at(sq("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }
}
