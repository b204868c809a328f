#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// Read-only snapshot handed to renderers: `view[row][col]`.
pub type BoardView = [[Option<Piece>; 8]; 8];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid; each square holds at most one piece.
///
/// `Board` is a plain value: simulating a move means mutating a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: BoardView,
}

impl Board {
    /// The standard initial arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(Square::at(color.back_row(), col), Piece::new(*kind, color));
                board.set_piece(
                    Square::at(color.pawn_start_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Color of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Place a piece, replacing whatever stood there
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some(piece);
    }

    /// Clear a square, returning its previous occupant
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Move whatever stands on `from` to `to`, returning the captured occupant of `to`
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece(from);
        let captured = self.remove_piece(to);
        if let Some(piece) = moving {
            self.set_piece(to, piece);
        }
        captured
    }

    /// Every occupied square in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .filter_map(move |&sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every square occupied by `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// The first king of `color` in row-major order
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::ALL
            .iter()
            .copied()
            .find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Copy of the grid for rendering
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl From<BoardView> for Board {
    fn from(squares: BoardView) -> Self {
        Board { squares }
    }
}
