//! Movement rules: whether a piece's move fits its pattern on a given board.
//!
//! These checks ignore whose turn it is and whether the mover's own king ends
//! up attacked; the legality filter layers those on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{MoveKind, Piece, PieceKind, Position, RejectReason, Square};

pub(crate) use sliders::{line_step, path_clear};

/// Classify `piece` moving `from -> to` on `position`.
///
/// Landing on a piece of the mover's color is refused before dispatching on the
/// piece kind. The en-passant target and castling rights come from `position`.
pub(crate) fn classify(
    position: &Position,
    piece: Piece,
    from: Square,
    to: Square,
) -> Result<MoveKind, RejectReason> {
    if position.board.color_on(to) == Some(piece.color) {
        return Err(RejectReason::OwnPieceAtDestination);
    }

    match piece.kind {
        PieceKind::Pawn => pawns::pawn_move(position, piece.color, from, to),
        PieceKind::Knight => knights::knight_move(from, to),
        PieceKind::Bishop => sliders::bishop_move(&position.board, from, to),
        PieceKind::Rook => sliders::rook_move(&position.board, from, to),
        PieceKind::Queen => sliders::queen_move(&position.board, from, to),
        PieceKind::King => kings::king_move(position, piece.color, from, to),
    }
}

/// Whether `piece` may move `from -> to` by its movement pattern alone.
#[must_use]
pub fn geometrically_legal(position: &Position, piece: Piece, from: Square, to: Square) -> bool {
    classify(position, piece, from, to).is_ok()
}
