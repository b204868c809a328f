//! Attack oracle: which squares a color currently attacks.
//!
//! An attack is the capture pattern of a piece, ignoring what stands on the
//! target. Pawns attack their two forward diagonals only; kings attack the
//! eight neighbours (castling never attacks).

use super::attack_tables::{bit, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::movegen::{line_step, path_clear};
use super::{Board, Color, Piece, PieceKind, Square};

/// Whether the piece on `from` attacks `target`.
#[must_use]
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    let target_bit = bit(target);
    match piece.kind {
        PieceKind::Pawn => PAWN_ATTACKS[piece.color.index()][from.index()] & target_bit != 0,
        PieceKind::Knight => KNIGHT_ATTACKS[from.index()] & target_bit != 0,
        PieceKind::King => KING_ATTACKS[from.index()] & target_bit != 0,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let Some(step) = line_step(from, target) else {
                return false;
            };
            let diagonal = step.0 != 0 && step.1 != 0;
            let fits = match piece.kind {
                PieceKind::Bishop => diagonal,
                PieceKind::Rook => !diagonal,
                _ => true,
            };
            fits && path_clear(board, from, target, step)
        }
    }
}

/// Whether any piece of `color` attacks `target`.
#[must_use]
pub fn square_attacked_by(board: &Board, color: Color, target: Square) -> bool {
    board
        .pieces_of(color)
        .any(|(from, piece)| piece_attacks(board, piece, from, target))
}

/// Squares holding pieces of `color` that attack `target`.
#[must_use]
pub fn attackers_of(board: &Board, color: Color, target: Square) -> Vec<Square> {
    board
        .pieces_of(color)
        .filter(|&(from, piece)| piece_attacks(board, piece, from, target))
        .map(|(from, _)| from)
        .collect()
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[must_use]
pub fn king_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| square_attacked_by(board, color.opponent(), king))
}
