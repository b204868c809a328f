//! Legality filter: movement rules plus the "own king not left attacked" test.
//!
//! Every candidate move is tried on a copy of the board, so checking a move
//! never touches the position it was asked about.

use super::attacks::king_in_check;
use super::movegen::classify;
use super::{Board, Move, MoveKind, PieceKind, Position, RejectReason, Square};

/// The board after `mv`, including an en-passant removal or castling rook
/// relocation. Promotion is not resolved here.
#[must_use]
pub(crate) fn simulate(board: &Board, mv: Move, kind: MoveKind) -> Board {
    let mut next = *board;
    next.relocate(mv.from, mv.to);
    match kind {
        MoveKind::EnPassant { captured } => {
            next.remove_piece(captured);
        }
        MoveKind::Castle {
            rook_from, rook_to, ..
        } => {
            next.relocate(rook_from, rook_to);
        }
        MoveKind::Normal | MoveKind::DoubleStep => {}
    }
    next
}

/// Validate `from -> to` for the side to move and classify its side effects.
///
/// # Errors
/// Returns the first [`RejectReason`] that applies, checked in order: empty
/// origin, wrong side, own piece on the destination, opposing king on the
/// destination (reported as [`RejectReason::IllegalShape`]), the piece's
/// movement pattern, and finally self-check.
pub fn check_move(position: &Position, from: Square, to: Square) -> Result<MoveKind, RejectReason> {
    let piece = position
        .board
        .piece_at(from)
        .ok_or(RejectReason::EmptyOrigin)?;
    if piece.color != position.turn {
        return Err(RejectReason::NotYourTurn);
    }

    if let Some(target) = position.board.piece_at(to) {
        if target.color == piece.color {
            return Err(RejectReason::OwnPieceAtDestination);
        }
        if target.kind == PieceKind::King {
            return Err(RejectReason::IllegalShape);
        }
    }

    let kind = classify(position, piece, from, to)?;

    let after = simulate(&position.board, Move::new(from, to), kind);
    if king_in_check(&after, piece.color) {
        return Err(RejectReason::LeavesKingInCheck);
    }

    Ok(kind)
}

/// Whether the side to move may play `from -> to`.
#[must_use]
pub fn is_legal_move(position: &Position, from: Square, to: Square) -> bool {
    check_move(position, from, to).is_ok()
}

/// Every legal destination of the piece on `square`, in row-major order.
#[must_use]
pub fn legal_moves_from(position: &Position, square: Square) -> Vec<Square> {
    Square::ALL
        .iter()
        .copied()
        .filter(|&to| is_legal_move(position, square, to))
        .collect()
}

/// Every legal move of the side to move.
#[must_use]
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    position
        .board
        .pieces_of(position.turn)
        .flat_map(|(from, _)| {
            legal_moves_from(position, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Whether the side to move has at least one legal move.
#[must_use]
pub fn any_legal_move(position: &Position) -> bool {
    position.board.pieces_of(position.turn).any(|(from, _)| {
        Square::ALL
            .iter()
            .any(|&to| is_legal_move(position, from, to))
    })
}

/// Count leaf positions `depth` plies deep (promotions are always to a queen).
#[must_use]
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for (from, _) in position.board.pieces_of(position.turn) {
        for to in Square::ALL {
            let Ok(kind) = check_move(position, from, to) else {
                continue;
            };
            nodes += if depth == 1 {
                1
            } else {
                perft(&position.after(Move::new(from, to), kind), depth - 1)
            };
        }
    }
    nodes
}
