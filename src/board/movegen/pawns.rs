use super::super::{Color, MoveKind, PieceKind, Position, RejectReason, Square};

pub(super) fn pawn_move(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
) -> Result<MoveKind, RejectReason> {
    let board = &position.board;
    let dir = color.pawn_direction();
    let (d_row, d_col) = Square::delta(from, to);

    if d_col == 0 {
        if d_row == dir {
            return if board.is_empty(to) {
                Ok(MoveKind::Normal)
            } else {
                Err(RejectReason::BlockedPath)
            };
        }
        if d_row == 2 * dir && from.row() == color.pawn_start_row() {
            let step = from
                .offset(dir, 0)
                .ok_or(RejectReason::IllegalShape)?;
            return if board.is_empty(step) && board.is_empty(to) {
                Ok(MoveKind::DoubleStep)
            } else {
                Err(RejectReason::BlockedPath)
            };
        }
        return Err(RejectReason::IllegalShape);
    }

    if d_col.abs() != 1 || d_row != dir {
        return Err(RejectReason::IllegalShape);
    }

    match board.piece_at(to) {
        Some(target) if target.color != color => Ok(MoveKind::Normal),
        Some(_) => Err(RejectReason::OwnPieceAtDestination),
        None => en_passant_capture(position, color, to).ok_or(RejectReason::IllegalShape),
    }
}

/// A diagonal step onto an empty square captures en passant only when it lands
/// on the square the opposing pawn just skipped.
fn en_passant_capture(position: &Position, color: Color, to: Square) -> Option<MoveKind> {
    let target = position.en_passant?;
    if target.color == color || target.passed_square() != to {
        return None;
    }
    let victim = position.board.piece_at(target.square)?;
    if victim.kind != PieceKind::Pawn || victim.color != target.color {
        return None;
    }
    Some(MoveKind::EnPassant {
        captured: target.square,
    })
}
