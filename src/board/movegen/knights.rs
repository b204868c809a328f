use super::super::{MoveKind, RejectReason, Square};

pub(super) fn knight_move(from: Square, to: Square) -> Result<MoveKind, RejectReason> {
    let (d_row, d_col) = Square::delta(from, to);
    match (d_row.abs(), d_col.abs()) {
        (1, 2) | (2, 1) => Ok(MoveKind::Normal),
        _ => Err(RejectReason::IllegalShape),
    }
}
