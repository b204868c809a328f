use super::super::{Board, MoveKind, RejectReason, Square};

/// Unit step from `from` toward `to` if they share a row, column or diagonal.
pub(crate) fn line_step(from: Square, to: Square) -> Option<(isize, isize)> {
    let (d_row, d_col) = Square::delta(from, to);
    if from == to {
        return None;
    }
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        Some((d_row.signum(), d_col.signum()))
    } else {
        None
    }
}

/// Whether every square strictly between `from` and `to` along `step` is empty.
pub(crate) fn path_clear(board: &Board, from: Square, to: Square, step: (isize, isize)) -> bool {
    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    // Walked off the board without meeting `to`: `step` did not lead there
    false
}

fn slide(board: &Board, from: Square, to: Square, step: (isize, isize)) -> Result<MoveKind, RejectReason> {
    if path_clear(board, from, to, step) {
        Ok(MoveKind::Normal)
    } else {
        Err(RejectReason::BlockedPath)
    }
}

pub(super) fn rook_move(board: &Board, from: Square, to: Square) -> Result<MoveKind, RejectReason> {
    match line_step(from, to) {
        Some(step @ (0, _)) | Some(step @ (_, 0)) => slide(board, from, to, step),
        _ => Err(RejectReason::IllegalShape),
    }
}

pub(super) fn bishop_move(board: &Board, from: Square, to: Square) -> Result<MoveKind, RejectReason> {
    match line_step(from, to) {
        Some(step) if step.0 != 0 && step.1 != 0 => slide(board, from, to, step),
        _ => Err(RejectReason::IllegalShape),
    }
}

pub(super) fn queen_move(board: &Board, from: Square, to: Square) -> Result<MoveKind, RejectReason> {
    match line_step(from, to) {
        Some(step) => slide(board, from, to, step),
        None => Err(RejectReason::IllegalShape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_step_directions() {
        assert_eq!(line_step(sq("a1"), sq("a8")), Some((-1, 0)));
        assert_eq!(line_step(sq("h8"), sq("a1")), Some((1, -1)));
        assert_eq!(line_step(sq("a1"), sq("b3")), None);
        assert_eq!(line_step(sq("d4"), sq("d4")), None);
    }

    #[test]
    fn test_rook_blocked_and_clear() {
        let mut board = Board::empty();
        assert_eq!(rook_move(&board, sq("a1"), sq("a8")), Ok(MoveKind::Normal));
        board.set_piece(sq("a4"), Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(
            rook_move(&board, sq("a1"), sq("a8")),
            Err(RejectReason::BlockedPath)
        );
        // The blocker itself may be reached
        assert_eq!(rook_move(&board, sq("a1"), sq("a4")), Ok(MoveKind::Normal));
        assert_eq!(
            rook_move(&board, sq("a1"), sq("b2")),
            Err(RejectReason::IllegalShape)
        );
    }

    #[test]
    fn test_bishop_shapes() {
        let board = Board::new();
        assert_eq!(
            bishop_move(&board, sq("c1"), sq("c3")),
            Err(RejectReason::IllegalShape)
        );
        assert_eq!(
            bishop_move(&board, sq("c1"), sq("e3")),
            Err(RejectReason::BlockedPath)
        );
        assert_eq!(bishop_move(&board, sq("c1"), sq("d2")), Ok(MoveKind::Normal));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = Board::empty();
        let d4 = sq("d4");
        for to in Square::ALL {
            let queen = queen_move(&board, d4, to).is_ok();
            let union = rook_move(&board, d4, to).is_ok() || bishop_move(&board, d4, to).is_ok();
            assert_eq!(queen, union, "mismatch on {to}");
        }
    }
}
