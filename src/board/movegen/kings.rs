use super::super::attacks::square_attacked_by;
use super::super::{CastleSide, Color, MoveKind, Piece, PieceKind, Position, RejectReason, Square};

/// Column the king stands on before castling
const KING_HOME_COL: usize = 4;

pub(super) fn king_move(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
) -> Result<MoveKind, RejectReason> {
    let (d_row, d_col) = Square::delta(from, to);
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return Ok(MoveKind::Normal);
    }
    if d_row == 0 && d_col.abs() == 2 {
        let side = if d_col > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        return castle(position, color, from, side);
    }
    Err(RejectReason::IllegalShape)
}

/// Castling preconditions: rights intact, pieces at home, nothing in between,
/// and none of the king's three squares attacked.
fn castle(
    position: &Position,
    color: Color,
    from: Square,
    side: CastleSide,
) -> Result<MoveKind, RejectReason> {
    let board = &position.board;
    let row = color.back_row();
    if from != Square::at(row, KING_HOME_COL) || !position.castling.has(color, side) {
        return Err(RejectReason::IllegalShape);
    }

    let rook_from = side.rook_home(color);
    if board.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return Err(RejectReason::IllegalShape);
    }

    let (low, high) = if rook_from.col() < KING_HOME_COL {
        (rook_from.col() + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, rook_from.col())
    };
    if (low..high).any(|col| !board.is_empty(Square::at(row, col))) {
        return Err(RejectReason::BlockedPath);
    }

    let target_col = side.king_target_col();
    let passed_col = (KING_HOME_COL + target_col) / 2;
    let opponent = color.opponent();
    let king_squares = [KING_HOME_COL, passed_col, target_col];
    if king_squares
        .iter()
        .any(|&col| square_attacked_by(board, opponent, Square::at(row, col)))
    {
        return Err(RejectReason::IllegalShape);
    }

    Ok(MoveKind::Castle {
        side,
        rook_from,
        rook_to: Square::at(row, side.rook_target_col()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, CastlingRights};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn castling_position(extra: &[(&str, Piece)]) -> Position {
        let mut board = Board::empty();
        board.set_piece(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.set_piece(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        for (s, p) in extra {
            board.set_piece(sq(s), *p);
        }
        Position::from_parts(board, Color::White, CastlingRights::all(), None)
    }

    #[test]
    fn test_single_steps() {
        let pos = castling_position(&[]);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("d2")),
            Ok(MoveKind::Normal)
        );
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("e3")),
            Err(RejectReason::IllegalShape)
        );
    }

    #[test]
    fn test_castle_both_sides() {
        let pos = castling_position(&[]);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("g1")),
            Ok(MoveKind::Castle {
                side: CastleSide::Kingside,
                rook_from: sq("h1"),
                rook_to: sq("f1"),
            })
        );
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("c1")),
            Ok(MoveKind::Castle {
                side: CastleSide::Queenside,
                rook_from: sq("a1"),
                rook_to: sq("d1"),
            })
        );
    }

    #[test]
    fn test_castle_requires_rights() {
        let mut pos = castling_position(&[]);
        pos.castling.revoke(Color::White, CastleSide::Kingside);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("g1")),
            Err(RejectReason::IllegalShape)
        );
        assert!(king_move(&pos, Color::White, sq("e1"), sq("c1")).is_ok());
    }

    #[test]
    fn test_castle_blocked_on_b_file() {
        let pos = castling_position(&[("b1", Piece::new(PieceKind::Knight, Color::White))]);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("c1")),
            Err(RejectReason::BlockedPath)
        );
    }

    #[test]
    fn test_castle_through_attacked_square() {
        // Black rook on f8 covers f1
        let pos = castling_position(&[("f8", Piece::new(PieceKind::Rook, Color::Black))]);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("g1")),
            Err(RejectReason::IllegalShape)
        );
        assert!(king_move(&pos, Color::White, sq("e1"), sq("c1")).is_ok());
    }

    #[test]
    fn test_castle_out_of_check() {
        let pos = castling_position(&[("e5", Piece::new(PieceKind::Rook, Color::Black))]);
        assert_eq!(
            king_move(&pos, Color::White, sq("e1"), sq("g1")),
            Err(RejectReason::IllegalShape)
        );
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        // Only the king's squares matter; b1 being covered does not prevent O-O-O
        let pos = castling_position(&[("b8", Piece::new(PieceKind::Rook, Color::Black))]);
        assert!(king_move(&pos, Color::White, sq("e1"), sq("c1")).is_ok());
    }
}
