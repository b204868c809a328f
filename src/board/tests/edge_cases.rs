//! Edge case tests for special chess positions and moves.

use crate::board::{
    all_legal_moves, any_legal_move, check_move, king_in_check, legal_moves_from, CastleSide,
    Color, MoveKind, Piece, PieceKind, Position, RejectReason, Square,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn fen(s: &str) -> Position {
    s.parse().unwrap()
}

fn commit(position: &Position, from: &str, to: &str) -> Position {
    let mv = crate::board::Move::new(sq(from), sq(to));
    let kind = check_move(position, mv.from, mv.to).unwrap();
    position.after(mv, kind)
}

#[test]
fn test_stalemate_position() {
    let position = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!king_in_check(position.board(), Color::Black));
    assert!(!any_legal_move(&position));
    assert!(all_legal_moves(&position).is_empty());
}

#[test]
fn test_back_rank_mate_has_no_moves() {
    let position = fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(king_in_check(position.board(), Color::Black));
    assert!(!any_legal_move(&position));
}

#[test]
fn test_promotion_to_queen_only() {
    let position = fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let after = commit(&position, "a7", "a8");
    assert_eq!(
        after.board().piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn test_black_promotion_by_capture() {
    let position = fen("8/8/8/8/8/8/1p6/R3K2k b - - 0 1");
    let after = commit(&position, "b2", "a1");
    assert_eq!(
        after.board().piece_at(sq("a1")),
        Some(Piece::new(PieceKind::Queen, Color::Black))
    );
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let position = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert_eq!(
        check_move(&position, sq("e5"), sq("d6")),
        Ok(MoveKind::EnPassant { captured: sq("d5") })
    );
    let after = commit(&position, "e5", "d6");
    assert!(after.board().is_empty(sq("d5")));
    assert_eq!(
        after.board().piece_at(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_en_passant_exposing_king_is_rejected() {
    // Both pawns leave the fifth rank, opening it to the rook
    let position = fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert_eq!(
        check_move(&position, sq("e5"), sq("d6")),
        Err(RejectReason::LeavesKingInCheck)
    );
}

#[test]
fn test_en_passant_window_closes() {
    let start = fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let after_double = commit(&start, "d7", "d5");
    assert!(check_move(&after_double, sq("e5"), sq("d6")).is_ok());

    let white_waits = commit(&after_double, "e1", "f1");
    let black_waits = commit(&white_waits, "e8", "f8");
    assert_eq!(black_waits.en_passant(), None);
    assert_eq!(
        check_move(&black_waits, sq("e5"), sq("d6")),
        Err(RejectReason::IllegalShape)
    );
}

#[test]
fn test_castling_both_sides() {
    let position = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let from_e1 = legal_moves_from(&position, sq("e1"));
    assert!(from_e1.contains(&sq("g1")));
    assert!(from_e1.contains(&sq("c1")));

    let short = commit(&position, "e1", "g1");
    assert_eq!(
        short.board().piece_at(sq("f1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert!(!short.castling().has(Color::White, CastleSide::Kingside));
    assert!(!short.castling().has(Color::White, CastleSide::Queenside));

    let long = commit(&short, "e8", "c8");
    assert_eq!(
        long.board().piece_at(sq("d8")),
        Some(Piece::new(PieceKind::Rook, Color::Black))
    );
    assert!(long.castling().is_empty());
}

#[test]
fn test_castling_through_attack_is_rejected() {
    // Black rook on f8 covers f1
    let position = fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(
        check_move(&position, sq("e1"), sq("g1")),
        Err(RejectReason::IllegalShape)
    );
    assert!(check_move(&position, sq("e1"), sq("c1")).is_ok());
}

#[test]
fn test_castling_out_of_check_is_rejected() {
    let position = fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(
        check_move(&position, sq("e1"), sq("g1")),
        Err(RejectReason::IllegalShape)
    );
    assert_eq!(
        check_move(&position, sq("e1"), sq("c1")),
        Err(RejectReason::IllegalShape)
    );
}

#[test]
fn test_queenside_castling_b_file_only_needs_to_be_empty() {
    // b1 attacked but not crossed by the king
    let position = fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(check_move(&position, sq("e1"), sq("c1")).is_ok());

    let blocked = fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert_eq!(
        check_move(&blocked, sq("e1"), sq("c1")),
        Err(RejectReason::BlockedPath)
    );
}

#[test]
fn test_castling_without_rights() {
    let position = fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1");
    assert_eq!(
        check_move(&position, sq("e1"), sq("g1")),
        Err(RejectReason::IllegalShape)
    );
}

#[test]
fn test_rook_capture_revokes_right() {
    let position = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let after = commit(&position, "a1", "a8");
    assert!(!after.castling().has(Color::White, CastleSide::Queenside));
    assert!(!after.castling().has(Color::Black, CastleSide::Queenside));
    assert!(after.castling().has(Color::Black, CastleSide::Kingside));
}

#[test]
fn test_pawn_forward_blocked() {
    let position = fen("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1");
    assert_eq!(
        check_move(&position, sq("e2"), sq("e3")),
        Err(RejectReason::BlockedPath)
    );
    assert_eq!(
        check_move(&position, sq("e2"), sq("e4")),
        Err(RejectReason::BlockedPath)
    );
}

#[test]
fn test_double_check_only_king_moves() {
    // Rook on e5 and bishop on b4 both give check
    let position = fen("4k3/8/8/4r3/1b6/8/8/R3K3 w - - 0 1");
    assert!(king_in_check(position.board(), Color::White));
    for mv in all_legal_moves(&position) {
        assert_eq!(mv.from, sq("e1"));
    }
}
