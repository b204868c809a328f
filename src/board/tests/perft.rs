//! Perft over the legality filter.
//!
//! Promotion is queen-only, so only positions whose counts at the tested
//! depths involve no promotion are listed.

use crate::board::{perft, Position};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
];

fn check_position(test: &TestPosition) {
    let position: Position = test.fen.parse().unwrap();
    for &(depth, expected) in test.depths {
        assert_eq!(
            perft(&position, depth),
            expected,
            "{} at depth {}",
            test.name,
            depth
        );
    }
}

#[test]
fn test_perft_suite() {
    for test in TEST_POSITIONS {
        check_position(test);
    }
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_initial_depth_4() {
    assert_eq!(perft(&Position::new(), 4), 197_281);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_position_3_depth_5() {
    let position: Position = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap();
    assert_eq!(perft(&position, 5), 674_624);
}
