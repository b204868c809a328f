//! Precomputed attack masks for leaper pieces (knights, kings, pawns).
//!
//! Bit `i` of a mask stands for the square with row-major index `i`.

use once_cell::sync::Lazy;

use super::{Color, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (slot, sq) in attacks.iter_mut().zip(Square::ALL) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .fold(0u64, |mask, to| mask | bit(to));
    }
    attacks
}

#[inline]
pub(crate) const fn bit(sq: Square) -> u64 {
    1u64 << sq.index()
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Diagonal-forward capture squares, indexed by `[color][square]`
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        attacks[color.index()] = leaper_table(&[(dir, -1), (dir, 1)]);
    }
    attacks
});
