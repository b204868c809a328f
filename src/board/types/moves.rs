//! Move request, en-passant target and move classification types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, PieceKind};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: origin and destination square.
///
/// Promotion is implied (always to a queen), so no promotion piece is carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parse long algebraic notation (`"e2e4"`, optionally `"e7e8q"`).
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        if let Some(c) = s[4..].chars().next() {
            if PieceKind::from_char(c) != Some(PieceKind::Queen) {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
        }

        Ok(Move { from, to })
    }
}

/// The pawn that just made a double step, capturable en passant on the next move only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassantTarget {
    /// Square the double-stepping pawn landed on
    pub square: Square,
    /// Color of the double-stepping pawn
    pub color: Color,
}

impl EnPassantTarget {
    /// The square the pawn passed over; a capturing pawn lands here.
    #[must_use]
    pub fn passed_square(self) -> Square {
        self.square
            .offset(-self.color.pawn_direction(), 0)
            .unwrap_or(self.square)
    }

    /// Rebuild the target from the passed-over square (as written in FEN).
    ///
    /// `color` is the side that made the double step.
    #[must_use]
    pub fn from_passed_square(passed: Square, color: Color) -> Option<Self> {
        let square = passed.offset(color.pawn_direction(), 0)?;
        Some(EnPassantTarget { square, color })
    }
}

/// What a geometrically valid move does to the board besides relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain step or capture on the destination square
    Normal,
    /// Pawn advanced two rows from its start row
    DoubleStep,
    /// Pawn captured en passant; `captured` is the square of the removed pawn
    EnPassant { captured: Square },
    /// King moved two columns; the rook relocates as well
    Castle {
        side: CastleSide,
        rook_from: Square,
        rook_to: Square,
    },
}
