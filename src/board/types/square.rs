//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as `(row, col)`.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank (rank 1);
/// col 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// All 64 squares in row-major order (a8, b8, ..., h1)
    pub const ALL: [Square; 64] = {
        let mut all = [Square { row: 0, col: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square {
                row: (i / 8) as u8,
                col: (i % 8) as u8,
            };
            i += 1;
        }
        all
    };

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from in-range coordinates.
    ///
    /// Callers guarantee `row < 8 && col < 8`.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Index 0-63 in row-major order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The square offset by `(d_row, d_col)`, if it stays on the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Signed `(to.row - from.row, to.col - from.col)`
    #[inline]
    #[must_use]
    pub(crate) fn delta(from: Square, to: Square) -> (isize, isize) {
        (
            to.row as isize - from.row as isize,
            to.col as isize - from.col as isize,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, 8 - self.row)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => (b'8' - bytes[1]) as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, col))
    }
}
