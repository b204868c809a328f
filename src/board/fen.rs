use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, EnPassantTarget, Piece, Position, Square};

/// FEN of the standard initial position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to `0` and `1`.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::Kingside),
                    'Q' => (Color::White, CastleSide::Queenside),
                    'k' => (Color::Black, CastleSide::Kingside),
                    'q' => (Color::Black, CastleSide::Queenside),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                castling.set(color, side);
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(parse_en_passant(parts[3], turn)?)
        };

        let halfmove_clock = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove_number = parse_counter(parts.get(5).copied(), 1)?;

        Ok(Position {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.board.piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let active = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |t| t.passed_square().to_string());

        format!(
            "{} {} {} {} {} {}",
            fen, active, self.castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col + 1,
                });
            }
            board.set_piece(Square::at(row, col), piece);
            col += 1;
        }
        if col > 8 {
            return Err(FenError::TooManyFiles {
                rank: row,
                files: col,
            });
        }
        if col < 8 {
            return Err(FenError::TooFewFiles {
                rank: row,
                files: col,
            });
        }
    }
    Ok(board)
}

/// The FEN field names the skipped square; the double-stepper is the side not to move.
fn parse_en_passant(field: &str, turn: Color) -> Result<EnPassantTarget, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let passed: Square = field.parse().map_err(|_| invalid())?;
    let mover = turn.opponent();
    let expected_row = (mover.pawn_start_row() as isize + mover.pawn_direction()) as usize;
    if passed.row() != expected_row {
        return Err(invalid());
    }
    EnPassantTarget::from_passed_square(passed, mover).ok_or_else(invalid)
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
            found: s.to_string(),
        }),
    }
}
