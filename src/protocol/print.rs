use std::io::{self, Write};
use std::time::Duration;

use crate::board::Square;
use crate::game::GameState;

/// ASCII board with rank 8 at the top; `.` marks an empty square.
pub fn write_board<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    for (row, rank) in state.board_snapshot().iter().enumerate() {
        let cells: Vec<String> = rank
            .iter()
            .map(|cell| cell.map_or('.', |p| p.to_fen_char()).to_string())
            .collect();
        writeln!(out, "{} {}", 8 - row, cells.join(" "))?;
    }
    writeln!(out, "  a b c d e f g h")
}

#[must_use]
pub fn status_line(state: &GameState) -> String {
    let status = state.status();
    if status.is_terminal() {
        format!("status: {status}")
    } else {
        format!("status: {status} ({} to move)", state.turn())
    }
}

/// Destinations in algebraic order.
#[must_use]
pub fn legal_line(from: Square, destinations: &[Square]) -> String {
    let mut names: Vec<String> = destinations.iter().map(ToString::to_string).collect();
    names.sort();
    format!("legal {from}: {}", names.join(" "))
}

pub fn write_perft<W: Write>(out: &mut W, depth: usize, nodes: u64, elapsed: Duration) -> io::Result<()> {
    writeln!(
        out,
        "perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::new_game;

    #[test]
    fn test_board_layout() {
        let mut out = Vec::new();
        write_board(&mut out, &new_game()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_status_and_legal_lines() {
        let state = new_game();
        assert_eq!(status_line(&state), "status: in progress (white to move)");
        let e2: Square = "e2".parse().unwrap();
        let dests = crate::game::legal_moves_from(&state, e2);
        assert_eq!(legal_line(e2, &dests), "legal e2: e3 e4");
    }
}
