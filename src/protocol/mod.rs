//! Line-oriented text protocol driving one game.
//!
//! Reads commands from any `BufRead`, answers on any `Write`. Bad input is
//! answered with an `error:` line and never ends the session.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{perft, FenError, Move, MoveParseError, RejectReason, Square, SquareError};
use crate::game::{self, GameState, MoveResult};

pub mod command;
pub mod logger;
pub mod options;
pub mod print;

use command::{parse_command, Command};
use options::{parse_setoption, SessionOptions};

/// Deepest `perft` the protocol will run.
pub const MAX_PERFT_DEPTH: usize = 6;

/// Error type for protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Unparsable move text
    InvalidMove { move_str: String, error: MoveParseError },
    /// Well-formed move refused by the rules
    IllegalMove { move_str: String, reason: RejectReason },
    InvalidSquare(SquareError),
    /// Missing required arguments for the named command
    MissingArguments(&'static str),
    InvalidDepth(String),
    UnknownOption(String),
    InvalidOptionValue { name: String, value: String },
    UnknownCommand(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidFen(e) => write!(f, "invalid FEN: {e}"),
            ProtocolError::InvalidMove { move_str, error } => {
                write!(f, "invalid move '{move_str}': {error}")
            }
            ProtocolError::IllegalMove { move_str, reason } => {
                write!(f, "illegal move '{move_str}': {reason}")
            }
            ProtocolError::InvalidSquare(e) => write!(f, "{e}"),
            ProtocolError::MissingArguments(cmd) => write!(f, "missing arguments for '{cmd}'"),
            ProtocolError::InvalidDepth(found) => {
                write!(f, "invalid perft depth '{found}' (1-{MAX_PERFT_DEPTH})")
            }
            ProtocolError::UnknownOption(name) => write!(f, "unknown option '{name}'"),
            ProtocolError::InvalidOptionValue { name, value } => {
                write!(f, "invalid value '{value}' for option '{name}'")
            }
            ProtocolError::UnknownCommand(line) => write!(f, "unknown command '{line}'"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<FenError> for ProtocolError {
    fn from(e: FenError) -> Self {
        ProtocolError::InvalidFen(e)
    }
}

impl From<SquareError> for ProtocolError {
    fn from(e: SquareError) -> Self {
        ProtocolError::InvalidSquare(e)
    }
}

fn parse_move(move_str: &str) -> Result<Move, ProtocolError> {
    move_str.parse().map_err(|error| ProtocolError::InvalidMove {
        move_str: move_str.to_string(),
        error,
    })
}

/// Build a game from `position startpos|fen <fields> [moves m1 m2 ...]`.
///
/// # Errors
/// Fails on a malformed FEN or move, or on the first move the rules refuse.
pub fn try_parse_position_command(parts: &[&str]) -> Result<GameState, ProtocolError> {
    let moves_at = parts.iter().position(|p| *p == "moves").unwrap_or(parts.len());
    let setup = parts.get(1..moves_at).unwrap_or_default();

    let mut state = match setup {
        ["startpos"] => game::new_game(),
        ["fen", fields @ ..] if !fields.is_empty() => game::from_fen(&fields.join(" "))?,
        _ => return Err(ProtocolError::MissingArguments("position")),
    };

    for move_str in parts.iter().skip(moves_at + 1) {
        let mv = parse_move(move_str)?;
        let (next, result) = game::apply_move(&state, mv.from, mv.to);
        if let MoveResult::Rejected(reason) = result {
            return Err(ProtocolError::IllegalMove {
                move_str: (*move_str).to_string(),
                reason,
            });
        }
        state = next;
    }

    Ok(state)
}

/// One protocol session: the current game plus its options.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    options: SessionOptions,
}

impl Session {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Session {
            state: game::new_game(),
            options,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Execute one command. Returns `Ok(false)` once the session should end.
    ///
    /// # Errors
    /// Only I/O errors on `out` propagate; command failures are written as
    /// `error:` lines.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match self.execute(cmd, out) {
            Ok(keep_going) => Ok(keep_going),
            Err(Outcome::Io(e)) => Err(e),
            Err(Outcome::Protocol(e)) => {
                warn!("{e}");
                writeln!(out, "error: {e}")?;
                Ok(true)
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, Outcome> {
        match cmd {
            Command::NewGame => self.state = game::reset(),
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.state = try_parse_position_command(&parts)?;
            }
            Command::Move(move_str) => {
                let mv = parse_move(&move_str)?;
                let (next, result) = game::apply_move(&self.state, mv.from, mv.to);
                self.state = next;
                writeln!(out, "{result}")?;
                if result.is_applied() {
                    self.after_applied(out)?;
                }
            }
            Command::Legal(square) => {
                let from: Square = square.parse().map_err(ProtocolError::from)?;
                let destinations = game::legal_moves_from(&self.state, from);
                writeln!(out, "{}", print::legal_line(from, &destinations))?;
            }
            Command::Status => writeln!(out, "{}", print::status_line(&self.state))?,
            Command::Board => print::write_board(out, &self.state)?,
            Command::Fen => writeln!(out, "{}", game::to_fen(&self.state))?,
            Command::Perft(depth) => {
                let depth = parse_depth(depth.as_deref())?;
                let start = Instant::now();
                let nodes = perft(self.state.position(), depth);
                print::write_perft(out, depth, nodes, start.elapsed())?;
            }
            Command::Options => self.options.print(out)?,
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) =
                    parse_setoption(&parts).ok_or(ProtocolError::MissingArguments("setoption"))?;
                self.options.apply_setoption(&name, value.as_deref())?;
                debug!("option '{name}' set to {value:?}");
            }
            Command::Quit => return Ok(false),
            Command::Incomplete(name) => return Err(ProtocolError::MissingArguments(name).into()),
            Command::Unknown(line) => return Err(ProtocolError::UnknownCommand(line).into()),
        }
        Ok(true)
    }

    fn after_applied<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.show_board {
            print::write_board(out, &self.state)?;
        }
        if self.options.show_legal {
            let count = crate::board::all_legal_moves(self.state.position()).len();
            writeln!(out, "legal moves: {count}")?;
        }
        Ok(())
    }
}

enum Outcome {
    Io(io::Error),
    Protocol(ProtocolError),
}

impl From<io::Error> for Outcome {
    fn from(e: io::Error) -> Self {
        Outcome::Io(e)
    }
}

impl From<ProtocolError> for Outcome {
    fn from(e: ProtocolError) -> Self {
        Outcome::Protocol(e)
    }
}

fn parse_depth(depth: Option<&str>) -> Result<usize, ProtocolError> {
    let Some(text) = depth else {
        return Ok(1);
    };
    text.parse::<usize>()
        .ok()
        .filter(|d| (1..=MAX_PERFT_DEPTH).contains(d))
        .ok_or_else(|| ProtocolError::InvalidDepth(text.to_string()))
}

/// Run commands from `input` until `quit` or end of input.
///
/// # Errors
/// Propagates I/O errors from either stream.
pub fn run_loop<R: BufRead, W: Write>(input: R, out: &mut W, options: SessionOptions) -> io::Result<()> {
    let mut session = Session::new(options);
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        let keep_going = session.handle(cmd, out)?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}
