/// One line of input, split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Position(Vec<String>),
    Move(String),
    Legal(String),
    Status,
    Board,
    Fen,
    Perft(Option<String>),
    Options,
    SetOption(Vec<String>),
    Quit,
    /// A known command word missing its required argument.
    Incomplete(&'static str),
    Unknown(String),
}

/// Parse a line; blank lines yield `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let arg = |name| {
        parts
            .get(1)
            .map(|v| (*v).to_string())
            .ok_or(Command::Incomplete(name))
    };

    let cmd = match parts[0] {
        "newgame" | "reset" => Command::NewGame,
        "position" => Command::Position(owned_parts()),
        "move" => arg("move").map_or_else(|e| e, Command::Move),
        "legal" => arg("legal").map_or_else(|e| e, Command::Legal),
        "status" => Command::Status,
        "board" => Command::Board,
        "fen" => Command::Fen,
        "perft" => Command::Perft(parts.get(1).map(|v| (*v).to_string())),
        "options" => Command::Options,
        "setoption" => Command::SetOption(owned_parts()),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
