use std::env;
use std::process::ExitCode;

use chess_rules::game;
use chess_rules::protocol::try_parse_position_command;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut parts: Vec<&str> = vec!["position", "startpos", "moves"];
    parts.extend(args.iter().skip(1).map(String::as_str));

    let state = match try_parse_position_command(&parts) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let legal_moves = chess_rules::board::all_legal_moves(state.position());
    let status = game::status(&state);
    println!("side_to_move: {}", state.turn());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    println!(
        "checkmate: {}",
        matches!(status, chess_rules::GameStatus::Checkmate(_))
    );
    println!(
        "stalemate: {}",
        matches!(status, chess_rules::GameStatus::Stalemate)
    );
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
