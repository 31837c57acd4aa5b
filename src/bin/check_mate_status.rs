use std::env;
use std::process::ExitCode;

use chess_rules::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        match game.apply_move_str(text) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("illegal move: {text}");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("bad move '{text}': {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let legal_moves = game.legal_moves_for_turn();
    println!("{}", game.current_board());
    println!("side_to_move: {}", game.current_turn());
    println!("status: {}", game.status());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
