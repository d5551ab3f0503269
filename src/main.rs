//! Text driver for the rules engine.
//!
//! Reads moves from stdin, either as `e2e4` or as four integers `x y x y`,
//! prints the board after each move and reports check, checkmate and the
//! winner. `show e2` lists a piece's legal moves, `undo` takes back the last
//! move, `quit` leaves.
//!
//! Flags: `--vs-random` lets the engine play Black, `--seed N` fixes its
//! randomness, `--king-safety-only` disables the pin approximation.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use square_chess::chess_errors::ChessErrors;
use square_chess::engines::engine_random::RandomEngine;
use square_chess::engines::engine_trait::Engine;
use square_chess::game_state::chess_rules::{PinRule, RulesConfig};
use square_chess::game_state::chess_types::{Coordinate, GameState, Player};
use square_chess::utils::algebraic::{
    algebraic_move_to_coordinates, algebraic_to_coordinate, coordinate_to_algebraic,
};
use square_chess::utils::render_game_state::{render_game_state, render_with_targets};

#[derive(Debug, Default)]
struct Args {
    vs_random: bool,
    seed: Option<u64>,
    king_safety_only: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--vs-random" => args.vs_random = true,
            "--king-safety-only" => args.king_safety_only = true,
            "--seed" => {
                let value = raw.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                args.seed = Some(seed);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

enum Command {
    Move(Coordinate, Coordinate),
    Show(Coordinate),
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, ChessErrors> {
    let line = line.trim();
    match line {
        "quit" | "exit" => return Ok(Command::Quit),
        "undo" => return Ok(Command::Undo),
        _ => {}
    }

    if let Some(square) = line.strip_prefix("show ") {
        return Ok(Command::Show(algebraic_to_coordinate(square.trim())?));
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() == 4 {
        let from = Coordinate::parse_pair(&fields[0..2].join(" "))?;
        let to = Coordinate::parse_pair(&fields[2..4].join(" "))?;
        return Ok(Command::Move(from, to));
    }

    let (from, to) = algebraic_move_to_coordinates(line)?;
    Ok(Command::Move(from, to))
}

fn announce_position(game: &GameState) {
    println!("{}", render_game_state(game));

    if let Some(winner) = game.winner() {
        println!("{} won!", winner.name());
        return;
    }

    let side = game.current_turn();
    if game.in_checkmate(side) {
        info!("{} has no legal moves", side.name());
        println!("{} has no legal moves: checkmate.", side.name());
    } else if game.is_in_check(side) {
        println!("{} is in check.", side.name());
    }
}

fn finished(game: &GameState) -> bool {
    !game.playable() || game.in_checkmate(game.current_turn())
}

fn engine_turn(game: &mut GameState, engine: &mut RandomEngine) -> Result<(), ChessErrors> {
    let output = engine.choose_move(game)?;
    for line in &output.info_lines {
        log::debug!("{}: {line}", engine.name());
    }
    if let Some(chosen) = output.best_move {
        game.play_move(chosen.from, chosen.to)?;
        println!(
            "{} plays {}{}",
            engine.name(),
            coordinate_to_algebraic(chosen.from),
            coordinate_to_algebraic(chosen.to)
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let pin_rule = if args.king_safety_only {
        PinRule::KingSafetyOnly
    } else {
        PinRule::RayHeuristic
    };
    let mut game = GameState::with_config(RulesConfig::default().with_pin_rule(pin_rule));
    let mut engine = args
        .vs_random
        .then(|| args.seed.map_or_else(RandomEngine::new, RandomEngine::with_seed));

    announce_position(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !finished(&game) {
        if let Some(engine) = engine.as_mut() {
            if game.current_turn() == Player::Black {
                if let Err(err) = engine_turn(&mut game, engine) {
                    warn!("engine move failed: {err}");
                    break;
                }
                announce_position(&game);
                continue;
            }
        }

        print!("{} to move> ", game.current_turn().name());
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Undo) => {
                // Against the engine, take back its reply too.
                let steps = if engine.is_some() { 2 } else { 1 };
                for _ in 0..steps {
                    if let Err(err) = game.undo_last_move() {
                        println!("{err}");
                        break;
                    }
                }
                announce_position(&game);
            }
            Ok(Command::Show(square)) => match game.piece_at(square) {
                Some(piece) => {
                    let targets = game.possible_moves(&piece, square);
                    println!("{}", render_with_targets(&game, &targets));
                    let names: Vec<String> =
                        targets.into_iter().map(coordinate_to_algebraic).collect();
                    println!("{} on {}: {}", piece.code(), square, names.join(" "));
                }
                None => println!("{}", ChessErrors::EmptySquare(square)),
            },
            Ok(Command::Move(from, to)) => match game.play_move(from, to) {
                Ok(_) => announce_position(&game),
                Err(err) => println!("{err}"),
            },
            Err(err) => println!("{err}"),
        }
    }
}
