use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use mystic_chess::config::PlayConfig;
use mystic_chess::engines::computer_player::engine_for;
use mystic_chess::engines::engine_trait::Engine;
use mystic_chess::engines::hint::get_hint_for;
use mystic_chess::errors::ChessResult;
use mystic_chess::game_state::chess_types::Color;
use mystic_chess::game_state::game_state::GameState;
use mystic_chess::game_state::move_record::move_pairs;
use mystic_chess::game_state::undo_state::undo_turn;
use mystic_chess::move_generation::legal_move_apply::apply_move;
use mystic_chess::utils::game_json::to_json_pretty;
use mystic_chess::utils::long_algebraic::apply_long_algebraic;
use mystic_chess::utils::render_game_state::{render_captured, render_game_state};

const HELP: &str = "commands: <from><to> (e.g. e2e4), undo, hint, new, json, help, quit";

fn main() -> ExitCode {
    let config = match PlayConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: mystic_chess [--difficulty easy|medium|hard] [--color white|black] [--seed N] [--verbose]"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: PlayConfig) -> ChessResult<()> {
    let mut engine = engine_for(config.difficulty, config.seed);
    let mut game = GameState::new_game();

    println!(
        "Mystic Chess: you play {} against the {} ({})",
        config.human_color,
        config.difficulty.title(),
        config.difficulty.description()
    );
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        if game.current_turn == config.computer_color() && !game.game_status.is_terminal() {
            game = computer_turn(engine.as_mut(), &game, &config)?;
        }

        show(&game);
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        match stdin_lock.read_line(&mut input) {
            Ok(0) | Err(_) => return Ok(()),
            Ok(_) => {}
        }

        match input.trim() {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "help" => println!("{HELP}"),
            "new" => {
                engine.new_game();
                game = GameState::new_game();
            }
            "undo" => match undo_turn(&game, config.human_color) {
                Ok(previous) => game = previous,
                Err(err) => println!("{err}"),
            },
            "hint" => match get_hint_for(&game, config.human_color, config.difficulty, config.seed)? {
                Some(hint) => println!(
                    "hint: {} {}{} (score {})",
                    hint.piece_type, hint.from, hint.to, hint.confidence
                ),
                None => println!("no hint available"),
            },
            "json" => println!("{}", to_json_pretty(&game)?),
            text => {
                if game.game_status.is_terminal() {
                    println!("the game is over; type new to play again");
                    continue;
                }
                match apply_long_algebraic(&game, text) {
                    Ok(next) => game = next,
                    Err(err) => println!("{err}"),
                }
            }
        }
    }
}

fn computer_turn(
    engine: &mut dyn Engine,
    game: &GameState,
    config: &PlayConfig,
) -> ChessResult<GameState> {
    let output = engine.choose_move(game, config.computer_color())?;
    if config.verbose {
        for line in &output.info_lines {
            println!("{line}");
        }
    }

    match output.best_move {
        Some(chosen) => {
            let next = apply_move(game, chosen.from, chosen.to)?;
            if let Some(record) = next.move_history.last() {
                println!("{} plays {}", engine.name(), record.notation);
            }
            Ok(next)
        }
        None => Ok(game.clone()),
    }
}

fn show(game: &GameState) {
    println!();
    println!("{}", render_game_state(game));
    for color in [Color::White, Color::Black] {
        let taken = render_captured(game, color);
        if !taken.is_empty() {
            println!("{} lost: {taken}", color);
        }
    }
    let advantage = game.captured_pieces.material_advantage();
    if advantage != 0 {
        let leader = if advantage < 0 { Color::White } else { Color::Black };
        println!("{leader} is up {} points", advantage.abs());
    }
    if let Some(pair) = move_pairs(&game.move_history).last() {
        match pair.black {
            Some(black) => println!("{}. {} {}", pair.number, pair.white.notation, black.notation),
            None => println!("{}. {}", pair.number, pair.white.notation),
        }
    }
    println!("{}", game.status_message());
}
