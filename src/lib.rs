//! Crate root module declarations for the Mystic Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, attack and move
//! generation, move scoring, the computer player tiers, and utility helpers)
//! so the terminal binary, tests, and benches can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
    pub mod undo_state;
}

pub mod moves {
    pub mod attacks;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod computer_player;
    pub mod engine_greedy;
    pub mod engine_positional;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod hint;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen;
    pub mod game_json;
    pub mod long_algebraic;
    pub mod render_game_state;
}
