use crate::game_state::chess_types::GameStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Status of the position for the side on move.
pub fn compute_game_status(game_state: &GameState) -> GameStatus {
    let side = game_state.current_turn;
    let in_check = is_king_in_check(game_state, side);

    match (has_any_legal_move(game_state, side), in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Active,
    }
}
