//! Undo by replay.
//!
//! Rather than reversing a move's side effects, the position is rebuilt from
//! the game's recorded starting position by replaying all but the last
//! recorded move, so derived fields stay consistent with the history.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;

/// State before the last recorded move.
pub fn undo_last_move(game_state: &GameState) -> ChessResult<GameState> {
    let Some((_, kept)) = game_state.move_history.split_last() else {
        return Err(ChessError::NoHistoryToUndo);
    };

    kept.iter()
        .enumerate()
        .try_fold(
            GameState::from_start_position(game_state.start_position.clone()),
            |state, (index, record)| {
                apply_move(&state, record.from, record.to).map_err(|source| {
                    ChessError::ReplayFailed {
                        index,
                        source: Box::new(source),
                    }
                })
            },
        )
}

/// Undoes the last move and, when that leaves the opponent on move, the
/// human's move before it, so the human is on move again.
pub fn undo_turn(game_state: &GameState, human: Color) -> ChessResult<GameState> {
    let previous = undo_last_move(game_state)?;
    if previous.current_turn == human || previous.move_history.is_empty() {
        return Ok(previous);
    }
    undo_last_move(&previous)
}
