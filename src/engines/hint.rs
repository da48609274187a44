//! Move suggestions for the human player.

use serde::{Deserialize, Serialize};

use crate::engines::computer_player::{think, Difficulty};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub from: Square,
    pub to: Square,
    pub piece_type: PieceKind,
    /// Score the tier ranked the move by; zero for the easy tier.
    pub confidence: i32,
}

/// Hint for a human playing white.
pub fn get_hint(game_state: &GameState, difficulty: Difficulty) -> ChessResult<Option<Hint>> {
    get_hint_for(game_state, Color::White, difficulty, None)
}

/// Suggests a move for `human`, or `None` unless it is the human's turn in
/// an active game. The state is not modified.
pub fn get_hint_for(
    game_state: &GameState,
    human: Color,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> ChessResult<Option<Hint>> {
    if game_state.current_turn != human || game_state.game_status != GameStatus::Active {
        return Ok(None);
    }

    let output = think(game_state, human, difficulty, seed)?;
    Ok(output.best_move.map(|mv| Hint {
        from: mv.from,
        to: mv.to,
        piece_type: mv.piece.kind,
        confidence: mv.score,
    }))
}
