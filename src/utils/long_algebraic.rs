//! Coordinate move text such as `e2e4`, as typed at the terminal.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::algebraic::square_to_coord;

/// Splits `e2e4` into its two squares. A trailing promotion letter is
/// accepted and ignored since pawns always promote to a queen.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let valid_len = text.len() == 4 || (text.len() == 5 && text.ends_with(['q', 'Q']));
    if !valid_len || !text.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let from = square_to_coord(&text[0..2])?;
    let to = square_to_coord(&text[2..4])?;
    Ok((from, to))
}

/// Renders a move as `e2e4`.
pub fn to_long_algebraic(from: Square, to: Square) -> String {
    format!("{from}{to}")
}

/// Parses `text` and applies it to `game_state`.
pub fn apply_long_algebraic(game_state: &GameState, text: &str) -> ChessResult<GameState> {
    let (from, to) = parse_long_algebraic(text)?;
    apply_move(game_state, from, to)
}
