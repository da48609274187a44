//! JSON snapshots of a game in the browser client's field layout.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

pub fn to_json(game_state: &GameState) -> ChessResult<String> {
    Ok(serde_json::to_string(game_state)?)
}

pub fn to_json_pretty(game_state: &GameState) -> ChessResult<String> {
    Ok(serde_json::to_string_pretty(game_state)?)
}

pub fn from_json(text: &str) -> ChessResult<GameState> {
    Ok(serde_json::from_str(text)?)
}
