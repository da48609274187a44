use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, Square};

/// Sound cue a front end plays for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioType {
    Normal,
    Capture,
}

/// One applied move. Created by `apply_move`, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub audio_type: AudioType,
}

/// A numbered full move: white's half-move and black's reply, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePair<'a> {
    pub number: usize,
    pub white: &'a MoveRecord,
    pub black: Option<&'a MoveRecord>,
}

/// Groups a history into numbered full moves for display.
pub fn move_pairs(history: &[MoveRecord]) -> Vec<MovePair<'_>> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| MovePair {
            number: i + 1,
            white: &pair[0],
            black: pair.get(1),
        })
        .collect()
}
