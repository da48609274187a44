//! Conversions between algebraic square names and grid coordinates.
//!
//! The grid is indexed `[row][col]` with row 0 holding rank 8 and column 0
//! holding file a, so `"a8"` is `(0, 0)` and `"h1"` is `(7, 7)`.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

/// True when `(row, col)` lies inside the 8x8 grid.
#[inline]
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Convert algebraic notation (for example: "e4") to grid coordinates.
pub fn square_to_coord(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert grid coordinates to algebraic notation (for example: "e4").
pub fn coord_to_square(row: i32, col: i32) -> Result<String, ChessError> {
    Square::from_coords(row, col)
        .map(|square| square.to_string())
        .ok_or_else(|| ChessError::InvalidSquare(format!("({row}, {col})")))
}
