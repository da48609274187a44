//! Canonical chess-rule constants.
//!
//! Static layout and scoring literals used to set up the starting position
//! and to rank candidate moves.

use crate::game_state::chess_types::PieceKind;

/// Back-rank order from file a to file h.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column both kings start on.
pub const KING_HOME_COL: u8 = 4;

/// Rows of the four center squares d4, e4, d5, e5.
pub const CENTER_ROWS: [u8; 2] = [3, 4];
/// Columns of the four center squares.
pub const CENTER_COLS: [u8; 2] = [3, 4];

/// Knight jump offsets as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets as `(d_row, d_col)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Half-moves that count as the opening for the hard tier's development
/// penalty.
pub const OPENING_HALF_MOVES: usize = 10;
