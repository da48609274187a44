//! Raw attack generation.
//!
//! Computes the squares a piece threatens from where it stands, ignoring
//! whether the owner's king would be left exposed. Check detection is built
//! on top of this, so nothing in this module may consult move legality.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::Board;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Every square `piece` on `square` threatens.
pub fn piece_attacks(board: &Board, square: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(board, square),
        PieceKind::Rook => rook_attacks(board, square),
        PieceKind::Queen => queen_attacks(board, square),
        PieceKind::King => king_attacks(square),
    }
}

/// True when `piece` on `from` threatens `target`.
#[inline]
pub fn attacks_square(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    piece_attacks(board, from, piece).contains(&target)
}

/// Walks each direction until the board edge or the first occupied square.
/// The blocking square is included whatever its color.
pub fn slide_attacks(board: &Board, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut attacks = Vec::with_capacity(14);
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            attacks.push(square);
            if !board.is_empty_at(square) {
                break;
            }
            cursor = square.offset(d_row, d_col);
        }
    }
    attacks
}

/// Squares at fixed offsets from `from` that are on the board.
pub fn offset_attacks(from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}
