use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Board;
use crate::moves::attacks::slide_attacks;

#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> Vec<Square> {
    slide_attacks(board, square, &ROOK_DIRECTIONS)
}
