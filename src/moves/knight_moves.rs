use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::attacks::offset_attacks;

#[inline]
pub fn knight_attacks(square: Square) -> Vec<Square> {
    offset_attacks(square, &KNIGHT_OFFSETS)
}
