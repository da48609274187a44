use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::moves::attacks::offset_attacks;

#[inline]
pub fn king_attacks(square: Square) -> Vec<Square> {
    offset_attacks(square, &KING_OFFSETS)
}
