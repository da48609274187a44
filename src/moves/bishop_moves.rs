use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Board;
use crate::moves::attacks::slide_attacks;

#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> Vec<Square> {
    slide_attacks(board, square, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::Board;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let board = Board::empty();
        assert_eq!(bishop_attacks(&board, Square::new(4, 3)).len(), 13);
    }

    #[test]
    fn bishop_stops_at_first_blocker() {
        let mut board = Board::empty();
        board.set(Square::new(2, 5), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let attacks = bishop_attacks(&board, Square::new(4, 3));
        assert!(attacks.contains(&Square::new(2, 5)));
        assert!(!attacks.contains(&Square::new(1, 6)));
    }
}
