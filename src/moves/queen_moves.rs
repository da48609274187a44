use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Board;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut attacks = rook_attacks(board, square);
    attacks.extend(bishop_attacks(board, square));
    attacks
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::Board;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let board = Board::empty();
        assert_eq!(queen_attacks(&board, Square::new(4, 3)).len(), 27);
    }

    #[test]
    fn queen_attacks_match_union() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(Square::new(2, 3), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(3, 4), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let attacks = queen_attacks(&board, d4);

        assert!(attacks.contains(&Square::new(2, 3)));
        assert!(attacks.contains(&Square::new(3, 4)));
        assert!(!attacks.contains(&Square::new(1, 3)));
        assert!(!attacks.contains(&Square::new(2, 5)));
    }
}
