use crate::game_state::chess_types::{Color, Square};

/// The two diagonal-forward squares, where on the board.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> Vec<Square> {
    let forward = color.forward();
    [-1i8, 1]
        .iter()
        .filter_map(|&d_col| square.offset(forward, d_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_pawns_attack_up_the_board_and_black_pawns_down() {
        let d4 = Square::new(4, 3);
        let white = pawn_attacks(Color::White, d4);
        assert_eq!(white, vec![Square::new(3, 2), Square::new(3, 4)]);
        let black = pawn_attacks(Color::Black, d4);
        assert_eq!(black, vec![Square::new(5, 2), Square::new(5, 4)]);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        assert_eq!(pawn_attacks(Color::White, Square::new(6, 0)).len(), 1);
        assert_eq!(pawn_attacks(Color::Black, Square::new(1, 7)).len(), 1);
    }
}
