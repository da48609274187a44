//! Check detection over raw attacks.
//!
//! Only `moves::attacks` is consulted here, never the legality filter, so
//! check detection can be used while deciding legality.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::{Board, GameState};
use crate::moves::attacks::attacks_square;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.king_square(color)
}

/// True when the king of `color` is attacked. A board without that king is
/// never in check.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(&game_state.board, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| attacks_square(board, from, piece, square))
}

/// Every piece of `attacker_color` that attacks `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| attacks_square(board, from, piece, square))
        .map(|(from, _)| from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::{Board, GameState};

    #[test]
    fn nobody_is_in_check_at_the_start() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn sliding_check_is_blocked_by_any_piece() {
        let open = GameState::from_placements(
            &[
                ("e1", PieceKind::King, Color::White),
                ("e8", PieceKind::Rook, Color::Black),
                ("a8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        assert!(is_king_in_check(&open, Color::White));

        let blocked = GameState::from_placements(
            &[
                ("e1", PieceKind::King, Color::White),
                ("e4", PieceKind::Pawn, Color::Black),
                ("e8", PieceKind::Rook, Color::Black),
                ("a8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        assert!(!is_king_in_check(&blocked, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut game = GameState::new_game();
        game.board = Board::empty();
        assert!(!is_king_in_check(&game, Color::White));
    }

    #[test]
    fn pawn_and_knight_attackers_are_found() {
        let game = GameState::new_game();
        // f3 is covered by the e2 and g2 pawns and the g1 knight.
        let f3 = Square::new(5, 5);
        assert!(is_square_attacked(&game.board, f3, Color::White));
        assert!(!is_square_attacked(&game.board, f3, Color::Black));
        assert_eq!(attackers_to_square(&game.board, f3, Color::White).len(), 3);
    }
}
