use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::move_generation::move_generator::CandidateMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    generate_offset_moves(&game_state.board, from, piece, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, MoveKind, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::pseudo_moves;

    #[test]
    fn knight_captures_enemies_and_skips_friends() {
        let game = GameState::from_placements(
            &[
                ("d4", PieceKind::Knight, Color::White),
                ("e6", PieceKind::Pawn, Color::Black),
                ("c6", PieceKind::Pawn, Color::White),
                ("e1", PieceKind::King, Color::White),
                ("e8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        let moves = pseudo_moves(&game, Square::new(4, 3));
        assert_eq!(moves.len(), 7);
        let e6 = moves
            .iter()
            .find(|m| m.to == Square::new(2, 4))
            .expect("knight should reach e6");
        assert_eq!(e6.kind, MoveKind::Capture);
        assert!(moves.iter().all(|m| m.to != Square::new(2, 2)));
    }
}
