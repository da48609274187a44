use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_slide_moves;
use crate::move_generation::move_generator::CandidateMove;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    generate_slide_moves(&game_state.board, from, piece, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, MoveKind, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::pseudo_moves;

    #[test]
    fn rook_slides_until_blocked_and_never_past_a_friend() {
        let game = GameState::from_placements(
            &[
                ("a1", PieceKind::Rook, Color::White),
                ("a4", PieceKind::Pawn, Color::White),
                ("d1", PieceKind::Bishop, Color::Black),
                ("h1", PieceKind::King, Color::White),
                ("h8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        let moves = pseudo_moves(&game, Square::new(7, 0));
        // a2, a3 up; b1, c1, xd1 across.
        assert_eq!(moves.len(), 5);
        let captures: Vec<_> = moves.iter().filter(|m| m.kind == MoveKind::Capture).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, Square::new(7, 3));
    }
}
