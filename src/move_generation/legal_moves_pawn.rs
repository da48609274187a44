use crate::game_state::chess_types::{MoveKind, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::CandidateMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    let board = &game_state.board;
    let forward = piece.color.forward();

    // Pushes: the double step needs both squares ahead empty.
    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(CandidateMove::new(from, one_step, MoveKind::Move));

            if from.row == piece.color.pawn_home_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(CandidateMove::new(from, two_step, MoveKind::Move));
                    }
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match board.get(to) {
            Some(target) if target.color != piece.color => {
                out.push(CandidateMove::new(from, to, MoveKind::Capture));
            }
            Some(_) => {}
            None if game_state.en_passant_target == Some(to) => {
                let passed_pawn = to.offset(-forward, 0).and_then(|sq| board.get(sq));
                if matches!(
                    passed_pawn,
                    Some(p) if p.kind == PieceKind::Pawn && p.color != piece.color
                ) {
                    out.push(CandidateMove::new(from, to, MoveKind::EnPassant));
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, MoveKind, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::pseudo_moves;
    use crate::utils::algebraic::square_to_coord;

    fn sq(name: &str) -> Square {
        square_to_coord(name).expect("test square should parse")
    }

    #[test]
    fn home_pawn_may_step_once_or_twice() {
        let game = GameState::new_game();
        let moves = pseudo_moves(&game, sq("e2"));
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_placements(
            &[
                ("e2", PieceKind::Pawn, Color::White),
                ("e3", PieceKind::Knight, Color::Black),
                ("a1", PieceKind::King, Color::White),
                ("h8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        assert!(pseudo_moves(&game, sq("e2")).is_empty());
    }

    #[test]
    fn pawn_captures_only_diagonally_onto_enemies() {
        let game = GameState::from_placements(
            &[
                ("d4", PieceKind::Pawn, Color::Black),
                ("c3", PieceKind::Rook, Color::White),
                ("e3", PieceKind::Pawn, Color::Black),
                ("d3", PieceKind::Knight, Color::White),
                ("a1", PieceKind::King, Color::White),
                ("h8", PieceKind::King, Color::Black),
            ],
            Color::Black,
        )
        .expect("placements should be valid");
        let moves = pseudo_moves(&game, sq("d4"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("c3"));
        assert_eq!(moves[0].kind, MoveKind::Capture);
    }

    #[test]
    fn en_passant_is_offered_onto_the_skipped_square() {
        let mut game = GameState::from_placements(
            &[
                ("e5", PieceKind::Pawn, Color::White),
                ("d5", PieceKind::Pawn, Color::Black),
                ("a1", PieceKind::King, Color::White),
                ("h8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        game.en_passant_target = Some(sq("d6"));
        let moves = pseudo_moves(&game, sq("e5"));
        let ep = moves
            .iter()
            .find(|m| m.kind == MoveKind::EnPassant)
            .expect("en passant should be generated");
        assert_eq!(ep.to, sq("d6"));
    }
}
