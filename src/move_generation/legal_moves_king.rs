use crate::game_state::chess_rules::{KING_HOME_COL, KING_OFFSETS};
use crate::game_state::chess_types::{CastleSide, MoveKind, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::simulate_move;
use crate::move_generation::legal_move_shared::generate_offset_moves;
use crate::move_generation::move_generator::CandidateMove;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    generate_offset_moves(&game_state.board, from, piece, &KING_OFFSETS, out);

    // Cannot castle with a moved king or out of check.
    if piece.has_moved || is_king_in_check(game_state, piece.color) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(game_state, from, piece, side) {
            let to = Square::new(from.row, side.king_target_col());
            let kind = match side {
                CastleSide::Kingside => MoveKind::CastleKingside,
                CastleSide::Queenside => MoveKind::CastleQueenside,
            };
            out.push(CandidateMove::new(from, to, kind));
        }
    }
}

fn can_castle(game_state: &GameState, from: Square, king: Piece, side: CastleSide) -> bool {
    let row = king.color.back_row();
    if from != Square::new(row, KING_HOME_COL)
        || !game_state.castling_rights.allows(king.color, side)
    {
        return false;
    }

    let rook_ready = matches!(
        game_state.board.get(Square::new(row, side.rook_home_col())),
        Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
    );
    if !rook_ready {
        return false;
    }

    let path_clear = side
        .between_cols()
        .iter()
        .all(|&col| game_state.board.is_empty_at(Square::new(row, col)));
    if !path_clear {
        return false;
    }

    // The king may not pass through or land on an attacked square.
    side.king_path_cols().iter().all(|&col| {
        let arrived = simulate_move(game_state, from, Square::new(row, col));
        !is_king_in_check(&arrived, king.color)
    })
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

    fn castle_kinds(game: &GameState, king: &str) -> Vec<MoveKind> {
        pseudo_moves(game, sq(king))
            .into_iter()
            .map(|m| m.kind)
            .filter(|k| k.castle_side().is_some())
            .collect()
    }

    fn castling_position(extra: &[(&'static str, PieceKind, Color)]) -> GameState {
        let mut placements = vec![
            ("e1", PieceKind::King, Color::White),
            ("a1", PieceKind::Rook, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ];
        placements.extend_from_slice(extra);
        GameState::from_placements(&placements, Color::White).expect("placements should be valid")
    }

    #[test]
    fn both_castles_offered_on_a_quiet_back_rank() {
        let game = castling_position(&[]);
        let kinds = castle_kinds(&game, "e1");
        assert_eq!(kinds, vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]);
    }

    #[test]
    fn castling_through_an_attacked_square_is_refused() {
        // Black rook on f8 covers f1.
        let game = castling_position(&[("f8", PieceKind::Rook, Color::Black)]);
        assert_eq!(castle_kinds(&game, "e1"), vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn castling_out_of_check_is_refused() {
        let game = castling_position(&[("e5", PieceKind::Rook, Color::Black)]);
        assert!(castle_kinds(&game, "e1").is_empty());
    }

    #[test]
    fn queenside_needs_b_file_empty_but_not_safe() {
        // b1 only has to be empty; an attack on it does not matter.
        let attacked_b1 = castling_position(&[("b8", PieceKind::Rook, Color::Black)]);
        assert!(castle_kinds(&attacked_b1, "e1").contains(&MoveKind::CastleQueenside));

        let occupied_b1 = castling_position(&[("b1", PieceKind::Knight, Color::White)]);
        assert!(!castle_kinds(&occupied_b1, "e1").contains(&MoveKind::CastleQueenside));
    }

    #[test]
    fn revoked_right_blocks_castling() {
        let mut game = castling_position(&[]);
        game.castling_rights.white_kingside = false;
        assert_eq!(castle_kinds(&game, "e1"), vec![MoveKind::CastleQueenside]);
    }
}
