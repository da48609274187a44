use crate::game_state::chess_rules::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_slide_moves;
use crate::move_generation::move_generator::CandidateMove;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    generate_slide_moves(&game_state.board, from, piece, &ROOK_DIRECTIONS, out);
    generate_slide_moves(&game_state.board, from, piece, &BISHOP_DIRECTIONS, out);
}
