use crate::game_state::chess_types::{MoveKind, Piece, Square};
use crate::game_state::game_state::Board;
use crate::move_generation::move_generator::CandidateMove;

/// Pushes a step onto `to`: a quiet move if empty, a capture if an enemy
/// stands there, nothing if a friendly piece does.
#[inline]
pub fn push_step_or_capture(
    board: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    match board.get(to) {
        None => out.push(CandidateMove::new(from, to, MoveKind::Move)),
        Some(target) if target.color != piece.color => {
            out.push(CandidateMove::new(from, to, MoveKind::Capture))
        }
        Some(_) => {}
    }
}

/// Fixed-offset moves for knights and kings.
pub fn generate_offset_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<CandidateMove>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            push_step_or_capture(board, from, to, piece, out);
        }
    }
}

/// Sliding moves: quiet moves until the first occupied square, which is a
/// capture if it holds an enemy and a stop otherwise.
pub fn generate_slide_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<CandidateMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            if !board.is_empty_at(to) {
                push_step_or_capture(board, from, to, piece, out);
                break;
            }
            out.push(CandidateMove::new(from, to, MoveKind::Move));
            cursor = to.offset(d_row, d_col);
        }
    }
}
