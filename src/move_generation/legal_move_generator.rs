//! Legality filter.
//!
//! Narrows pseudo-legal moves to those that do not leave the mover's own
//! king in check, by trying each move on a scratch copy of the state. This
//! is the single place that guarantees no legal move exposes the king,
//! including discovered attacks along a line.

use crate::game_state::chess_types::{Color, MoveKind, Piece, PieceKind, Square};
use crate::game_state::game_state::{Board, GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    pseudo_moves, CandidateMove, GeneratedMove, MoveGenerator, PieceMoves,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState, color: Color) -> Vec<GeneratedMove> {
        all_pieces_with_moves(game_state, color)
            .into_iter()
            .flat_map(|entry| {
                let board = &game_state.board;
                entry.moves.into_iter().map(move |mv| GeneratedMove {
                    from: mv.from,
                    to: mv.to,
                    piece: entry.piece,
                    kind: mv.kind,
                    captured: captured_by(board, &mv),
                })
            })
            .collect()
    }
}

/// Copy of `game_state` with the piece on `from` relocated to `to` and no
/// other bookkeeping. An en passant capture also lifts the passed pawn so
/// that a rank opened by the capture is seen.
pub fn simulate_move(game_state: &GameState, from: Square, to: Square) -> GameState {
    let mut next = game_state.clone();
    let Some(piece) = next.board.take(from) else {
        return next;
    };

    if is_en_passant_capture(game_state, from, to) {
        if let Some(passed) = to.offset(-piece.color.forward(), 0) {
            next.board.take(passed);
        }
    }

    next.board.set(to, Some(piece));
    next
}

/// Legal moves of the piece on `square`. Empty if the square is empty or the
/// piece's side is not on move.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<CandidateMove> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };
    if piece.color != game_state.current_turn {
        return Vec::new();
    }

    pseudo_moves(game_state, square)
        .into_iter()
        .filter(|mv| {
            let after = simulate_move(game_state, mv.from, mv.to);
            !is_king_in_check(&after, piece.color)
        })
        .collect()
}

/// Every piece of `color` that has at least one legal move.
pub fn all_pieces_with_moves(game_state: &GameState, color: Color) -> Vec<PieceMoves> {
    game_state
        .board
        .pieces_of(color)
        .filter_map(|(square, piece)| {
            let moves = legal_moves(game_state, square);
            (!moves.is_empty()).then_some(PieceMoves {
                square,
                piece,
                moves,
            })
        })
        .collect()
}

/// True when `color` has any legal move. Stops at the first one found.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces_of(color)
        .any(|(square, _)| !legal_moves(game_state, square).is_empty())
}

fn is_en_passant_capture(game_state: &GameState, from: Square, to: Square) -> bool {
    from.col != to.col
        && game_state.en_passant_target == Some(to)
        && game_state.board.is_empty_at(to)
        && matches!(
            game_state.piece_at(from),
            Some(p) if p.kind == PieceKind::Pawn
        )
}

fn captured_by(board: &Board, mv: &CandidateMove) -> Option<Piece> {
    match mv.kind {
        MoveKind::EnPassant => Square::from_coords(i32::from(mv.from.row), i32::from(mv.to.col))
            .and_then(|passed| board.get(passed)),
        _ => board.get(mv.to),
    }
}
