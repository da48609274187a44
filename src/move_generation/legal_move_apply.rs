use chrono::Utc;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{CastleSide, Color, MoveKind, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::{AudioType, MoveRecord};
use crate::move_generation::game_status::compute_game_status;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::CandidateMove;

/// Applies the move `from -> to` and returns the resulting state.
///
/// The input is never modified. Fails, in this order, when `from` is empty,
/// when the piece there is not on move, or when `to` is not one of its legal
/// destinations.
pub fn apply_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<GameState> {
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSource(from))?;

    if piece.color != game_state.current_turn {
        return Err(ChessError::WrongTurn {
            square: from,
            piece_color: piece.color,
            current_turn: game_state.current_turn,
        });
    }

    let candidate = legal_moves(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or(ChessError::IllegalMove { from, to })?;

    Ok(apply_candidate(game_state, piece, candidate))
}

fn apply_candidate(game_state: &GameState, piece: Piece, mv: CandidateMove) -> GameState {
    let mover = piece.color;
    let mut next = game_state.clone();

    next.board.take(mv.from);
    let mut captured = next.board.take(mv.to);

    if mv.kind == MoveKind::EnPassant {
        captured = mv
            .to
            .offset(-mover.forward(), 0)
            .and_then(|passed| next.board.take(passed));
    }
    if let Some(taken) = captured {
        next.captured_pieces.push(taken);
    }

    if let Some(side) = mv.kind.castle_side() {
        let row = mv.from.row;
        if let Some(rook) = next.board.take(Square::new(row, side.rook_home_col())) {
            next.board
                .set(Square::new(row, side.rook_target_col()), Some(rook.moved()));
        }
    }

    let promoted = piece.kind == PieceKind::Pawn && mv.to.row == mover.promotion_row();
    let placed = if promoted {
        Piece::new(PieceKind::Queen, mover).moved()
    } else {
        piece.moved()
    };
    next.board.set(mv.to, Some(placed));

    next.en_passant_target = double_step_midpoint(piece, mv.from, mv.to);
    update_castling_rights(&mut next, piece, mv.from, mv.to);

    next.move_history.push(MoveRecord {
        from: mv.from,
        to: mv.to,
        piece,
        captured,
        notation: move_notation(piece, mv.from, mv.to, mv.kind, promoted),
        timestamp: Utc::now().timestamp_millis(),
        audio_type: if captured.is_some() {
            AudioType::Capture
        } else {
            AudioType::Normal
        },
    });

    next.current_turn = mover.opposite();
    next.game_status = compute_game_status(&next);
    next
}

fn double_step_midpoint(piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece.kind != PieceKind::Pawn || from.row.abs_diff(to.row) != 2 {
        return None;
    }
    Some(Square::new((from.row + to.row) / 2, from.col))
}

fn update_castling_rights(game_state: &mut GameState, piece: Piece, from: Square, to: Square) {
    if piece.kind == PieceKind::King {
        game_state.castling_rights.revoke_all(piece.color);
    }

    for color in [Color::White, Color::Black] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let home = Square::new(color.back_row(), side.rook_home_col());
            // A rook leaving home, or being captured there, ends that right.
            let rook_left = piece.kind == PieceKind::Rook && piece.color == color && from == home;
            if rook_left || to == home {
                game_state.castling_rights.revoke(color, side);
            }
        }
    }
}

/// Short algebraic rendering of a move, e.g. `Nf3`, `exd5`, `e8=Q`, `O-O`.
pub fn move_notation(
    piece: Piece,
    from: Square,
    to: Square,
    kind: MoveKind,
    promoted: bool,
) -> String {
    match kind {
        MoveKind::CastleKingside => return "O-O".to_owned(),
        MoveKind::CastleQueenside => return "O-O-O".to_owned(),
        _ => {}
    }

    let mut notation = String::with_capacity(6);
    if let Some(letter) = piece.kind.letter() {
        notation.push(letter);
    }
    if kind.is_capture() {
        if piece.kind == PieceKind::Pawn {
            notation.push(from.file_char());
        }
        notation.push('x');
    }
    notation.push_str(&to.to_string());
    if promoted {
        notation.push_str("=Q");
    }
    notation
}
