//! Move generation vocabulary and the pseudo-legal dispatcher.
//!
//! A pseudo-legal move follows the moving piece's geometry and the board's
//! occupancy but may still leave its own king in check. The legality filter
//! in `legal_move_generator` narrows these down.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, MoveKind, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// A move from one square to another, tagged with how it is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    #[serde(rename = "type")]
    pub kind: MoveKind,
}

impl CandidateMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }
}

/// A piece of the side to move together with all its legal moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub square: Square,
    pub piece: Piece,
    pub moves: Vec<CandidateMove>,
}

/// A legal move enriched with what it moves and what it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub kind: MoveKind,
    /// The piece removed by this move. For en passant this is the pawn
    /// behind the destination square.
    pub captured: Option<Piece>,
}

impl GeneratedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn captured_kind(&self) -> Option<PieceKind> {
        self.captured.map(|p| p.kind)
    }
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move of `color`. Empty unless `color` is on move.
    fn generate_legal_moves(&self, game_state: &GameState, color: Color) -> Vec<GeneratedMove>;
}

/// Pseudo-legal moves of the piece on `square`; empty for an empty square.
pub fn pseudo_moves(game_state: &GameState, square: Square) -> Vec<CandidateMove> {
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, square, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, square, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, square, piece, &mut out),
        PieceKind::King => generate_king_moves(game_state, square, piece, &mut out),
    }
    out
}
