//! Core game state representation.
//!
//! `GameState` is an immutable-per-turn snapshot: applying a move clones it
//! and mutates the clone, so a state held by a caller is never changed by
//! the engine. Legality simulation relies on this to try moves without
//! touching the authoritative game.

use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{BACK_RANK_ORDER, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::game_status::compute_game_status;
use crate::utils::algebraic::square_to_coord;

/// Fixed 8x8 grid indexed `[row][col]`, row 0 being rank 8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.set(
                    Square::new(color.back_row(), col as u8),
                    Some(Piece::new(*kind, color)),
                );
                board.set(
                    Square::new(color.pawn_home_row(), col as u8),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Pieces removed from play, bucketed by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Value of captured white pieces minus value of captured black pieces.
    pub fn material_advantage(&self) -> i32 {
        let total = |pieces: &[Piece]| pieces.iter().map(|p| p.kind.value()).sum::<i32>();
        total(&self.white) - total(&self.black)
    }
}

/// The position a game began from. Undo replays the history from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPosition {
    pub board: Board,
    pub current_turn: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

impl StartPosition {
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            current_turn: Color::White,
            castling_rights: CastlingRights::initial(),
            en_passant_target: None,
        }
    }
}

impl Default for StartPosition {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_turn: Color,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
    pub game_status: GameStatus,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    /// Snapshots without this field load as games from the standard start.
    #[serde(default)]
    pub start_position: StartPosition,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move, full castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            current_turn: Color::White,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            game_status: GameStatus::Active,
            castling_rights: CastlingRights::initial(),
            en_passant_target: None,
            start_position: StartPosition::standard(),
        }
    }

    /// A game with no history starting from `start`.
    pub fn from_start_position(start: StartPosition) -> Self {
        let mut state = Self {
            board: start.board.clone(),
            current_turn: start.current_turn,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            game_status: GameStatus::Active,
            castling_rights: start.castling_rights,
            en_passant_target: start.en_passant_target,
            start_position: start,
        };
        state.game_status = compute_game_status(&state);
        state
    }

    /// Builds a position from an arbitrary board.
    ///
    /// A castling right is granted only where the king and the matching rook
    /// stand unmoved on their home squares. The status is computed for the
    /// side to move.
    pub fn from_board(board: Board, current_turn: Color) -> Self {
        let mut castling_rights = CastlingRights::initial();
        for color in [Color::White, Color::Black] {
            let row = color.back_row();
            let king_ready = matches!(
                board.get(Square::new(row, KING_HOME_COL)),
                Some(p) if p.kind == PieceKind::King && p.color == color && !p.has_moved
            );
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                let rook_ready = matches!(
                    board.get(Square::new(row, side.rook_home_col())),
                    Some(p) if p.kind == PieceKind::Rook && p.color == color && !p.has_moved
                );
                if !(king_ready && rook_ready) {
                    castling_rights.revoke(color, side);
                }
            }
        }

        Self::from_start_position(StartPosition {
            board,
            current_turn,
            castling_rights,
            en_passant_target: None,
        })
    }

    /// Builds a position from `(square, kind, color)` placements.
    pub fn from_placements(
        placements: &[(&str, PieceKind, Color)],
        current_turn: Color,
    ) -> ChessResult<Self> {
        let mut board = Board::empty();
        for (name, kind, color) in placements {
            board.set(square_to_coord(name)?, Some(Piece::new(*kind, *color)));
        }
        Ok(Self::from_board(board, current_turn))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn half_moves(&self) -> usize {
        self.move_history.len()
    }

    /// Full-move number shown to players, starting at 1.
    #[inline]
    pub fn turn_number(&self) -> usize {
        self.half_moves() / 2 + 1
    }

    /// The side that delivered mate, if the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.game_status {
            GameStatus::Checkmate => Some(self.current_turn.opposite()),
            _ => None,
        }
    }

    pub fn status_message(&self) -> String {
        let side = match self.current_turn {
            Color::White => "White",
            Color::Black => "Black",
        };
        match self.game_status {
            GameStatus::Active => format!("{side} to move"),
            GameStatus::Check => format!("{side} King in Check!"),
            GameStatus::Checkmate => {
                let winner = match self.current_turn.opposite() {
                    Color::White => "White",
                    Color::Black => "Black",
                };
                format!("Checkmate! {winner} Wins!")
            }
            GameStatus::Stalemate => "Stalemate - Draw!".to_owned(),
        }
    }
}
