//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by coordinate parsing, move
//! application, undo replay, and the computer player configuration. Every
//! failure is reported synchronously and leaves the caller's `GameState`
//! untouched.
//!
//! Usage guidelines:
//! - Rules-level variants (`NoPieceAtSource`, `WrongTurn`, `IllegalMove`,
//!   `NoHistoryToUndo`) are expected during play and are meant to be shown to
//!   the player.
//! - Parsing variants (`InvalidSquare`, `InvalidDifficulty`, `InvalidColor`,
//!   `InvalidFen`) come from user or front-end input.
//! - `ReplayFailed` means a move history could not be replayed from the
//!   starting position, which points at a history that was not produced by
//!   this engine.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The source square of a move is empty.
    NoPieceAtSource(Square),

    /// The piece on the source square belongs to the side not on move.
    WrongTurn {
        square: Square,
        piece_color: Color,
        current_turn: Color,
    },

    /// The destination is not among the legal moves of the source piece.
    IllegalMove { from: Square, to: Square },

    /// Undo was requested with an empty move history.
    NoHistoryToUndo,

    /// A square string was not of the form `[a-h][1-8]`, or a grid
    /// coordinate fell outside the board.
    InvalidSquare(String),

    /// A difficulty string was not one of `easy`, `medium`, `hard`.
    InvalidDifficulty(String),

    /// A color string was not `white` or `black`.
    InvalidColor(String),

    /// An engine option name or value was not recognised.
    UnknownOption(String),

    /// Replaying the recorded history failed at the given index.
    ReplayFailed {
        index: usize,
        source: Box<ChessError>,
    },

    /// JSON encoding or decoding of a game state failed.
    Serialization(String),

    /// A FEN string could not be read as a position.
    InvalidFen(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::NoPieceAtSource(square) => {
                write!(f, "no piece at source square {square}")
            }
            ChessError::WrongTurn {
                square,
                piece_color,
                current_turn,
            } => write!(
                f,
                "not your turn: piece on {square} is {piece_color}, {current_turn} to move"
            ),
            ChessError::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessError::NoHistoryToUndo => write!(f, "no moves to undo"),
            ChessError::InvalidSquare(raw) => write!(f, "invalid square: {raw}"),
            ChessError::InvalidDifficulty(raw) => {
                write!(f, "invalid difficulty '{raw}', expected easy, medium or hard")
            }
            ChessError::InvalidColor(raw) => {
                write!(f, "invalid color '{raw}', expected white or black")
            }
            ChessError::UnknownOption(msg) => write!(f, "unknown engine option: {msg}"),
            ChessError::ReplayFailed { index, source } => {
                write!(f, "failed to replay move {index}: {source}")
            }
            ChessError::Serialization(msg) => write!(f, "game state serialization failed: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
        }
    }
}

impl Error for ChessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessError::ReplayFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(err: serde_json::Error) -> Self {
        ChessError::Serialization(err.to_string())
    }
}
