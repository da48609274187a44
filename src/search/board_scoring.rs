//! Move scoring used by the computer player.
//!
//! Scorers rate a single legal move in the position it is played from.
//! Higher is better for the side making the move.

use crate::game_state::chess_rules::{CENTER_COLS, CENTER_ROWS, OPENING_HALF_MOVES};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GeneratedMove;

pub trait MoveScorer: Send + Sync {
    fn score_move(&self, game_state: &GameState, mv: &GeneratedMove) -> i32;
}

/// Value of the captured piece on the 1/3/3/5/9 scale; zero for quiet moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureValueScorer;

impl MoveScorer for CaptureValueScorer {
    fn score_move(&self, _game_state: &GameState, mv: &GeneratedMove) -> i32 {
        mv.captured_kind().map_or(0, PieceKind::value)
    }
}

/// Pawn table from white's side, row 0 being rank 8.
#[rustfmt::skip]
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

/// Knight table from white's side, row 0 being rank 8.
#[rustfmt::skip]
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const CENTER_BONUS: i32 = 10;
pub const EARLY_HEAVY_PIECE_PENALTY: i32 = 5;

/// Capture value, piece-square bonus, center control and an opening penalty
/// for queen, rook and king moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Centipawn value of a captured piece. The king is never captured.
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        piece.value() * 100
    }

    /// Table bonus for `kind` landing on `square`. Black reads the tables
    /// mirrored top to bottom, so black pawns are rewarded for advancing
    /// too; an unmirrored lookup would score black from white's side.
    pub fn square_bonus(kind: PieceKind, color: Color, square: Square) -> i32 {
        let table = match kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            _ => return 0,
        };
        let row = match color {
            Color::White => square.row,
            Color::Black => 7 - square.row,
        };
        table[row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_center(square: Square) -> bool {
        CENTER_ROWS.contains(&square.row) && CENTER_COLS.contains(&square.col)
    }
}

impl MoveScorer for PositionalScorer {
    fn score_move(&self, game_state: &GameState, mv: &GeneratedMove) -> i32 {
        let mut score = mv.captured_kind().map_or(0, Self::piece_value);

        score += Self::square_bonus(mv.piece.kind, mv.piece.color, mv.to);

        if Self::is_center(mv.to) {
            score += CENTER_BONUS;
        }

        let minor_or_pawn = matches!(
            mv.piece.kind,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Bishop
        );
        if game_state.half_moves() < OPENING_HALF_MOVES && !minor_or_pawn {
            score -= EARLY_HEAVY_PIECE_PENALTY;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureValueScorer, MoveScorer, PositionalScorer};
    use crate::game_state::chess_types::{Color, MoveKind, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::GeneratedMove;
    use crate::utils::algebraic::square_to_coord;
    use crate::utils::long_algebraic::apply_long_algebraic;

    fn sq(name: &str) -> Square {
        square_to_coord(name).expect("test square should parse")
    }

    fn quiet(kind: PieceKind, color: Color, from: &str, to: &str) -> GeneratedMove {
        GeneratedMove {
            from: sq(from),
            to: sq(to),
            piece: Piece::new(kind, color),
            kind: MoveKind::Move,
            captured: None,
        }
    }

    #[test]
    fn central_pawn_push_scores_table_plus_center() {
        let game = GameState::new_game();
        let e4 = quiet(PieceKind::Pawn, Color::White, "e2", "e4");
        assert_eq!(PositionalScorer.score_move(&game, &e4), 20 + 10);
        let a3 = quiet(PieceKind::Pawn, Color::White, "a2", "a3");
        assert_eq!(PositionalScorer.score_move(&game, &a3), 5);
    }

    #[test]
    fn black_reads_the_tables_mirrored() {
        assert_eq!(
            PositionalScorer::square_bonus(PieceKind::Pawn, Color::Black, sq("e5")),
            PositionalScorer::square_bonus(PieceKind::Pawn, Color::White, sq("e4")),
        );
        assert_eq!(
            PositionalScorer::square_bonus(PieceKind::Knight, Color::Black, sq("f6")),
            10
        );
        assert_eq!(
            PositionalScorer::square_bonus(PieceKind::Queen, Color::Black, sq("d5")),
            0
        );
    }

    #[test]
    fn heavy_pieces_are_penalised_only_in_the_opening() {
        let mut game = GameState::new_game();
        let queen = quiet(PieceKind::Queen, Color::White, "d1", "h5");
        assert_eq!(PositionalScorer.score_move(&game, &queen), -5);

        for mv in [
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "b1c3", "f8c5", "d2d3", "d7d6",
        ] {
            game = apply_long_algebraic(&game, mv).expect("scripted move should be legal");
        }
        assert_eq!(game.half_moves(), 10);
        assert_eq!(PositionalScorer.score_move(&game, &queen), 0);
    }

    #[test]
    fn captures_are_scored_in_centipawns_and_on_the_small_scale() {
        let game = GameState::new_game();
        let mut take = quiet(PieceKind::Knight, Color::White, "c3", "d5");
        take.kind = MoveKind::Capture;
        take.captured = Some(Piece::new(PieceKind::Rook, Color::Black));
        assert_eq!(PositionalScorer.score_move(&game, &take), 500 + 20 + 10);
        assert_eq!(CaptureValueScorer.score_move(&game, &take), 5);
    }
}
