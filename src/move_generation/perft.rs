//! Move-path enumeration for validating the generator.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{GameStatus, MoveKind, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::all_pieces_with_moves;
use crate::move_generation::move_generator::CandidateMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, piece: Piece, mv: &CandidateMove, after: &GameState) {
        self.nodes += 1;
        if mv.kind.is_capture() {
            self.captures += 1;
        }
        if mv.kind == MoveKind::EnPassant {
            self.en_passant += 1;
        }
        if mv.kind.castle_side().is_some() {
            self.castles += 1;
        }
        if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row() {
            self.promotions += 1;
        }
        match after.game_status {
            GameStatus::Check => self.record_check(after),
            GameStatus::Checkmate => {
                self.record_check(after);
                self.checkmates += 1;
            }
            GameStatus::Active | GameStatus::Stalemate => {}
        }
    }

    fn record_check(&mut self, after: &GameState) {
        self.checks += 1;
        let defender = after.current_turn;
        if let Some(king) = after.board.king_square(defender) {
            if attackers_to_square(&after.board, king, defender.opposite()).len() >= 2 {
                self.double_checks += 1;
            }
        }
    }
}

/// Counts every legal move path of length `depth` from `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(game_state, depth, &mut counts)?;
    Ok(counts)
}

/// Same counts as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let mut roots = Vec::new();
    for entry in all_pieces_with_moves(game_state, game_state.current_turn) {
        for mv in entry.moves {
            roots.push(apply_move(game_state, mv.from, mv.to)?);
        }
    }

    let handles: Vec<_> = roots
        .into_iter()
        .map(|root| thread::spawn(move || perft(&root, depth - 1)))
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(result) => total.merge(result?),
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
    Ok(total)
}

fn perft_recurse(game_state: &GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for entry in all_pieces_with_moves(game_state, game_state.current_turn) {
        for mv in &entry.moves {
            let next = apply_move(game_state, mv.from, mv.to)?;
            if depth == 1 {
                counts.record_leaf(entry.piece, mv, &next);
            } else {
                perft_recurse(&next, depth - 1, counts)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_matches_known_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).expect("perft 0 should run").nodes, 1);
        assert_eq!(perft(&game, 1).expect("perft 1 should run").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft 2 should run").nodes, 400);

        let depth3 = perft(&game, 3).expect("perft 3 should run");
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn threaded_perft_agrees_with_single_thread() {
        let game = GameState::new_game();
        let single = perft(&game, 2).expect("perft should run");
        let threaded = perft_multi_threaded(&game, 2).expect("threaded perft should run");
        assert_eq!(single, threaded);
    }

    #[test]
    fn castles_and_promotions_are_counted() {
        let game = GameState::from_placements(
            &[
                ("e1", PieceKind::King, Color::White),
                ("h1", PieceKind::Rook, Color::White),
                ("a7", PieceKind::Pawn, Color::White),
                ("e8", PieceKind::King, Color::Black),
                ("h5", PieceKind::Pawn, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        let counts = perft(&game, 1).expect("perft should run");
        assert_eq!(counts.castles, 1);
        assert_eq!(counts.promotions, 1);
    }

    #[test]
    fn discovered_and_double_checks_are_counted() {
        let game = GameState::from_placements(
            &[
                ("a1", PieceKind::King, Color::White),
                ("e1", PieceKind::Rook, Color::White),
                ("e4", PieceKind::Knight, Color::White),
                ("e8", PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .expect("placements should be valid");
        let counts = perft(&game, 1).expect("perft should run");
        // Every knight move uncovers the rook; Nd6 and Nf6 also hit the king.
        assert_eq!(counts.checks, 8);
        assert_eq!(counts.double_checks, 2);
        assert_eq!(counts.checkmates, 0);
    }
}
