//! Medium tier: take the most valuable piece on offer, otherwise move at
//! random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{apply_seed_option, engine_rng, ChosenMove, Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::search::board_scoring::{CaptureValueScorer, MoveScorer};

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    scorer: CaptureValueScorer,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: CaptureValueScorer,
            rng: engine_rng(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Mystic Chess Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        apply_seed_option(&mut self.rng, name, value)
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state, color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        let (captures, quiet): (Vec<GeneratedMove>, Vec<GeneratedMove>) =
            legal_moves.into_iter().partition(GeneratedMove::is_capture);

        if captures.is_empty() {
            out.best_move = quiet.choose(&mut self.rng).map(|mv| ChosenMove::new(mv, 0));
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in &captures {
            let value = self.scorer.score_move(game_state, mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if value == best_value {
                best_moves.push(*mv);
            }
        }

        out.info_lines.push(format!(
            "info string greedy_engine capture_score {} tied {}",
            best_value,
            best_moves.len()
        ));
        out.best_move = best_moves
            .choose(&mut self.rng)
            .map(|mv| ChosenMove::new(mv, best_value));
        Ok(out)
    }
}
