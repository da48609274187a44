//! Hard tier: one-ply positional scoring with a random pick among the
//! near-best moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{apply_seed_option, engine_rng, ChosenMove, Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{MoveScorer, PositionalScorer};

/// Moves scoring within this many points of the best are all candidates.
pub const NEAR_TOP_MARGIN: i32 = 20;

pub struct PositionalEngine {
    move_generator: LegalMoveGenerator,
    scorer: PositionalScorer,
    rng: StdRng,
}

impl PositionalEngine {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: PositionalScorer,
            rng: engine_rng(seed),
        }
    }
}

impl Default for PositionalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for PositionalEngine {
    fn name(&self) -> &str {
        "Mystic Chess Positional"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        apply_seed_option(&mut self.rng, name, value)
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state, color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string positional_engine legal_moves {}",
            legal_moves.len()
        ));

        let mut scored: Vec<ChosenMove> = legal_moves
            .iter()
            .map(|mv| ChosenMove::new(mv, self.scorer.score_move(game_state, mv)))
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let Some(top_score) = scored.first().map(|mv| mv.score) else {
            return Ok(out);
        };
        scored.retain(|mv| mv.score >= top_score - NEAR_TOP_MARGIN);

        out.info_lines.push(format!(
            "info string positional_engine top_score {} candidates {}",
            top_score,
            scored.len()
        ));
        out.best_move = scored.choose(&mut self.rng).copied();
        Ok(out)
    }
}
