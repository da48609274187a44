//! Easy tier: uniform pick over every legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::engines::engine_trait::{apply_seed_option, engine_rng, ChosenMove, Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: engine_rng(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mystic Chess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        apply_seed_option(&mut self.rng, name, value)
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state, color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves
            .choose(&mut self.rng)
            .map(|mv| ChosenMove::new(mv, 0));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn same_seed_gives_same_pick() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(Some(11));
        let mut b = RandomEngine::with_seed(Some(11));
        for _ in 0..5 {
            let left = a.choose_move(&game, Color::White).expect("engine should run");
            let right = b.choose_move(&game, Color::White).expect("engine should run");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn side_without_moves_gets_no_pick() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(Some(3));
        let out = engine.choose_move(&game, Color::Black).expect("engine should run");
        assert!(out.best_move.is_none());
        assert_eq!(out.info_lines, vec!["info string random_engine legal_moves 0"]);
    }

    #[test]
    fn only_the_seed_option_is_understood() {
        let mut engine = RandomEngine::new();
        assert!(engine.set_option("Seed", "42").is_ok());
        assert!(matches!(
            engine.set_option("Seed", "lots"),
            Err(ChessError::UnknownOption(_))
        ));
        assert_eq!(
            engine.set_option("Hash", "16"),
            Err(ChessError::UnknownOption("Hash".to_owned()))
        );
    }
}
