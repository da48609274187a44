//! Difficulty tiers and the computer player entry points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_positional::PositionalEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Name of the opponent at this tier.
    pub const fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Apprentice",
            Difficulty::Medium => "Warrior",
            Difficulty::Hard => "Master",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Plays any legal move at random",
            Difficulty::Medium => "Grabs the most valuable capture it can find",
            Difficulty::Hard => "Weighs captures, piece placement and center control",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::InvalidDifficulty(s.to_owned())),
        }
    }
}

/// Engine implementing `difficulty`, optionally with a fixed seed.
pub fn engine_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::with_seed(seed)),
        Difficulty::Medium => Box::new(GreedyEngine::with_seed(seed)),
        Difficulty::Hard => Box::new(PositionalEngine::with_seed(seed)),
    }
}

/// Runs the tier for `color` and returns its full output.
pub fn think(
    game_state: &GameState,
    color: Color,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> ChessResult<EngineOutput> {
    engine_for(difficulty, seed).choose_move(game_state, color)
}

/// Move the computer plays for `color`; `None` when `color` has no legal
/// move.
pub fn find_best_move(
    game_state: &GameState,
    color: Color,
    difficulty: Difficulty,
) -> ChessResult<Option<ChosenMove>> {
    Ok(think(game_state, color, difficulty, None)?.best_move)
}

/// [`find_best_move`] with a reproducible random choice.
pub fn find_best_move_seeded(
    game_state: &GameState,
    color: Color,
    difficulty: Difficulty,
    seed: u64,
) -> ChessResult<Option<ChosenMove>> {
    Ok(think(game_state, color, difficulty, Some(seed))?.best_move)
}

#[cfg(test)]
mod tests {
    use super::{find_best_move, find_best_move_seeded, Difficulty};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn difficulty_parses_case_insensitively_and_defaults_to_medium() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(ChessError::InvalidDifficulty("expert".to_owned()))
        );
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!(Difficulty::Hard.title(), "Master");
    }

    #[test]
    fn every_tier_answers_the_opening() {
        let game = GameState::new_game();
        for difficulty in Difficulty::ALL {
            let chosen = find_best_move(&game, Color::White, difficulty)
                .expect("engine should run")
                .expect("white has moves");
            assert_eq!(chosen.piece.color, Color::White);
        }
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let game = GameState::new_game();
        let a = find_best_move_seeded(&game, Color::White, Difficulty::Easy, 99)
            .expect("engine should run");
        let b = find_best_move_seeded(&game, Color::White, Difficulty::Easy, 99)
            .expect("engine should run");
        assert_eq!(a, b);
    }
}
