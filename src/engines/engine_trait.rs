//! Engine abstraction shared by the computer player tiers.
//!
//! Every tier takes a position and the color to play, and reports its pick
//! together with `info string` diagnostics the front end may print.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, MoveKind, Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GeneratedMove;

/// The move an engine settled on, with the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    pub score: i32,
}

impl ChosenMove {
    pub fn new(mv: &GeneratedMove, score: i32) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            piece: mv.piece,
            kind: mv.kind,
            captured: mv.captured,
            score,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> ChessResult<EngineOutput>;
}

/// Engine RNG, seeded from the OS unless a fixed seed is given.
pub(crate) fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Handles the `Seed` option every randomised tier accepts.
pub(crate) fn apply_seed_option(rng: &mut StdRng, name: &str, value: &str) -> ChessResult<()> {
    if !name.eq_ignore_ascii_case("seed") {
        return Err(ChessError::UnknownOption(name.to_owned()));
    }
    let seed = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ChessError::UnknownOption(format!("{name}={value}")))?;
    *rng = StdRng::seed_from_u64(seed);
    Ok(())
}
