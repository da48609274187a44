//! Settings for the terminal game.

use std::env;

use crate::engines::computer_player::Difficulty;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;

/// Environment variable consulted when `--difficulty` is not given.
pub const DIFFICULTY_ENV: &str = "MYSTIC_CHESS_DIFFICULTY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub difficulty: Difficulty,
    pub human_color: Color,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_color: Color::White,
            seed: None,
            verbose: false,
        }
    }
}

impl PlayConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> ChessResult<Self> {
        Self::from_args(env::args().skip(1), env::var(DIFFICULTY_ENV).ok())
    }

    /// Builds a config from `--difficulty <d>`, `--color <c>`, `--seed <n>`
    /// and `--verbose`/`-v`. `env_difficulty` is used only when no
    /// `--difficulty` flag is present.
    pub fn from_args<I>(args: I, env_difficulty: Option<String>) -> ChessResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut difficulty_flag = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--difficulty" | "-d" => {
                    difficulty_flag = Some(flag_value(&mut args, &arg)?.parse::<Difficulty>()?);
                }
                "--color" | "-c" => {
                    config.human_color = flag_value(&mut args, &arg)?.parse::<Color>()?;
                }
                "--seed" => {
                    let raw = flag_value(&mut args, &arg)?;
                    let seed = raw
                        .parse::<u64>()
                        .map_err(|_| ChessError::UnknownOption(format!("--seed {raw}")))?;
                    config.seed = Some(seed);
                }
                "--verbose" | "-v" => config.verbose = true,
                other => return Err(ChessError::UnknownOption(other.to_owned())),
            }
        }

        config.difficulty = match (difficulty_flag, env_difficulty) {
            (Some(difficulty), _) => difficulty,
            (None, Some(raw)) if !raw.trim().is_empty() => raw.parse::<Difficulty>()?,
            _ => Difficulty::default(),
        };

        Ok(config)
    }

    #[inline]
    pub fn computer_color(&self) -> Color {
        self.human_color.opposite()
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> ChessResult<String> {
    args.next()
        .ok_or_else(|| ChessError::UnknownOption(format!("{flag} needs a value")))
}
