//! Configuration for playing full games.

use super::generators::DEFAULT_CODE_LENGTH;

/// Settings for `play_random_game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    /// Stop after this many rounds even if the game is not over.
    /// `None` = play until an end condition fires.
    pub round_limit: Option<u32>,

    /// Digits per code.
    pub code_length: usize,

    /// Seed for the code generator.
    pub seed: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            round_limit: None,
            code_length: DEFAULT_CODE_LENGTH,
            seed: 0,
        }
    }
}

impl PlayConfig {
    /// Create a new play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round limit.
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Set the code length.
    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Set the code seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
