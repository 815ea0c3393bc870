//! Deterministic random number generation for code and keyword dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore, so a game in progress
//!   can be resumed with the same future codes (see `RandomCodes::state`)
//!
//! ```
//! use decrypto::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! rng.distinct_indices(4, 3);
//!
//! let mut restored = GameRng::from_state(&rng.state());
//! assert_eq!(rng.distinct_indices(4, 3), restored.distinct_indices(4, 3));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with checkpointing.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Draw `length` distinct values from `0..range`, in draw order.
    ///
    /// Every ordered selection is equally likely. Callers must ensure
    /// `length <= range` and `range <= 256`.
    pub fn distinct_indices(&mut self, range: usize, length: usize) -> Vec<u8> {
        let mut pool: Vec<u8> = (0..range).map(|i| i as u8).collect();
        let (chosen, _) = pool.partial_shuffle(&mut self.inner, length);
        chosen.to_vec()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
