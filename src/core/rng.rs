//! Deterministic random number generation for replayable battles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical battle outcomes
//! - **Forkable**: Create independent branches for what-if simulations
//! - **Serializable**: O(1) state capture and restore alongside a save
//!
//! All randomness in the engine flows through an injected `BattleRng`;
//! there is no global RNG, so fixing the seed fixes every round.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lower bound of the damage/heal variance multiplier.
const VARIANCE_MIN: f64 = 0.8;
/// Upper bound of the damage/heal variance multiplier.
const VARIANCE_MAX: f64 = 1.2;

/// Deterministic RNG injected into the tick orchestrator.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Supports forking for independent replay branches.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to explore alternate outcomes from the same snapshot
    /// without disturbing the main sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw the variance multiplier applied to damage and heal amounts.
    ///
    /// Uniform in `[0.8, 1.2]`. Drawn once per attack that connects and
    /// once per heal; guaranteed misses draw nothing, which keeps the
    /// sequence stable across replays.
    pub fn variance(&mut self) -> f64 {
        self.inner.gen_range(VARIANCE_MIN..=VARIANCE_MAX)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
