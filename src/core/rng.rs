//! Dice randomness.
//!
//! ## Fairness
//!
//! - **Unpredictable**: seeded from OS entropy, never from a caller value
//! - **Cryptographic quality**: ChaCha20 stream
//! - **Uniform**: each die maps a `[0, 1)` sample onto three equal buckets
//!
//! The public API has no seeding entry point, so no player can force a
//! sequence of rolls. Unit tests inside the crate use a fixed seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::player::PlayerId;
use crate::dice::DiceColor;

/// Source of dice rolls and other table randomness.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha20Rng,
}

impl DiceRng {
    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Roll a single die.
    pub fn roll_die(&mut self) -> DiceColor {
        let sample: f64 = self.inner.gen();
        DiceColor::from_unit(sample)
    }

    /// Roll three independent dice.
    pub fn roll_three(&mut self) -> [DiceColor; 3] {
        [self.roll_die(), self.roll_die(), self.roll_die()]
    }

    /// Pick a seat uniformly at random.
    pub fn pick_player(&mut self, player_count: usize) -> PlayerId {
        assert!(player_count > 0, "Must have at least 1 player");
        PlayerId::new(self.inner.gen_range(0..player_count) as u8)
    }
}

impl Default for DiceRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
