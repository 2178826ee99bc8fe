//! Seeded shuffling.
//!
//! Every board owns one `GameRng` on the `"deck"` stream of its seed, so the
//! same seed always deals the same sequence of games.
//!
//! ```
//! use elevens::core::GameRng;
//!
//! let mut first: Vec<u32> = (0..52).collect();
//! let mut second = first.clone();
//! GameRng::deck(42).shuffle(&mut first);
//! GameRng::deck(42).shuffle(&mut second);
//! assert_eq!(first, second);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Name of the stream boards shuffle their deck with.
pub const DECK_STREAM: &str = "deck";

/// ChaCha8 stream used to shuffle decks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Stream seeded directly from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Named stream derived from `seed`.
    ///
    /// `FxHasher` is fixed across toolchains, so a (seed, name) pair keeps
    /// dealing the same cards after a compiler upgrade.
    #[must_use]
    pub fn stream(seed: u64, name: &str) -> Self {
        let mut hasher = FxHasher::default();
        seed.hash(&mut hasher);
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The stream a board shuffles its deck with.
    #[must_use]
    pub fn deck(seed: u64) -> Self {
        Self::stream(seed, DECK_STREAM)
    }

    /// Shuffle cards in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(rng: &mut GameRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..52).collect();
        rng.shuffle(&mut order);
        order
    }

    #[test]
    fn test_deck_stream_repeats_per_seed() {
        assert_eq!(dealt(&mut GameRng::deck(8)), dealt(&mut GameRng::deck(8)));
        assert_ne!(dealt(&mut GameRng::deck(8)), dealt(&mut GameRng::deck(9)));
    }

    #[test]
    fn test_deck_stream_is_not_raw_seed() {
        assert_ne!(dealt(&mut GameRng::deck(8)), dealt(&mut GameRng::new(8)));
        assert_ne!(
            dealt(&mut GameRng::deck(8)),
            dealt(&mut GameRng::stream(8, "redeal"))
        );
    }

    #[test]
    fn test_consecutive_shuffles_differ() {
        let mut rng = GameRng::deck(3);
        let first = dealt(&mut rng);
        let second = dealt(&mut rng);
        assert_ne!(first, second);

        let mut sorted = second;
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    }
}
