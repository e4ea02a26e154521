//=========================================================================
// Dealer
//=========================================================================
//
// Uniform random permutations for dealing cards.
//
// Wraps a `StdRng` so deals are reproducible when seeded (tests, demos)
// and independent on every call otherwise.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

//=== Dealer ==============================================================

/// Shuffles card sets for both games.
pub struct Dealer {
    rng: StdRng,
}

impl Dealer {
    /// Creates a dealer seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a dealer whose sequence of deals is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a dealer from an optional seed.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns a uniformly shuffled copy of `items` (Fisher–Yates).
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.rng);
        out
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_is_a_permutation() {
        let mut dealer = Dealer::seeded(1);
        let items: Vec<u32> = (0..18).collect();

        let mut out = dealer.shuffled(&items);
        out.sort_unstable();

        assert_eq!(out, items);
    }

    #[test]
    fn same_seed_same_deal() {
        let items: Vec<u32> = (0..18).collect();
        let a = Dealer::seeded(42).shuffled(&items);
        let b = Dealer::seeded(42).shuffled(&items);
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_deals_differ() {
        let mut dealer = Dealer::seeded(42);
        let items: Vec<u32> = (0..18).collect();

        let first = dealer.shuffled(&items);
        let second = dealer.shuffled(&items);

        assert_ne!(first, second);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut dealer = Dealer::seeded(7);
        let items = [0u8, 1, 2];
        let mut first_seen = [false; 3];

        for _ in 0..200 {
            let out = dealer.shuffled(&items);
            first_seen[out[0] as usize] = true;
        }

        assert_eq!(first_seen, [true; 3]);
    }
}
