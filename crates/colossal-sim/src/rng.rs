//! The game's linear-congruential generator.
//!
//! Every random decision in a game draws from one [`Lcg`], so a seed and a
//! command sequence fully determine a play-through.

use log::trace;
use serde::{Deserialize, Serialize};

/// Multiplier.
pub const LCG_A: i64 = 1093;
/// Increment.
pub const LCG_C: i64 = 221_587;
/// Modulus.
pub const LCG_M: i64 = 1_048_576;

/// Linear-congruential generator with the classic game's constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Seed a generator. Only the low bits below the modulus matter.
    pub fn new(seed: u64) -> Self {
        let state = (seed % LCG_M as u64) as i64;
        Self { state }
    }

    /// Rebuild a generator from a saved state without range checking.
    pub fn from_state(state: i64) -> Self {
        Self { state }
    }

    /// Current state.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// True when the state could have been produced by the generator.
    pub fn is_valid(&self) -> bool {
        (0..LCG_M).contains(&self.state)
    }

    fn next_value(&mut self) -> i64 {
        let old = self.state;
        self.state = (LCG_A * self.state + LCG_C) % LCG_M;
        trace!("lcg draw {old}");
        old
    }

    /// Uniform value in `0..range`. A zero range always yields zero.
    pub fn randrange(&mut self, range: i32) -> i32 {
        (i64::from(range) * self.next_value() / LCG_M) as i32
    }

    /// True `n` percent of the time.
    pub fn pct(&mut self, n: i32) -> bool {
        self.randrange(100) < n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_draw_returns_the_seed() {
        let mut rng = Lcg::new(1838473132);
        let seeded = rng.state();
        rng.randrange(LCG_M as i32);
        assert_eq!(rng.state(), (LCG_A * seeded + LCG_C) % LCG_M);
    }

    #[test]
    fn zero_range_is_zero() {
        let mut rng = Lcg::new(42);
        assert_eq!(rng.randrange(0), 0);
    }

    #[test]
    fn pct_extremes() {
        let mut rng = Lcg::new(7);
        for _ in 0..100 {
            assert!(!rng.pct(0));
            assert!(rng.pct(100));
        }
    }

    proptest! {
        #[test]
        fn draws_stay_in_range(seed in any::<u64>(), range in 1i32..10_000) {
            let mut rng = Lcg::new(seed);
            for _ in 0..32 {
                let v = rng.randrange(range);
                prop_assert!((0..range).contains(&v));
                prop_assert!(rng.is_valid());
            }
        }

        #[test]
        fn same_seed_same_sequence(seed in any::<u64>()) {
            let mut a = Lcg::new(seed);
            let mut b = Lcg::new(seed);
            for _ in 0..16 {
                prop_assert_eq!(a.randrange(1000), b.randrange(1000));
            }
        }
    }
}
