//! Deterministic pseudo-random source used for puzzle selection.
//!
//! A plain linear congruential generator. The constants are fixed so a seed
//! picks the same puzzle on every machine, which is what makes seeds shareable.

use chrono::Utc;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

/// Upper bound (exclusive) for seeds produced by [`SeededRandom::random_seed`].
pub const RANDOM_SEED_LIMIT: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Reducing the seed first gives the same sequence as the unreduced
    /// recurrence while keeping `state * MULTIPLIER` far from overflow.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Non-reproducible seed for "new puzzle" requests. Never use this for
    /// shared play.
    #[must_use]
    pub fn random_seed() -> u64 {
        let now = Utc::now();
        let nanos = u64::from(now.timestamp_subsec_nanos());
        let secs = now.timestamp().unsigned_abs();
        secs.wrapping_mul(1_000_003).wrapping_add(nanos) % RANDOM_SEED_LIMIT
    }

    /// Next value in `[0, 1)`.
    #[allow(clippy::should_implement_trait, clippy::cast_precision_loss)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Next integer in `[0, bound)`. `bound` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn next_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_int bound must be positive");
        (self.next() * bound as f64).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draw_follows_recurrence() {
        let mut rng = SeededRandom::new(1);
        // (1 * 9301 + 49297) % 233280 = 58598
        let expected = 58_598.0 / 233_280.0;
        assert!((rng.next() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sequence_is_reproducible() {
        let mut a = SeededRandom::new(424_242);
        let mut b = SeededRandom::new(424_242);
        for _ in 0..100 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_large_seed_matches_reduced_seed() {
        let mut big = SeededRandom::new(u64::MAX);
        let mut small = SeededRandom::new(u64::MAX % MODULUS);
        for _ in 0..10 {
            assert_eq!(big.next_int(595), small.next_int(595));
        }
    }

    #[test]
    fn test_next_stays_in_unit_interval() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..1000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_next_int_within_bound() {
        let mut rng = SeededRandom::new(999_999);
        for _ in 0..1000 {
            assert!(rng.next_int(6) < 6);
        }
        assert_eq!(rng.next_int(1), 0);
    }

    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..10 {
            assert!(SeededRandom::random_seed() < RANDOM_SEED_LIMIT);
        }
    }
}
