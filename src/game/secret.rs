//! Secret number sources
//!
//! The game draws its secret through [`SecretSource`] so tests can pin the
//! value while the application uses an OS-seeded generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Range every secret is drawn from
pub const SECRET_RANGE: RangeInclusive<u8> = 1..=100;

/// Supplier of secret numbers in `1..=100`
pub trait SecretSource {
    /// Draw the secret for a new game
    fn next_secret(&mut self) -> u8;
}

/// Uniform draw from a ChaCha generator
#[derive(Debug, Clone)]
pub struct RandomSecret {
    rng: ChaCha8Rng,
}

impl RandomSecret {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic sequence for a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for RandomSecret {
    fn next_secret(&mut self) -> u8 {
        self.rng.gen_range(SECRET_RANGE)
    }
}

/// Always returns the same secret, clamped into `1..=100`
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub u8);

impl SecretSource for FixedSecret {
    fn next_secret(&mut self) -> u8 {
        self.0.clamp(*SECRET_RANGE.start(), *SECRET_RANGE.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_in_range() {
        let mut source = RandomSecret::seeded(7);
        for _ in 0..1000 {
            let secret = source.next_secret();
            assert!((1..=100).contains(&secret));
        }
    }

    #[test]
    fn test_random_secret_covers_bounds() {
        let mut source = RandomSecret::seeded(11);
        let draws: Vec<u8> = (0..5000).map(|_| source.next_secret()).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&100));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomSecret::seeded(42);
        let mut b = RandomSecret::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_secret(), b.next_secret());
        }
    }

    #[test]
    fn test_fixed_secret_clamps() {
        assert_eq!(FixedSecret(42).next_secret(), 42);
        assert_eq!(FixedSecret(0).next_secret(), 1);
        assert_eq!(FixedSecret(250).next_secret(), 100);
    }
}
