//! Random source adapters backed by `rand`

use beanquiz_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread-local OS-seeded generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

/// Deterministic generator for reproducible runs (`--seed`)
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for upper in 1..50 {
            assert!(rng.next_index(upper) < upper);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededRandom::new(2024);
        let b = SeededRandom::new(2024);
        let first: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_covers_range() {
        let rng = SeededRandom::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.next_index(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
