//! Fallback selection strategies.
//!
//! The classifier never touches a random source directly; it asks a
//! `FallbackSelector` for an index, so tests and reproducible deployments can
//! pin the sequence.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one entry of a pool of `len` items, uniformly.
pub trait FallbackSelector: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn select(&self, len: usize) -> usize;
}

/// Thread-local RNG. The default in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl FallbackSelector for RandomSelector {
    fn select(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG shared behind a mutex, for reproducible runs.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl FallbackSelector for SeededSelector {
    fn select(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Seeded when a seed is configured, thread-local otherwise.
pub fn from_seed(seed: Option<u64>) -> Arc<dyn FallbackSelector> {
    match seed {
        Some(seed) => Arc::new(SeededSelector::new(seed)),
        None => Arc::new(RandomSelector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_selector_stays_in_range() {
        let selector = RandomSelector;
        for len in 1..20 {
            assert!(selector.select(len) < len);
        }
    }

    #[test]
    fn test_single_entry_pool_always_selects_zero() {
        assert_eq!(RandomSelector.select(1), 0);
        assert_eq!(SeededSelector::new(99).select(1), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededSelector::new(42);
        let b = SeededSelector::new(42);
        let seq_a: Vec<usize> = (0..32).map(|_| a.select(5)).collect();
        let seq_b: Vec<usize> = (0..32).map(|_| b.select(5)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_seeded_selector_visits_every_index() {
        let selector = SeededSelector::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[selector.select(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_from_seed_without_seed_is_random() {
        let selector = from_seed(None);
        assert!(selector.select(3) < 3);
    }
}
