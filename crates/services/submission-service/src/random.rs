//! Random source for the simulated server response.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of uniform samples, seedable so outcomes can be reproduced.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local generator seeded from OS entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic generator; the same seed yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Pick the seeded generator when a seed is configured.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded random source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_in_unit_interval() {
        let mut sources: Vec<Box<dyn RandomSource>> =
            vec![Box::new(ThreadRandom), Box::new(SeededRandom::new(7))];
        for source in sources.iter_mut() {
            for _ in 0..1000 {
                let sample = source.next_unit();
                assert!((0.0..1.0).contains(&sample));
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let first: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let second: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        let first: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let second: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_random_source_honours_seed() {
        let mut boxed = random_source(Some(9));
        let mut direct = SeededRandom::new(9);
        assert_eq!(boxed.next_unit(), direct.next_unit());
    }
}
