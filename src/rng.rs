//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of entropy threaded
//! explicitly through every stochastic operator of the engine. It wraps the
//! `rand` crate's `StdRng`, so a generator built with
//! [`RandomNumberGenerator::from_seed`] replays exactly the same stream of
//! draws, which makes whole runs reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genroute::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let index = rng.index(10);
//! assert!(index < 10);
//!
//! let draw = rng.unit();
//! assert!((0.0..1.0).contains(&draw));
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the handful of draws
/// the genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Runs one Bernoulli trial that succeeds with the given probability.
    ///
    /// Exactly one value is consumed from the stream regardless of the
    /// outcome, so a probability of `0.0` or `1.0` does not shift later draws.
    pub fn coin(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Draws a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Shuffles a slice in place with a Fisher–Yates shuffle, giving every
    /// permutation the same probability.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
