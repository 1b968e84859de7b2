//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for
//! both optimizers. Every draw an engine makes (initial shuffles, parent
//! sampling, cut points, mutation sites, ant start cities, roulette spins)
//! goes through the generator handed to it at construction, so a seeded
//! generator makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use tspalg::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! assert_eq!(a.gen_unit(), b.gen_unit());
//! ```

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// optimizers need.
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
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns an index drawn uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a value drawn uniformly from `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns two distinct indices drawn uniformly from `[0, upper)`, in the
    /// order they were drawn.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is less than 2.
    pub fn distinct_pair(&mut self, upper: usize) -> (usize, usize) {
        let picked = rand::seq::index::sample(&mut self.rng, upper, 2);
        (picked.index(0), picked.index(1))
    }

    /// Shuffles `slice` in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Returns an integer-valued coordinate drawn uniformly from `range`.
    pub fn gen_coordinate(&mut self, range: RangeInclusive<i32>) -> f64 {
        f64::from(self.rng.gen_range(range))
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
