//! # GeneticOptions
//!
//! The `GeneticOptions` struct holds the parameters of the genetic algorithm
//! engine: population size, number of generations, mutation probability and
//! per-generation log level.
//!
//! ## Example
//!
//! ```rust
//! use tspalg::genetic::GeneticOptions;
//! use tspalg::stepwise::LogLevel;
//!
//! // Explicit parameters
//! let custom = GeneticOptions::new(80, 300, 0.05, LogLevel::Minimal);
//!
//! // Fluent builder; unset fields take the defaults
//! let built = GeneticOptions::builder()
//!     .population_size(80)
//!     .mutation_rate(0.05)
//!     .build();
//!
//! assert_eq!(built.get_generations(), 200);
//! assert!(custom.validate().is_ok());
//! ```
//!
//! ## Defaults
//!
//! - `population_size`: 50
//! - `generations`: 200
//! - `mutation_rate`: 0.1
//! - `log_level`: `LogLevel::None`

use crate::error::{Result, TspError};
use crate::stepwise::LogLevel;

pub const DEFAULT_POPULATION_SIZE: usize = 50;
pub const DEFAULT_GENERATIONS: usize = 200;
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Smallest population from which two distinct parents can be drawn.
pub const MIN_POPULATION_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOptions {
    population_size: usize,
    generations: usize,
    /// Probability in `[0, 1]` that a child receives one swap mutation.
    mutation_rate: f64,
    log_level: LogLevel,
}

impl GeneticOptions {
    pub fn new(
        population_size: usize,
        generations: usize,
        mutation_rate: f64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            population_size,
            generations,
            mutation_rate,
            log_level,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of generations.
    pub fn set_generations(&mut self, generations: usize) {
        self.generations = generations;
    }

    /// Sets the mutation probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the parameters on their own, independent of any city list.
    ///
    /// # Errors
    ///
    /// Returns `TspError::InvalidConfiguration` if the population is smaller
    /// than two or the mutation rate is outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(TspError::InvalidConfiguration(format!(
                "Population size must be at least {}, got {}",
                MIN_POPULATION_SIZE, self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfiguration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `GeneticOptions` instance.
    pub fn builder() -> GeneticOptionsBuilder {
        GeneticOptionsBuilder::default()
    }
}

impl Default for GeneticOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `GeneticOptions`.
///
/// Provides a fluent interface for constructing `GeneticOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct GeneticOptionsBuilder {
    population_size: Option<usize>,
    generations: Option<usize>,
    mutation_rate: Option<f64>,
    log_level: Option<LogLevel>,
}

impl GeneticOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `GeneticOptions` instance.
    pub fn build(self) -> GeneticOptions {
        GeneticOptions {
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            generations: self.generations.unwrap_or(DEFAULT_GENERATIONS),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneticOptions::default();
        assert_eq!(options.get_population_size(), 50);
        assert_eq!(options.get_generations(), 200);
        assert_eq!(options.get_mutation_rate(), 0.1);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_default_when_empty() {
        assert_eq!(GeneticOptions::builder().build(), GeneticOptions::default());
    }

    #[test]
    fn test_builder() {
        let options = GeneticOptions::builder()
            .population_size(10)
            .generations(5)
            .mutation_rate(0.5)
            .log_level(LogLevel::Verbose)
            .build();

        assert_eq!(options, GeneticOptions::new(10, 5, 0.5, LogLevel::Verbose));
    }

    #[test]
    fn test_setters() {
        let mut options = GeneticOptions::default();
        options.set_population_size(7);
        options.set_generations(0);
        options.set_mutation_rate(1.0);
        options.set_log_level(LogLevel::Minimal);

        assert_eq!(options, GeneticOptions::new(7, 0, 1.0, LogLevel::Minimal));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let options = GeneticOptions::builder().population_size(1).build();
        match options.validate() {
            Err(TspError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("Population size"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        for rate in [-0.01, 1.01, f64::NAN] {
            let options = GeneticOptions::builder().mutation_rate(rate).build();
            assert!(matches!(
                options.validate(),
                Err(TspError::InvalidConfiguration(_))
            ));
        }
        for rate in [0.0, 1.0] {
            let options = GeneticOptions::builder().mutation_rate(rate).build();
            assert!(options.validate().is_ok());
        }
    }
}
