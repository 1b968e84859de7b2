//! Genetic algorithm engine.
//!
//! - [`GeneticOptions`]: population size, generation count, mutation rate.
//! - [`GeneticEngine`]: steps one generation per pull.
//! - [`operators`]: order-preserving segment crossover and swap mutation.

pub mod engine;
pub mod operators;
pub mod options;

pub use engine::{GeneticEngine, MIN_GENETIC_CITIES};
pub use options::{GeneticOptions, GeneticOptionsBuilder};
