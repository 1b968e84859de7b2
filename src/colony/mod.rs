//! Ant colony optimization engine.
//!
//! - [`ColonyOptions`]: ant count, iteration count, `alpha`, `beta`, `rho`, `q`.
//! - [`AntColonyEngine`]: steps one iteration (a full batch of ants) per pull.
//! - [`PheromoneField`]: the evaporating, reinforced edge weights.

pub mod engine;
pub mod options;
pub mod pheromone;

pub use engine::{AntColonyEngine, DISTANCE_EPSILON};
pub use options::{ColonyOptions, ColonyOptionsBuilder};
pub use pheromone::PheromoneField;
