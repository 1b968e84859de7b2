//! # Stepwise Protocol
//!
//! Both optimizers are pull-based: nothing runs until the caller asks for the
//! next step, and each pull performs exactly one unit of work (one generation
//! or one colony iteration). A caller that stops pulling leaves the engine
//! paused and resumable.
//!
//! ```text
//! Constructed ──pull──▶ Running ──pull (count reached)──▶ Exhausted
//!      │                                                     ▲
//!      └──────────────pull (count is 0)──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tspalg::colony::{AntColonyEngine, ColonyOptions};
//! use tspalg::geometry::City;
//! use tspalg::rng::RandomNumberGenerator;
//! use tspalg::stepwise::{EngineState, Stepwise};
//!
//! let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
//! let options = ColonyOptions::builder().iterations(2).build();
//! let mut engine =
//!     AntColonyEngine::new(cities, options, RandomNumberGenerator::from_seed(1)).unwrap();
//!
//! assert_eq!(engine.state(), EngineState::Constructed);
//! while let Some(step) = engine.step() {
//!     assert_eq!(step.length, 10.0);
//! }
//! assert_eq!(engine.state(), EngineState::Exhausted);
//! assert_eq!(engine.history().len(), 2);
//! ```

use crate::geometry::Tour;
use crate::history::History;

/// Lifecycle of a stepwise engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Built, no step pulled yet.
    Constructed,
    /// At least one step completed and more may follow.
    Running,
    /// The configured number of steps is done; every further pull returns `None`.
    Exhausted,
}

/// How much an engine reports through `tracing` after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Index, best length, best tour and the step's own best.
    Verbose,
    /// Index and best length.
    Minimal,
    /// Nothing per step.
    #[default]
    None,
}

/// The shortest tour an engine has seen so far.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestRecord {
    pub tour: Tour,
    pub length: f64,
}

impl BestRecord {
    /// An empty record with infinite length; any finite offer replaces it.
    pub fn unset() -> Self {
        Self {
            tour: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// Replaces the record if `length` is strictly shorter. Returns whether it did.
    pub fn offer(&mut self, tour: &[usize], length: f64) -> bool {
        if length < self.length {
            self.tour = tour.to_vec();
            self.length = length;
            true
        } else {
            false
        }
    }
}

/// Result of one completed step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Zero-based generation or iteration index.
    pub index: usize,
    /// Best tour found up to and including this step.
    pub tour: Tour,
    /// Length of `tour`.
    pub length: f64,
}

/// An optimizer that advances one unit of work per pull.
pub trait Stepwise {
    /// Performs the next unit of work and returns the global best so far, or
    /// `None` once the configured number of steps has been completed.
    ///
    /// After `None` has been returned the engine's state no longer changes.
    fn step(&mut self) -> Option<Step>;

    fn state(&self) -> EngineState;

    /// Best tour seen so far, if any step has run.
    fn best(&self) -> Option<&BestRecord>;

    /// One entry per completed step.
    fn history(&self) -> &History;

    /// Number of completed steps.
    fn steps_taken(&self) -> usize;

    /// Column header naming the step index in exported history.
    fn index_label(&self) -> &'static str;
}
