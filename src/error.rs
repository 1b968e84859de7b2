//! # Error Types
//!
//! This module defines the error types for the TSP optimizers. Every error an
//! engine can produce is detected at construction time; stepping an engine
//! never fails, and running out of steps is reported through `Option`, not
//! through an error.
//!
//! ## Examples
//!
//! Matching on a rejected configuration:
//!
//! ```rust
//! use tspalg::error::TspError;
//! use tspalg::genetic::{GeneticEngine, GeneticOptions};
//! use tspalg::geometry::City;
//! use tspalg::rng::RandomNumberGenerator;
//!
//! let cities = vec![City::new(0.0, 0.0)];
//! let result = GeneticEngine::new(
//!     cities,
//!     GeneticOptions::default(),
//!     RandomNumberGenerator::from_seed(1),
//! );
//!
//! assert!(matches!(result, Err(TspError::InvalidConfiguration(_))));
//! ```
//!
//! Using the `ResultExt` trait to add context to foreign errors:
//!
//! ```rust
//! use tspalg::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_history(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open history file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while building or exporting an optimizer.
#[derive(Error, Debug)]
pub enum TspError {
    /// A parameter is out of range, or there are too few cities for the
    /// operators the engine needs.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The city list is empty.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use tspalg::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> tspalg::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `TspError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TspError::Other(format!("{}: {}", context, e)))
    }
}
