pub mod colony;
pub mod error;
pub mod genetic;
pub mod geometry;
pub mod history;
pub mod rng;
pub mod stepwise;

// Re-export commonly used types for convenience
pub use colony::{AntColonyEngine, ColonyOptions};
pub use error::{Result, ResultExt, TspError};
pub use genetic::{GeneticEngine, GeneticOptions};
pub use geometry::{City, DistanceMatrix, Tour};
pub use history::{History, HistoryEntry};
pub use rng::RandomNumberGenerator;
pub use stepwise::{BestRecord, EngineState, LogLevel, Step, Stepwise};
