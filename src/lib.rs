pub mod error;
pub mod evolution;
pub mod gene;
pub mod individual;
pub mod island;
pub mod operators;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
pub use evolution::{Challenge, EvolutionOptions, GenerationStats, LogLevel, Population};
pub use gene::{Bounds, Gene, GeneKind};
pub use individual::Individual;
pub use island::{IslandModel, IslandOptions};
