pub mod challenge;
pub mod options;
pub mod population;
pub mod stats;

pub use challenge::Challenge;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use population::{Population, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_POPULATION_SIZE};
pub use stats::GenerationStats;
