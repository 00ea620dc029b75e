//! # IslandOptions
//!
//! Parameters of an island-model run: the evolution options every island
//! shares, how often migration happens and how many individuals each island
//! sends per migration.
//!
//! ```rust
//! use genevo::evolution::EvolutionOptions;
//! use genevo::island::IslandOptions;
//!
//! let options = IslandOptions::builder()
//!     .evolution(EvolutionOptions::builder().num_generations(60).build())
//!     .migration_interval(10)
//!     .num_migrants(3)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionOptions;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IslandOptions {
    evolution: EvolutionOptions,
    /// Migration runs after generation 0 and after every multiple of this interval.
    migration_interval: usize,
    num_migrants: usize,
}

impl IslandOptions {
    pub fn new(evolution: EvolutionOptions, migration_interval: usize, num_migrants: usize) -> Self {
        Self {
            evolution,
            migration_interval,
            num_migrants,
        }
    }

    /// # Errors
    ///
    /// Returns a configuration error if the evolution options are invalid or
    /// the migration interval is zero.
    pub fn validate(&self) -> Result<()> {
        self.evolution.validate()?;

        if self.migration_interval == 0 {
            return Err(GeneticError::Configuration(
                "Migration interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_evolution(&self) -> &EvolutionOptions {
        &self.evolution
    }

    pub fn get_migration_interval(&self) -> usize {
        self.migration_interval
    }

    pub fn get_num_migrants(&self) -> usize {
        self.num_migrants
    }

    /// Returns `true` if migration follows the given (0-based) generation.
    pub fn migrates_after(&self, generation: usize) -> bool {
        generation % self.migration_interval == 0
    }

    pub fn builder() -> IslandOptionsBuilder {
        IslandOptionsBuilder::default()
    }
}

impl Default for IslandOptions {
    fn default() -> Self {
        Self {
            evolution: EvolutionOptions::default(),
            migration_interval: 5,
            num_migrants: 5,
        }
    }
}

/// Builder for `IslandOptions`. Unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct IslandOptionsBuilder {
    evolution: Option<EvolutionOptions>,
    migration_interval: Option<usize>,
    num_migrants: Option<usize>,
}

impl IslandOptionsBuilder {
    pub fn evolution(mut self, value: EvolutionOptions) -> Self {
        self.evolution = Some(value);
        self
    }

    pub fn migration_interval(mut self, value: usize) -> Self {
        self.migration_interval = Some(value);
        self
    }

    pub fn num_migrants(mut self, value: usize) -> Self {
        self.num_migrants = Some(value);
        self
    }

    pub fn build(self) -> IslandOptions {
        let defaults = IslandOptions::default();
        IslandOptions {
            evolution: self.evolution.unwrap_or(defaults.evolution),
            migration_interval: self
                .migration_interval
                .unwrap_or(defaults.migration_interval),
            num_migrants: self.num_migrants.unwrap_or(defaults.num_migrants),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IslandOptions::default();
        assert_eq!(options.get_migration_interval(), 5);
        assert_eq!(options.get_num_migrants(), 5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_migration_schedule() {
        let options = IslandOptions::builder().migration_interval(3).build();
        let migrating: Vec<usize> = (0..10).filter(|&g| options.migrates_after(g)).collect();

        assert_eq!(migrating, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let options = IslandOptions::new(EvolutionOptions::default(), 0, 2);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_invalid_evolution_options_are_rejected() {
        let evolution = EvolutionOptions::builder().mutation_probability(-0.5).build();
        let options = IslandOptions::builder().evolution(evolution).build();

        assert!(options.validate().is_err());
    }
}
