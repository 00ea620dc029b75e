//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the tuning parameters of the
//! evolution loop: how many generations to run, how often individuals mate and
//! mutate, how strongly real-gene mutation anneals, the tournament size and
//! how much per-generation reporting to emit.
//!
//! ## Example
//!
//! ```rust
//! use genevo::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_generations(), 40);
//!
//! // Or configure it with the builder
//! let options = EvolutionOptions::builder()
//!     .num_generations(100)
//!     .mate_probability(0.5)
//!     .scoping(2.0)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of generations `evolve` runs (`ngen`).
//! - `mate_probability`: Probability that a pair of individuals mates (`matepb`).
//! - `mutation_probability`: Probability that an individual mutates (`mutpb`).
//! - `flip_probability`: Per-gene flip probability of boolean genes (`indpb`).
//! - `scoping`: Annealing exponent of real-gene mutation. `0` disables annealing.
//! - `tournament_size`: Number of participants per selection tournament.
//! - `log_level`: The amount of per-generation reporting.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: Reports the maximum fitness and variance of every generation,
//!   plus the mean fitness and the champion at debug level.
//! - `Minimal`: Reports the maximum fitness and variance of every generation.
//! - `None`: Disables reporting.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

impl LogLevel {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, LogLevel::None)
    }
}

impl From<bool> for LogLevel {
    /// Maps a plain `verbose` switch onto a log level.
    fn from(verbose: bool) -> Self {
        if verbose {
            LogLevel::Minimal
        } else {
            LogLevel::None
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    mate_probability: f64,
    mutation_probability: f64,
    flip_probability: f64,
    scoping: f64,
    tournament_size: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        mate_probability: f64,
        mutation_probability: f64,
        flip_probability: f64,
        scoping: f64,
        tournament_size: usize,
        log_level: LogLevel,
    ) -> Self {
        Self {
            num_generations,
            mate_probability,
            mutation_probability,
            flip_probability,
            scoping,
            tournament_size,
            log_level,
        }
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the number of generations or
    /// the tournament size is zero, if a probability lies outside `[0, 1]`, or
    /// if `scoping` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("Mate probability", self.mate_probability),
            ("Mutation probability", self.mutation_probability),
            ("Flip probability", self.flip_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.scoping.is_finite() || self.scoping < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Scoping must be a non-negative number, got {}",
                self.scoping
            )));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mate_probability(&self) -> f64 {
        self.mate_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_flip_probability(&self) -> f64 {
        self.flip_probability
    }

    pub fn get_scoping(&self) -> f64 {
        self.scoping
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_mate_probability(&mut self, mate_probability: f64) {
        self.mate_probability = mate_probability;
    }

    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    pub fn set_flip_probability(&mut self, flip_probability: f64) {
        self.flip_probability = flip_probability;
    }

    pub fn set_scoping(&mut self, scoping: f64) {
        self.scoping = scoping;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// This provides a more flexible way to configure evolution options
    /// with a fluent interface. Unset fields keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genevo::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .tournament_size(5)
    ///     .build();
    /// assert_eq!(options.get_mutation_probability(), 0.2);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 40,
            mate_probability: 0.3,
            mutation_probability: 0.2,
            flip_probability: 0.05,
            scoping: 0.0,
            tournament_size: 3,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    mate_probability: Option<f64>,
    mutation_probability: Option<f64>,
    flip_probability: Option<f64>,
    scoping: Option<f64>,
    tournament_size: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mate_probability(mut self, value: f64) -> Self {
        self.mate_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn flip_probability(mut self, value: f64) -> Self {
        self.flip_probability = Some(value);
        self
    }

    pub fn scoping(mut self, value: f64) -> Self {
        self.scoping = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            mate_probability: self.mate_probability.unwrap_or(defaults.mate_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            flip_probability: self.flip_probability.unwrap_or(defaults.flip_probability),
            scoping: self.scoping.unwrap_or(defaults.scoping),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_num_generations(), 40);
        assert_eq!(options.get_mate_probability(), 0.3);
        assert_eq!(options.get_mutation_probability(), 0.2);
        assert_eq!(options.get_flip_probability(), 0.05);
        assert_eq!(options.get_scoping(), 0.0);
        assert_eq!(options.get_tournament_size(), 3);
        assert_eq!(*options.get_log_level(), LogLevel::None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_new() {
        let built = EvolutionOptions::builder()
            .num_generations(10)
            .mate_probability(0.1)
            .mutation_probability(0.4)
            .flip_probability(0.2)
            .scoping(1.5)
            .tournament_size(4)
            .log_level(LogLevel::Verbose)
            .build();

        let direct = EvolutionOptions::new(10, 0.1, 0.4, 0.2, 1.5, 4, LogLevel::Verbose);
        assert_eq!(built, direct);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_generations = EvolutionOptions::builder().num_generations(0).build();
        assert!(zero_generations.validate().is_err());

        let bad_probability = EvolutionOptions::builder().mate_probability(1.2).build();
        match bad_probability.validate() {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Mate probability")),
            _ => panic!("Expected Configuration error"),
        }

        let nan_probability = EvolutionOptions::builder().flip_probability(f64::NAN).build();
        assert!(nan_probability.validate().is_err());

        let negative_scoping = EvolutionOptions::builder().scoping(-1.0).build();
        assert!(negative_scoping.validate().is_err());

        let zero_tournament = EvolutionOptions::builder().tournament_size(0).build();
        assert!(zero_tournament.validate().is_err());
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_num_generations(7);
        options.set_scoping(3.0);
        options.set_log_level(LogLevel::from(true));

        assert_eq!(options.get_num_generations(), 7);
        assert_eq!(options.get_scoping(), 3.0);
        assert_eq!(*options.get_log_level(), LogLevel::Minimal);
        assert!(options.get_log_level().is_enabled());
    }
}
