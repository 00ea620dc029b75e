//! # Error Types
//!
//! This module defines the error type shared by every operation of the crate.
//! Configuration problems are reported when a population, operator table or
//! island model is built, usage problems (reading the fitness of an
//! individual that was never evaluated, a fitness function returning NaN) are
//! reported at the point of use.
//!
//! ## Examples
//!
//! ```rust
//! use genevo::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!(
//!             "Rate must lie in [0, 1], got {}",
//!             rate
//!         )));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.3).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or evolving populations.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when the fitness of an individual is read before it
    /// has been evaluated for its current genes.
    #[error("Unevaluated individual: fitness is not valid for the current genes")]
    UnevaluatedIndividual,

    /// Error that occurs when NaN values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an island cannot exchange migrants with its neighbours.
    #[error("Migration error: {0}")]
    Migration(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;
