use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies are responsible for choosing individuals from a population
/// based on their cached fitness. Selected individuals are returned by value: each
/// is an independent copy carrying its fitness cache.
///
/// # Examples
///
/// ```
/// use genevo::gene::Gene;
/// use genevo::individual::Individual;
/// use genevo::rng::RandomNumberGenerator;
/// use genevo::selection::{SelectionStrategy, TournamentSelection};
/// use genevo::error::Result;
///
/// fn main() -> Result<()> {
///     // Selection needs evaluated individuals; evaluation happens inside a Population.
///     let population: Vec<Individual> = Vec::new();
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = TournamentSelection::new(3)?;
///     assert!(selection.select(&population, 10, &mut rng).is_err());
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - A participant's fitness has not been evaluated
    /// - The strategy's parameters do not fit the population
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}
