use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// Fitness summary of one generation.
///
/// Computing it never touches the random source, so reporting has no effect
/// on the evolutionary trajectory.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub max_fitness: f64,
    pub mean_fitness: f64,
    /// Population variance (divides by the number of individuals).
    pub variance: f64,
}

impl GenerationStats {
    /// Summarises a fully evaluated population.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty slice and `UnevaluatedIndividual`
    /// if any fitness is stale.
    pub fn from_individuals(generation: usize, individuals: &[Individual]) -> Result<Self> {
        if individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let fits = individuals
            .iter()
            .map(Individual::fitness)
            .collect::<Result<Vec<f64>>>()?;

        let n = fits.len() as f64;
        let max_fitness = fits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_fitness = fits.iter().sum::<f64>() / n;
        let variance = fits
            .iter()
            .map(|f| (f - mean_fitness).powi(2))
            .sum::<f64>()
            / n;

        Ok(Self {
            generation,
            max_fitness,
            mean_fitness,
            variance,
        })
    }
}
