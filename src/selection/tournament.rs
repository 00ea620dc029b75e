use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly at
/// random and keeps the fittest. Tournaments are independent, so the same
/// individual may win many times: the output is a sample with replacement at
/// the population level.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// Ties are won by the participant drawn first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let participants = rng.sample_indices(population.len(), self.tournament_size);

        let mut best_idx = participants[0];
        let mut best_fitness = population[best_idx].fitness()?;

        for &idx in &participants[1..] {
            let current_fitness = population[idx].fitness()?;
            if current_fitness > best_fitness {
                best_idx = idx;
                best_fitness = current_fitness;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.tournament_size > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner_idx = self.run_tournament(population, rng)?;
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }
}
