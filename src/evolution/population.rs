//! # Population
//!
//! A `Population` owns the individuals of one evolving pool, the operator
//! table built from the prototype genome, the shared fitness function, its own
//! random source and the champion: a copy of the fittest individual seen over
//! the whole history of the population.
//!
//! ## Example
//!
//! ```rust
//! use genevo::evolution::{EvolutionOptions, Population};
//! use genevo::gene::{Bounds, Gene};
//! use genevo::individual::Individual;
//!
//! let prototype = vec![Gene::from(0.0)];
//! let bounds = vec![Bounds::new(0.0, 1.0)];
//! let fitness = |ind: &Individual| -(ind[0].as_f64() - 0.73).abs();
//!
//! let mut population = Population::new(&prototype, Some(&bounds), fitness)
//!     .unwrap()
//!     .with_seed(1);
//! population.populate(100).unwrap();
//!
//! let options = EvolutionOptions::builder().num_generations(20).build();
//! population.evolve(&options).unwrap();
//!
//! let best = population.best().unwrap();
//! assert!((best[0].as_f64() - 0.73).abs() < 0.05);
//! ```
//!
//! ## Random draw order
//!
//! Given a seed, every run draws in the same order. One generation draws:
//! the selection tournaments (one index sample per tournament), then for each
//! pair `(2k, 2k + 1)` in order: the mate draw (followed by the cutoff and the
//! blend weight if mating), the mutation draw of the first individual
//! (followed by its per-gene draws in position order if mutating), and the
//! mutation draw of the second individual (likewise). Evaluation and reporting
//! draw nothing.

use std::ops::Index;
use std::slice;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
    stats::GenerationStats,
};
use crate::{
    error::{GeneticError, Result},
    gene::{Bounds, Gene, GeneKind},
    individual::Individual,
    operators::{MutationSchedule, OperatorTable},
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

/// Population size used when the caller has no preference.
pub const DEFAULT_POPULATION_SIZE: usize = 300;

/// Pending evaluations at or above which fitness is computed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[derive(Debug)]
pub struct Population<C> {
    individuals: Vec<Individual>,
    table: OperatorTable,
    challenge: Arc<C>,
    best: Option<Individual>,
    rng: RandomNumberGenerator,
    parallel_threshold: usize,
}

impl<C> Population<C>
where
    C: Challenge,
{
    /// Creates an empty population for the given prototype genome.
    ///
    /// # Arguments
    ///
    /// * `prototype` - One gene per position; only the kind of each gene matters.
    /// * `bounds` - Optional per-position bounds, `Bounds::default()` everywhere if `None`.
    /// * `challenge` - The fitness function.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the prototype is empty, if the
    /// bounds do not match the prototype length, or if a numeric position has
    /// unusable bounds.
    pub fn new(prototype: &[Gene], bounds: Option<&[Bounds]>, challenge: C) -> Result<Self> {
        let table = OperatorTable::new(prototype, bounds)?;
        debug!(genome_len = table.len(), "Population created");

        Ok(Self::from_table(
            table,
            Arc::new(challenge),
            RandomNumberGenerator::new(),
        ))
    }

    pub(crate) fn from_table(
        table: OperatorTable,
        challenge: Arc<C>,
        rng: RandomNumberGenerator,
    ) -> Self {
        Self {
            individuals: Vec::new(),
            table,
            challenge,
            best: None,
            rng,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Replaces the random source with one seeded from `seed`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = rng;
        self
    }

    /// Sets how many pending evaluations trigger parallel fitness evaluation.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Creates an empty population sharing this one's genome and fitness function.
    pub(crate) fn sibling(&self, rng: RandomNumberGenerator) -> Self {
        Self::from_table(self.table.clone(), Arc::clone(&self.challenge), rng)
            .with_parallel_threshold(self.parallel_threshold)
    }

    /// Fills the population with `popsize` randomly generated individuals and
    /// evaluates them.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `popsize` is zero, and propagates
    /// evaluation errors.
    pub fn populate(&mut self, popsize: usize) -> Result<()> {
        if popsize == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let table = &self.table;
        let rng = &mut self.rng;
        self.individuals = (0..popsize).map(|_| table.generate(rng)).collect();
        debug!(popsize, "Population generated");

        self.evaluate()
    }

    /// Fills the population from caller-supplied gene sequences and evaluates them.
    ///
    /// Any requested size is ignored: the population takes exactly one
    /// individual per sequence. Sequences are copied as fresh, unevaluated
    /// individuals, so this also seeds a population from another one's
    /// individuals.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `base` is empty, a configuration error if a
    /// sequence does not fit the genome, and propagates evaluation errors.
    pub fn populate_from<I>(&mut self, base: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[Gene]>,
    {
        let individuals = base
            .into_iter()
            .map(|genes| self.table.adopt(genes.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        self.individuals = individuals;
        debug!(popsize = self.individuals.len(), "Population seeded");

        self.evaluate()
    }

    /// Evolves the population in place for `options.get_num_generations()`
    /// generations and returns the statistics of each.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the population has not been
    /// populated, or an evaluation fails. The population is left in the state
    /// of the last completed step.
    pub fn evolve(&mut self, options: &EvolutionOptions) -> Result<Vec<GenerationStats>> {
        options.validate()?;

        (0..options.get_num_generations())
            .map(|generation| self.step(options, generation))
            .collect()
    }

    /// Evolves the population by exactly one generation.
    ///
    /// `generation` (0-based) and `options.get_num_generations()` drive the
    /// annealing of real-gene mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, `generation` is not below
    /// the number of generations, the tournament does not fit the population,
    /// the population is empty, or an evaluation fails.
    pub fn step(&mut self, options: &EvolutionOptions, generation: usize) -> Result<GenerationStats> {
        options.validate()?;

        let num_generations = options.get_num_generations();
        if generation >= num_generations {
            return Err(GeneticError::Configuration(format!(
                "Generation index {} is out of range for {} generations",
                generation, num_generations
            )));
        }

        let selection = TournamentSelection::new(options.get_tournament_size())?;
        self.individuals = selection.select(&self.individuals, self.individuals.len(), &mut self.rng)?;

        let schedule = MutationSchedule::new(
            generation,
            num_generations,
            options.get_flip_probability(),
            options.get_scoping(),
        );
        let mate_probability = options.get_mate_probability();
        let mutation_probability = options.get_mutation_probability();

        for pair in self.individuals.chunks_exact_mut(2) {
            if let [ind1, ind2] = pair {
                if self.rng.uniform() < mate_probability {
                    self.table.mate(ind1, ind2, &mut self.rng);
                }
                if self.rng.uniform() < mutation_probability {
                    self.table.mutate(ind1, &mut self.rng, &schedule);
                }
                if self.rng.uniform() < mutation_probability {
                    self.table.mutate(ind2, &mut self.rng, &schedule);
                }
            }
        }

        self.evaluate()?;

        let stats = GenerationStats::from_individuals(generation, &self.individuals)?;
        self.report(&stats, options.get_log_level());

        Ok(stats)
    }

    /// Scores every individual whose fitness is stale, then updates the champion.
    fn evaluate(&mut self) -> Result<()> {
        if self.individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let challenge = &*self.challenge;
        let pending = self.individuals.iter().filter(|ind| !ind.is_valid()).count();
        trace!(pending, "Evaluating population");

        if pending >= self.parallel_threshold {
            self.individuals
                .par_iter_mut()
                .filter(|ind| !ind.is_valid())
                .try_for_each(|ind| score_individual(challenge, ind))?;
        } else {
            for ind in self.individuals.iter_mut().filter(|ind| !ind.is_valid()) {
                score_individual(challenge, ind)?;
            }
        }

        let mut champion = &self.individuals[0];
        let mut champion_fitness = champion.fitness()?;
        for ind in &self.individuals[1..] {
            let fitness = ind.fitness()?;
            if fitness > champion_fitness {
                champion = ind;
                champion_fitness = fitness;
            }
        }

        let improved = match &self.best {
            Some(best) => champion_fitness > best.fitness()?,
            None => true,
        };
        if improved {
            trace!(fitness = champion_fitness, "New champion");
            self.best = Some(champion.clone());
        }

        Ok(())
    }

    fn report(&self, stats: &GenerationStats, log_level: &LogLevel) {
        if !log_level.is_enabled() {
            return;
        }

        info!(
            generation = stats.generation,
            max_fitness = stats.max_fitness,
            variance = stats.variance,
            "Generation complete"
        );

        if let LogLevel::Verbose = log_level {
            debug!(
                generation = stats.generation,
                mean_fitness = stats.mean_fitness,
                champion = ?self.best,
                "Generation details"
            );
        }
    }

    /// Summarises the current individuals, `None` before the population is filled.
    pub fn stats(&self) -> Option<GenerationStats> {
        GenerationStats::from_individuals(0, &self.individuals).ok()
    }
}

impl<C> Population<C> {
    /// The fittest individual seen over the whole history of this population.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn genome_len(&self) -> usize {
        self.table.len()
    }

    pub fn genome_kinds(&self) -> Vec<GeneKind> {
        self.table.kinds()
    }

    /// Bounds of each position, `None` for boolean positions.
    pub fn bounds(&self) -> Vec<Option<Bounds>> {
        self.table.operators().iter().map(|op| op.bounds()).collect()
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub(crate) fn rng_mut(&mut self) -> &mut RandomNumberGenerator {
        &mut self.rng
    }
}

fn score_individual<C>(challenge: &C, ind: &mut Individual) -> Result<()>
where
    C: Challenge + ?Sized,
{
    let score = challenge.score(ind);
    if score.is_nan() {
        return Err(GeneticError::InvalidNumericValue(format!(
            "Fitness function returned NaN for {:?}",
            ind.genes()
        )));
    }

    ind.assign_fitness(score);
    Ok(())
}

impl<C> Index<usize> for Population<C> {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<'a, C> IntoIterator for &'a Population<C> {
    type Item = &'a Individual;
    type IntoIter = slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
