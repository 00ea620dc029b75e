//! # Island Model
//!
//! An `IslandModel` evolves several populations side by side and periodically
//! exchanges individuals between them along a ring, which keeps diversity up
//! and helps islands escape local optima.
//!
//! Islands must share their genome layout (length and kind of every
//! position); their bounds may differ. `evolve` steps the islands one after
//! the other in the calling thread, `evolve_parallel` gives every island its
//! own thread and meets at each migration round. Both variants consume the
//! same random numbers, so they produce identical islands for identical seeds.
//!
//! ## Example
//!
//! ```rust
//! use genevo::evolution::{EvolutionOptions, Population};
//! use genevo::gene::Gene;
//! use genevo::individual::Individual;
//! use genevo::island::{IslandModel, IslandOptions};
//!
//! let fitness = |ind: &Individual| ind.iter().map(Gene::as_f64).sum::<f64>();
//! let islands = (0..3)
//!     .map(|seed| -> genevo::Result<_> {
//!         let mut island = Population::new(&[Gene::from(false); 20], None, fitness)?
//!             .with_seed(seed);
//!         island.populate(30)?;
//!         Ok(island)
//!     })
//!     .collect::<genevo::Result<Vec<_>>>()
//!     .unwrap();
//!
//! let mut model = IslandModel::new(islands).unwrap();
//! let options = IslandOptions::builder()
//!     .evolution(EvolutionOptions::builder().num_generations(10).build())
//!     .migration_interval(3)
//!     .num_migrants(2)
//!     .build();
//!
//! model.evolve_parallel(&options).unwrap();
//! assert!(model.best().is_some());
//! ```

pub mod migration;
pub mod options;

pub use options::{IslandOptions, IslandOptionsBuilder};

use std::panic;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use tracing::{debug, info_span};

use crate::{
    error::{GeneticError, Result},
    evolution::{Challenge, Population},
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};
use migration::Migrants;

pub struct IslandModel<C> {
    islands: Vec<Population<C>>,
    rng: RandomNumberGenerator,
}

impl<C> IslandModel<C>
where
    C: Challenge,
{
    /// Groups populations into an island model.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if fewer than two populations are given
    /// or if their genome layouts differ.
    pub fn new(islands: Vec<Population<C>>) -> Result<Self> {
        if islands.len() < 2 {
            return Err(GeneticError::Configuration(
                "At least two populations are required for an island model".to_string(),
            ));
        }

        let kinds = islands[0].genome_kinds();
        if let Some(index) = islands.iter().position(|island| island.genome_kinds() != kinds) {
            return Err(GeneticError::Configuration(format!(
                "Island {} does not share the genome layout of island 0",
                index
            )));
        }

        debug!(islands = islands.len(), "Island model created");
        Ok(Self {
            islands,
            rng: RandomNumberGenerator::new(),
        })
    }

    /// Seeds the generator used by `select_population` and `amalgamate`.
    ///
    /// Each island keeps its own generator; seed those on the populations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RandomNumberGenerator::from_seed(seed);
        self
    }

    pub fn islands(&self) -> &[Population<C>] {
        &self.islands
    }

    pub fn num_islands(&self) -> usize {
        self.islands.len()
    }

    pub fn into_islands(self) -> Vec<Population<C>> {
        self.islands
    }

    /// The fittest champion across all islands.
    pub fn best(&self) -> Option<&Individual> {
        self.islands
            .iter()
            .filter_map(Population::best)
            .fold(None, |best: Option<&Individual>, candidate| match best {
                Some(current) if fitness_of(current) >= fitness_of(candidate) => Some(current),
                _ => Some(candidate),
            })
    }

    fn check_ready(&self, options: &IslandOptions) -> Result<()> {
        options.validate()?;

        for (index, island) in self.islands.iter().enumerate() {
            if island.is_empty() {
                return Err(GeneticError::Configuration(format!(
                    "Island {} has not been populated",
                    index
                )));
            }
            if island.len() < options.get_num_migrants() {
                return Err(GeneticError::Configuration(format!(
                    "Island {} holds {} individuals but {} migrants are requested",
                    index,
                    island.len(),
                    options.get_num_migrants()
                )));
            }
        }

        Ok(())
    }

    /// Evolves every island in the calling thread, migrating along the ring
    /// after generation 0 and every `migration_interval` generations.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, an island is empty or too
    /// small for the requested migrants, or any island step fails.
    pub fn evolve(&mut self, options: &IslandOptions) -> Result<()> {
        self.check_ready(options)?;
        let evolution = options.get_evolution();

        for generation in 0..evolution.get_num_generations() {
            for (index, island) in self.islands.iter_mut().enumerate() {
                let _span = info_span!("island", index).entered();
                island.step(evolution, generation)?;
            }

            if options.migrates_after(generation) {
                migration::ring_migrate(&mut self.islands, options.get_num_migrants())?;
            }
        }

        Ok(())
    }

    /// Evolves every island in its own thread.
    ///
    /// Islands only meet at migration rounds: each sends its migrants to the
    /// next island and blocks until the previous island's migrants arrive.
    /// All islands follow the same options, so they always reach the same
    /// rounds. A failing island hangs up its channels, which makes its
    /// neighbours fail with `GeneticError::Migration` instead of waiting
    /// forever; the error of the island that failed first is returned. A panic
    /// inside the fitness function is resumed on the calling thread.
    ///
    /// # Errors
    ///
    /// Same as `evolve`.
    pub fn evolve_parallel(&mut self, options: &IslandOptions) -> Result<()> {
        self.check_ready(options)?;

        let (outboxes, mut inboxes): (Vec<SyncSender<Migrants>>, Vec<Receiver<Migrants>>) =
            (0..self.islands.len()).map(|_| mpsc::sync_channel(1)).unzip();
        // Island i reads the channel island i - 1 writes to
        inboxes.rotate_right(1);

        let results: Vec<Result<()>> = thread::scope(|scope| {
            let handles: Vec<_> = self
                .islands
                .iter_mut()
                .zip(outboxes)
                .zip(inboxes)
                .enumerate()
                .map(|(index, ((island, outbox), inbox))| {
                    scope.spawn(move || run_island(index, island, options, &outbox, &inbox))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect()
        });

        let mut errors: Vec<GeneticError> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            return Ok(());
        }
        let root = errors
            .iter()
            .position(|e| !matches!(e, GeneticError::Migration(_)))
            .unwrap_or(0);
        Err(errors.swap_remove(root))
    }

    /// Builds one population of the size of the first island by tournament
    /// selection over the individuals of all islands.
    ///
    /// The result shares the genome and fitness function of the first island
    /// and is freshly evaluated.
    ///
    /// # Errors
    ///
    /// Returns an error if the islands are empty, the tournament does not fit
    /// the pooled individuals, or evaluation fails.
    pub fn select_population(&mut self, tournament_size: usize) -> Result<Population<C>> {
        let pool: Vec<Individual> = self
            .islands
            .iter()
            .flat_map(|island| island.iter().cloned())
            .collect();

        let selection = TournamentSelection::new(tournament_size)?;
        let selected = selection.select(&pool, self.islands[0].len(), &mut self.rng)?;

        let mut merged = self.islands[0].sibling(self.rng.fork());
        merged.populate_from(&selected)?;
        Ok(merged)
    }

    /// Pools the individuals of every island into a single population.
    ///
    /// # Errors
    ///
    /// Returns an error if the islands are empty or evaluation fails.
    pub fn amalgamate(&mut self) -> Result<Population<C>> {
        let mut merged = self.islands[0].sibling(self.rng.fork());
        merged.populate_from(self.islands.iter().flat_map(|island| island.iter()))?;
        Ok(merged)
    }
}

fn fitness_of(individual: &Individual) -> f64 {
    individual.fitness().unwrap_or(f64::NEG_INFINITY)
}

fn run_island<C>(
    index: usize,
    island: &mut Population<C>,
    options: &IslandOptions,
    outbox: &SyncSender<Migrants>,
    inbox: &Receiver<Migrants>,
) -> Result<()>
where
    C: Challenge,
{
    let _span = info_span!("island", index).entered();
    let evolution = options.get_evolution();

    for generation in 0..evolution.get_num_generations() {
        island.step(evolution, generation)?;

        if options.migrates_after(generation) {
            migration::exchange(island, options.get_num_migrants(), outbox, inbox)?;
        }
    }

    debug!("Island finished");
    Ok(())
}
