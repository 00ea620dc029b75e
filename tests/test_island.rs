use genevo::{
    error::GeneticError,
    evolution::{EvolutionOptions, Population},
    gene::{Bounds, Gene},
    individual::Individual,
    island::{IslandModel, IslandOptions},
};

type Fitness = fn(&Individual) -> f64;

fn one_max(ind: &Individual) -> f64 {
    ind.iter().filter(|g| g.as_bool() == Some(true)).count() as f64
}

fn sphere(ind: &Individual) -> f64 {
    -ind.iter().map(|g| g.as_f64().powi(2)).sum::<f64>()
}

fn one_max_islands(seeds: &[u64], size: usize) -> Vec<Population<Fitness>> {
    seeds
        .iter()
        .map(|&seed| {
            let mut island = Population::new(&[Gene::from(false); 30], None, one_max as Fitness)
                .unwrap()
                .with_seed(seed);
            island.populate(size).unwrap();
            island
        })
        .collect()
}

fn mixed_islands(seeds: &[u64]) -> Vec<Population<Fitness>> {
    let prototype = vec![Gene::from(0.0), Gene::from(0), Gene::from(0.0), Gene::from(true)];
    let bounds = vec![
        Bounds::new(-4.0, 4.0),
        Bounds::new(-10.0, 10.0),
        Bounds::default(),
        Bounds::default(),
    ];
    seeds
        .iter()
        .map(|&seed| {
            let mut island = Population::new(&prototype, Some(&bounds), sphere as Fitness)
                .unwrap()
                .with_seed(seed);
            island.populate(24).unwrap();
            island
        })
        .collect()
}

fn options(num_generations: usize, migration_interval: usize, num_migrants: usize) -> IslandOptions {
    IslandOptions::builder()
        .evolution(
            EvolutionOptions::builder()
                .num_generations(num_generations)
                .mate_probability(0.5)
                .mutation_probability(0.3)
                .build(),
        )
        .migration_interval(migration_interval)
        .num_migrants(num_migrants)
        .build()
}

fn snapshot(model: &IslandModel<Fitness>) -> Vec<Vec<Individual>> {
    model
        .islands()
        .iter()
        .map(|island| island.individuals().to_vec())
        .collect()
}

#[test]
fn test_island_model_improves() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2, 3, 4], 40)).unwrap();
    let initial = model.best().unwrap().fitness().unwrap();

    model.evolve(&options(30, 5, 4)).unwrap();

    assert!(model.best().unwrap().fitness().unwrap() > initial);
    assert!(model.islands().iter().all(|island| island.len() == 40));
}

#[test]
fn test_parallel_matches_sequential() {
    let options = options(17, 4, 3);

    let mut sequential = IslandModel::new(mixed_islands(&[10, 20, 30])).unwrap();
    sequential.evolve(&options).unwrap();

    let mut parallel = IslandModel::new(mixed_islands(&[10, 20, 30])).unwrap();
    parallel.evolve_parallel(&options).unwrap();

    assert_eq!(snapshot(&sequential), snapshot(&parallel));
    assert_eq!(
        sequential.best().unwrap().fitness().unwrap(),
        parallel.best().unwrap().fitness().unwrap()
    );
}

#[test]
fn test_parallel_with_two_islands() {
    let mut model = IslandModel::new(one_max_islands(&[5, 6], 16)).unwrap();
    model.evolve_parallel(&options(12, 1, 16)).unwrap();

    assert!(model.islands().iter().all(|island| island.len() == 16));
}

#[test]
fn test_too_many_migrants_is_rejected_up_front() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2], 5)).unwrap();

    assert!(matches!(
        model.evolve_parallel(&options(5, 1, 6)),
        Err(GeneticError::Configuration(_))
    ));
    assert!(matches!(
        model.evolve(&options(5, 1, 6)),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_zero_migration_interval_is_rejected() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2], 10)).unwrap();

    assert!(model.evolve(&options(5, 0, 2)).is_err());
}

#[test]
fn test_failing_island_reports_root_cause() {
    fn fragile(ind: &Individual) -> f64 {
        let x = ind[0].as_f64();
        if x > 50.0 {
            f64::NAN
        } else {
            -x
        }
    }

    let build = || {
        let narrow = [Bounds::new(0.0, 1.0)];
        let mut safe = Population::new(&[Gene::from(0.0)], Some(&narrow[..]), fragile as Fitness)
            .unwrap()
            .with_seed(1);
        safe.populate(10).unwrap();

        // Starts safe, but mutation soon pushes genes above 50
        let wide = [Bounds::new(0.0, 100.0)];
        let mut doomed = Population::new(&[Gene::from(0.0)], Some(&wide[..]), fragile as Fitness)
            .unwrap()
            .with_seed(2);
        doomed.populate_from(vec![vec![Gene::from(0.0)]; 10]).unwrap();

        IslandModel::new(vec![safe, doomed]).unwrap()
    };
    let options = options(20, 1, 2);

    assert!(matches!(
        build().evolve(&options),
        Err(GeneticError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        build().evolve_parallel(&options),
        Err(GeneticError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_select_population() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2, 3], 20))
        .unwrap()
        .with_seed(7);
    model.evolve(&options(5, 2, 2)).unwrap();

    let merged = model.select_population(3).unwrap();
    assert_eq!(merged.len(), 20);
    assert!(merged.iter().all(Individual::is_valid));

    let pooled_mean = model
        .islands()
        .iter()
        .flat_map(|island| island.iter())
        .map(|ind| ind.fitness().unwrap())
        .sum::<f64>()
        / 60.0;
    assert!(merged.stats().unwrap().mean_fitness >= pooled_mean);
}

#[test]
fn test_select_population_rejects_oversized_tournament() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2], 3)).unwrap();

    assert!(matches!(
        model.select_population(7),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_amalgamate() {
    let mut model = IslandModel::new(one_max_islands(&[1, 2, 3], 10)).unwrap();

    let merged = model.amalgamate().unwrap();
    assert_eq!(merged.len(), 30);

    let islands = model.into_islands();
    let expected: Vec<Individual> = islands
        .iter()
        .flat_map(|island| island.iter().cloned())
        .collect();
    assert_eq!(merged.individuals(), expected.as_slice());
}
