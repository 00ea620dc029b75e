use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use genevo::{
    evolution::{EvolutionOptions, Population},
    gene::{Bounds, Gene},
    individual::Individual,
};

fn one_max(ind: &Individual) -> f64 {
    ind.iter().filter(|g| g.as_bool() == Some(true)).count() as f64
}

// Deliberately heavy so that parallel evaluation has something to win
fn rastrigin(ind: &Individual) -> f64 {
    let sum: f64 = ind
        .iter()
        .map(|g| {
            let x = g.as_f64();
            x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos() + 10.0
        })
        .sum();
    -sum
}

fn bench_one_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_max");
    let options = EvolutionOptions::builder().num_generations(10).build();

    for size in [100, 300, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("evolve", size), size, |b, &size| {
            b.iter(|| {
                let mut population = Population::new(&[Gene::from(false); 100], None, one_max)
                    .unwrap()
                    .with_seed(1);
                population.populate(size).unwrap();
                black_box(population.evolve(black_box(&options)).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let prototype = vec![Gene::from(0.0); 50];
    let bounds = vec![Bounds::new(-5.12, 5.12); 50];

    for size in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, &size| {
            b.iter(|| {
                let mut population = Population::new(&prototype, Some(&bounds), rastrigin)
                    .unwrap()
                    .with_seed(2)
                    .with_parallel_threshold(usize::MAX);
                population.populate(black_box(size)).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, &size| {
            b.iter(|| {
                let mut population = Population::new(&prototype, Some(&bounds), rastrigin)
                    .unwrap()
                    .with_seed(2)
                    .with_parallel_threshold(1);
                population.populate(black_box(size)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_one_max, bench_evaluation);
criterion_main!(benches);
