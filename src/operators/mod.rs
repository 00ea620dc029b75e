//! # Operator Table
//!
//! The `OperatorTable` binds one `GeneOperator` per genome position when a
//! population is built. Generation, crossover and mutation then walk the table
//! alongside the genes, so heterogeneous genomes need no type inspection while
//! evolving.
//!
//! ## Example
//!
//! ```rust
//! use genevo::gene::{Bounds, Gene, GeneKind};
//! use genevo::operators::OperatorTable;
//! use genevo::rng::RandomNumberGenerator;
//!
//! let prototype = vec![Gene::from(false), Gene::from(0), Gene::from(0.0)];
//! let bounds = vec![Bounds::default(), Bounds::new(0.0, 9.0), Bounds::new(0.0, 1.0)];
//! let table = OperatorTable::new(&prototype, Some(&bounds)).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let individual = table.generate(&mut rng);
//!
//! assert_eq!(individual.len(), 3);
//! assert_eq!(table.kinds(), vec![GeneKind::Boolean, GeneKind::Integer, GeneKind::Real]);
//! ```

pub mod crossover;
pub mod gene_operator;
pub mod mutation;

pub use crossover::Blend;
pub use gene_operator::GeneOperator;
pub use mutation::MutationSchedule;

use crate::error::{GeneticError, Result};
use crate::gene::{Bounds, Gene, GeneKind};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    operators: Vec<GeneOperator>,
}

impl OperatorTable {
    /// Builds the table from a prototype genome and optional per-position bounds.
    ///
    /// Without bounds every position uses `Bounds::default()`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the prototype is empty, if the
    /// bounds and prototype lengths differ, or if any numeric position has
    /// unusable bounds.
    pub fn new(prototype: &[Gene], bounds: Option<&[Bounds]>) -> Result<Self> {
        if prototype.is_empty() {
            return Err(GeneticError::Configuration(
                "Prototype genome cannot be empty".to_string(),
            ));
        }

        if let Some(bounds) = bounds {
            if bounds.len() != prototype.len() {
                return Err(GeneticError::Configuration(format!(
                    "len(prototype) != len(bounds): {} != {}",
                    prototype.len(),
                    bounds.len()
                )));
            }
        }

        let operators = prototype
            .iter()
            .enumerate()
            .map(|(position, gene)| {
                let bound = bounds.map_or_else(Bounds::default, |b| b[position]);
                GeneOperator::bind(position, gene, bound)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { operators })
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn operators(&self) -> &[GeneOperator] {
        &self.operators
    }

    pub fn kinds(&self) -> Vec<GeneKind> {
        self.operators.iter().map(GeneOperator::kind).collect()
    }

    /// Generates a new, unevaluated individual gene by gene.
    pub fn generate(&self, rng: &mut RandomNumberGenerator) -> Individual {
        Individual::new(self.operators.iter().map(|op| op.generate(rng)).collect())
    }

    /// Checks that a caller-supplied gene sequence fits this genome and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` on a length or kind mismatch.
    pub fn adopt(&self, genes: &[Gene]) -> Result<Individual> {
        if genes.len() != self.operators.len() {
            return Err(GeneticError::Configuration(format!(
                "Expected {} genes, got {}",
                self.operators.len(),
                genes.len()
            )));
        }

        for (position, (gene, op)) in genes.iter().zip(&self.operators).enumerate() {
            if gene.kind() != op.kind() {
                return Err(GeneticError::Configuration(format!(
                    "Gene {} is {} but the genome expects {}",
                    position,
                    gene.kind(),
                    op.kind()
                )));
            }
        }

        Ok(Individual::new(genes.to_vec()))
    }

    /// Mates two individuals in place and invalidates both.
    pub fn mate(&self, ind1: &mut Individual, ind2: &mut Individual, rng: &mut RandomNumberGenerator) {
        let blend = Blend::draw(self.operators.len(), rng);

        for (position, ((op, gene1), gene2)) in self
            .operators
            .iter()
            .zip(ind1.genes_mut())
            .zip(ind2.genes_mut())
            .enumerate()
        {
            op.mate(position, gene1, gene2, &blend);
        }

        ind1.invalidate();
        ind2.invalidate();
    }

    /// Mutates every position of an individual and invalidates it.
    pub fn mutate(
        &self,
        ind: &mut Individual,
        rng: &mut RandomNumberGenerator,
        schedule: &MutationSchedule,
    ) {
        for (op, gene) in self.operators.iter().zip(ind.genes_mut()) {
            op.mutate(gene, rng, schedule);
        }

        ind.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_table() -> OperatorTable {
        let prototype = vec![
            Gene::from(true),
            Gene::from(0),
            Gene::from(0.0),
            Gene::from(0.0),
        ];
        let bounds = vec![
            Bounds::default(),
            Bounds::new(-5.0, 5.0),
            Bounds::new(0.0, 1.0),
            Bounds::new(10.0, 20.0),
        ];
        OperatorTable::new(&prototype, Some(&bounds)).unwrap()
    }

    #[test]
    fn test_mismatched_bounds_length() {
        let prototype = vec![Gene::from(1.0), Gene::from(2.0)];
        let bounds = vec![Bounds::default()];

        let result = OperatorTable::new(&prototype, Some(&bounds));
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("len(prototype) != len(bounds)"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_empty_prototype() {
        assert!(OperatorTable::new(&[], None).is_err());
    }

    #[test]
    fn test_default_bounds() {
        let table = OperatorTable::new(&[Gene::from(0.0), Gene::from(0)], None).unwrap();
        assert_eq!(
            table.operators(),
            &[
                GeneOperator::Real { lower: -1.0, upper: 1.0 },
                GeneOperator::Integer { lower: -1, upper: 1 }
            ]
        );
    }

    #[test]
    fn test_adopt_checks_kinds() {
        let table = mixed_table();

        let wrong_kind = vec![Gene::from(true), Gene::from(0.5), Gene::from(0.0), Gene::from(0.0)];
        assert!(table.adopt(&wrong_kind).is_err());

        let too_short = vec![Gene::from(true)];
        assert!(table.adopt(&too_short).is_err());

        let fitting = vec![Gene::from(false), Gene::from(2), Gene::from(0.1), Gene::from(15.0)];
        let ind = table.adopt(&fitting).unwrap();
        assert_eq!(ind.genes(), fitting.as_slice());
        assert!(!ind.is_valid());
    }

    #[test]
    fn test_mate_invalidates_and_conserves_real_sums() {
        let table = mixed_table();
        let mut rng = RandomNumberGenerator::from_seed(17);

        let mut ind1 = table.generate(&mut rng);
        let mut ind2 = table.generate(&mut rng);
        ind1.assign_fitness(1.0);
        ind2.assign_fitness(2.0);

        let before: Vec<f64> = (2..4).map(|p| ind1[p].as_f64() + ind2[p].as_f64()).collect();
        table.mate(&mut ind1, &mut ind2, &mut rng);
        let after: Vec<f64> = (2..4).map(|p| ind1[p].as_f64() + ind2[p].as_f64()).collect();

        for (b, a) in before.iter().zip(&after) {
            assert!((a - b).abs() < 1e-9);
        }
        assert!(!ind1.is_valid());
        assert!(!ind2.is_valid());
    }

    #[test]
    fn test_mate_conserves_sum_of_out_of_range_seeds() {
        let table = OperatorTable::new(&[Gene::from(0.0), Gene::from(0.0)], None).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(29);

        for _ in 0..50 {
            let mut ind1 = table.adopt(&[Gene::from(5.0), Gene::from(-7.5)]).unwrap();
            let mut ind2 = table.adopt(&[Gene::from(3.0), Gene::from(0.5)]).unwrap();
            table.mate(&mut ind1, &mut ind2, &mut rng);

            assert!((ind1[0].as_f64() + ind2[0].as_f64() - 8.0).abs() < 1e-9);
            assert!((ind1[1].as_f64() + ind2[1].as_f64() + 7.0).abs() < 1e-9);
            assert!((3.0..=5.0).contains(&ind1[0].as_f64()));
            assert!((-7.5..=0.5).contains(&ind2[1].as_f64()));
        }
    }

    #[test]
    fn test_mate_swaps_discrete_prefix() {
        let prototype = vec![Gene::from(0); 6];
        let bounds = vec![Bounds::new(0.0, 100.0); 6];
        let table = OperatorTable::new(&prototype, Some(&bounds)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(6);

        let genes1: Vec<Gene> = (0..6).map(Gene::from).collect();
        let genes2: Vec<Gene> = (10..16).map(Gene::from).collect();
        let mut ind1 = Individual::new(genes1.clone());
        let mut ind2 = Individual::new(genes2.clone());

        table.mate(&mut ind1, &mut ind2, &mut rng);

        // Positions 0..=cutoff are exchanged, the rest stays put
        let swapped = (0..6).take_while(|&p| ind1[p] == genes2[p]).count();
        assert!((2..=6).contains(&swapped));
        for p in swapped..6 {
            assert_eq!(ind1[p], genes1[p]);
            assert_eq!(ind2[p], genes2[p]);
        }
    }

    #[test]
    fn test_mutate_invalidates_and_respects_bounds() {
        let table = mixed_table();
        let mut rng = RandomNumberGenerator::from_seed(23);
        let schedule = MutationSchedule::new(0, 5, 0.5, 0.0);

        let mut ind = table.generate(&mut rng);
        for _ in 0..100 {
            ind.assign_fitness(0.0);
            table.mutate(&mut ind, &mut rng, &schedule);
            assert!(!ind.is_valid());

            for (op, gene) in table.operators().iter().zip(ind.iter()) {
                if let Some(bounds) = op.bounds() {
                    assert!(bounds.contains(gene.as_f64()));
                }
            }
        }
    }
}
