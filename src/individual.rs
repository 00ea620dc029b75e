//! # Individual
//!
//! An `Individual` is one candidate solution: a fixed-length gene vector and a
//! cached fitness value guarded by an explicit validity flag. The flag is the
//! whole caching mechanism: an individual whose flag is set is never handed to
//! the fitness function again until an operator changes its genes.
//!
//! ## Example
//!
//! ```rust
//! use genevo::gene::Gene;
//! use genevo::individual::Individual;
//!
//! let mut ind = Individual::new(vec![Gene::from(1), Gene::from(2)]);
//! assert!(!ind.is_valid());
//! assert!(ind.fitness().is_err());
//!
//! ind[0] = Gene::from(5);
//! assert_eq!(ind[0], Gene::Integer(5));
//! ```

use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::{GeneticError, Result};
use crate::gene::Gene;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<Gene>,
    fitness: f64,
    valid: bool,
}

impl Individual {
    /// Wraps a gene vector as an unevaluated individual.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
            valid: false,
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Returns the cached fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::UnevaluatedIndividual` if the individual has not
    /// been evaluated since its genes last changed.
    pub fn fitness(&self) -> Result<f64> {
        if self.valid {
            Ok(self.fitness)
        } else {
            Err(GeneticError::UnevaluatedIndividual)
        }
    }

    /// Returns `true` if the cached fitness belongs to the current genes.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the cached fitness as stale.
    ///
    /// Writing genes through `IndexMut` does not do this on its own; pair such
    /// writes with a call to `invalidate` so the next evaluation picks them up.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub(crate) fn assign_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
        self.valid = true;
    }
}

impl Index<usize> for Individual {
    type Output = Gene;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl IndexMut<usize> for Individual {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

impl<'a> IntoIterator for &'a Individual {
    type Item = &'a Gene;
    type IntoIter = slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl AsRef<[Gene]> for Individual {
    fn as_ref(&self) -> &[Gene] {
        &self.genes
    }
}

impl From<Vec<Gene>> for Individual {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}
