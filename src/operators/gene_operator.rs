//! Per-position operators.
//!
//! A `GeneOperator` is resolved once per genome position from the prototype
//! gene and its bounds. It carries everything needed to generate, mate and
//! mutate genes of that position, so the hot loops only dispatch on a single
//! enum tag.

use crate::error::{GeneticError, Result};
use crate::gene::{Bounds, Gene, GeneKind};
use crate::rng::RandomNumberGenerator;

use super::crossover::Blend;
use super::mutation::MutationSchedule;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneOperator {
    Boolean,
    Integer { lower: i64, upper: i64 },
    Real { lower: f64, upper: f64 },
}

impl GeneOperator {
    /// Binds the operator for a prototype gene at `position`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bounds are not finite, are
    /// inverted, or (for an integer gene) contain no integer.
    pub fn bind(position: usize, prototype: &Gene, bounds: Bounds) -> Result<Self> {
        if let Gene::Boolean(_) = prototype {
            return Ok(GeneOperator::Boolean);
        }

        if !bounds.lower.is_finite() || !bounds.upper.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Bounds of position {} must be finite, got ({}, {})",
                position, bounds.lower, bounds.upper
            )));
        }
        if bounds.lower > bounds.upper {
            return Err(GeneticError::Configuration(format!(
                "Lower bound of position {} exceeds its upper bound ({} > {})",
                position, bounds.lower, bounds.upper
            )));
        }

        match prototype {
            Gene::Integer(_) => {
                let lower = bounds.lower.ceil() as i64;
                let upper = bounds.upper.floor() as i64;
                if lower > upper {
                    return Err(GeneticError::Configuration(format!(
                        "Bounds ({}, {}) of integer position {} contain no integer",
                        bounds.lower, bounds.upper, position
                    )));
                }
                Ok(GeneOperator::Integer { lower, upper })
            }
            _ => Ok(GeneOperator::Real {
                lower: bounds.lower,
                upper: bounds.upper,
            }),
        }
    }

    pub fn kind(&self) -> GeneKind {
        match self {
            GeneOperator::Boolean => GeneKind::Boolean,
            GeneOperator::Integer { .. } => GeneKind::Integer,
            GeneOperator::Real { .. } => GeneKind::Real,
        }
    }

    /// The bounds this operator enforces, `None` for boolean positions.
    pub fn bounds(&self) -> Option<Bounds> {
        match *self {
            GeneOperator::Boolean => None,
            GeneOperator::Integer { lower, upper } => {
                Some(Bounds::new(lower as f64, upper as f64))
            }
            GeneOperator::Real { lower, upper } => Some(Bounds::new(lower, upper)),
        }
    }

    /// Produces a fresh random gene within the bounds.
    pub fn generate(&self, rng: &mut RandomNumberGenerator) -> Gene {
        match *self {
            GeneOperator::Boolean => Gene::Boolean(rng.coin()),
            GeneOperator::Integer { lower, upper } => Gene::Integer(rng.int_inclusive(lower, upper)),
            GeneOperator::Real { lower, upper } => {
                Gene::Real(lower + (upper - lower) * rng.uniform())
            }
        }
    }

    /// Crosses the genes of two mates at `position`.
    ///
    /// Real genes blend regardless of the cutoff; discrete genes swap when
    /// `position <= blend.cutoff`.
    ///
    /// # Panics
    ///
    /// Panics if either gene is not of this operator's kind.
    pub fn mate(&self, position: usize, gene1: &mut Gene, gene2: &mut Gene, blend: &Blend) {
        match (self, gene1, gene2) {
            (GeneOperator::Real { .. }, Gene::Real(x1), Gene::Real(x2)) => {
                let (new1, new2) = blend.mix(*x1, *x2);
                // A blend lies between its parents; the clamp only absorbs rounding
                let (low, high) = (x1.min(*x2), x1.max(*x2));
                *x1 = new1.clamp(low, high);
                *x2 = new2.clamp(low, high);
            }
            (GeneOperator::Boolean | GeneOperator::Integer { .. }, gene1, gene2) => {
                if position <= blend.cutoff {
                    std::mem::swap(gene1, gene2);
                }
            }
            // Genes only enter a population through `OperatorTable::generate`
            // or the kind check in `OperatorTable::adopt`
            (op, gene1, gene2) => unreachable!(
                "{} operator applied to {:?} and {:?}",
                op.kind(),
                gene1,
                gene2
            ),
        }
    }

    /// Mutates a single gene in place.
    ///
    /// # Panics
    ///
    /// Panics if the gene is not of this operator's kind.
    pub fn mutate(
        &self,
        gene: &mut Gene,
        rng: &mut RandomNumberGenerator,
        schedule: &MutationSchedule,
    ) {
        match (*self, gene) {
            (GeneOperator::Boolean, Gene::Boolean(b)) => {
                if rng.uniform() < schedule.flip_probability() {
                    *b = !*b;
                }
            }
            (GeneOperator::Integer { lower, upper }, Gene::Integer(i)) => {
                let naive = (*i as f64 + rng.standard_normal()).round() as i64;
                *i = naive.clamp(lower, upper);
            }
            (GeneOperator::Real { lower, upper }, Gene::Real(x)) => {
                let toward_upper = rng.uniform() < 0.5;
                let step = rng.uniform() * schedule.annealing();
                let moved = if toward_upper {
                    *x + (upper - *x) * step
                } else {
                    *x - (*x - lower) * step
                };
                *x = moved.clamp(lower, upper);
            }
            (op, gene) => unreachable!("{} operator applied to {:?}", op.kind(), gene),
        }
    }
}
