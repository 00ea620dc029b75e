//! # Genes
//!
//! A genome is a fixed-length sequence of typed genes. The kind of every
//! position (`Boolean`, `Integer` or `Real`) is taken from a prototype genome
//! and never changes afterwards; numeric positions may carry `Bounds` that
//! guide generation and mutation.
//!
//! ## Example
//!
//! ```rust
//! use genevo::gene::{Bounds, Gene, GeneKind};
//!
//! let prototype = vec![Gene::from(true), Gene::from(3_i64), Gene::from(0.5)];
//! let kinds: Vec<GeneKind> = prototype.iter().map(Gene::kind).collect();
//!
//! assert_eq!(kinds, vec![GeneKind::Boolean, GeneKind::Integer, GeneKind::Real]);
//! assert_eq!(Bounds::default(), Bounds::new(-1.0, 1.0));
//! ```

use std::fmt;

/// The kind of a gene position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneKind {
    Boolean,
    Integer,
    Real,
}

impl fmt::Display for GeneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneKind::Boolean => write!(f, "boolean"),
            GeneKind::Integer => write!(f, "integer"),
            GeneKind::Real => write!(f, "real"),
        }
    }
}

/// A single gene value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gene {
    Boolean(bool),
    Integer(i64),
    Real(f64),
}

impl Gene {
    /// Returns the kind of this gene.
    pub fn kind(&self) -> GeneKind {
        match self {
            Gene::Boolean(_) => GeneKind::Boolean,
            Gene::Integer(_) => GeneKind::Integer,
            Gene::Real(_) => GeneKind::Real,
        }
    }

    /// Numeric view of the gene: `true` is `1.0`, `false` is `0.0`.
    ///
    /// Handy for fitness functions that sum or weigh mixed genomes.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Gene::Boolean(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            Gene::Integer(i) => i as f64,
            Gene::Real(x) => x,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Gene::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Gene::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Gene::Real(x) => Some(x),
            _ => None,
        }
    }
}

impl From<bool> for Gene {
    fn from(value: bool) -> Self {
        Gene::Boolean(value)
    }
}

impl From<i64> for Gene {
    fn from(value: i64) -> Self {
        Gene::Integer(value)
    }
}

impl From<i32> for Gene {
    fn from(value: i32) -> Self {
        Gene::Integer(i64::from(value))
    }
}

impl From<f64> for Gene {
    fn from(value: f64) -> Self {
        Gene::Real(value)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gene::Boolean(b) => write!(f, "{}", b),
            Gene::Integer(i) => write!(f, "{}", i),
            Gene::Real(x) => write!(f, "{}", x),
        }
    }
}

/// Closed interval `[lower, upper]` attached to a genome position.
///
/// Ignored for boolean positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl Default for Bounds {
    /// The range used for every position when no bounds are supplied.
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<(i64, i64)> for Bounds {
    fn from((lower, upper): (i64, i64)) -> Self {
        Self::new(lower as f64, upper as f64)
    }
}
