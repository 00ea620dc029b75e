use crate::individual::Individual;

/// The fitness function: higher scores are fitter.
///
/// Scores must be finite or `+inf`; a NaN score aborts the evaluation with
/// `GeneticError::InvalidNumericValue`. The engine may call `score` in any
/// order and, for large populations or island models, from several threads
/// at once.
///
/// Any `Fn(&Individual) -> f64` closure is a challenge:
///
/// ```
/// use genevo::evolution::Challenge;
/// use genevo::gene::Gene;
/// use genevo::individual::Individual;
///
/// let count_true = |ind: &Individual| ind.iter().map(Gene::as_f64).sum::<f64>();
/// let ind = Individual::new(vec![Gene::from(true), Gene::from(false), Gene::from(true)]);
///
/// assert_eq!(count_true.score(&ind), 2.0);
/// ```
pub trait Challenge: Send + Sync {
    fn score(&self, individual: &Individual) -> f64;
}

impl<F> Challenge for F
where
    F: Fn(&Individual) -> f64 + Send + Sync,
{
    fn score(&self, individual: &Individual) -> f64 {
        self(individual)
    }
}
