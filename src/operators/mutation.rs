//! Mutation schedule.
//!
//! Carries the per-generation inputs of the mutation operators: the boolean
//! flip probability and the annealing factor `(1 - gen / ngen)^scoping` that
//! shrinks real-gene steps as evolution progresses.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationSchedule {
    flip_probability: f64,
    annealing: f64,
}

impl MutationSchedule {
    /// `num_generations` must be non-zero; options validation guarantees it
    /// for every schedule built by the evolution loop.
    pub fn new(
        generation: usize,
        num_generations: usize,
        flip_probability: f64,
        scoping: f64,
    ) -> Self {
        let progress = generation as f64 / num_generations.max(1) as f64;
        Self {
            flip_probability,
            annealing: (1.0 - progress).powf(scoping),
        }
    }

    pub fn flip_probability(&self) -> f64 {
        self.flip_probability
    }

    /// Multiplier applied to every real-gene step. Always `1` when scoping is `0`.
    pub fn annealing(&self) -> f64 {
        self.annealing
    }
}
