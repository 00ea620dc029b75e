//! Genome-wide crossover parameters.
//!
//! One `Blend` is drawn per mating and shared by every position: real genes
//! use its weights `a` and `b = 1 - a` for an arithmetic blend, discrete genes
//! use its `cutoff` for a single-point swap.

use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    a: f64,
    b: f64,
    pub cutoff: usize,
}

impl Blend {
    pub fn new(a: f64, cutoff: usize) -> Self {
        Self {
            a,
            b: 1.0 - a,
            cutoff,
        }
    }

    /// Draws the cutoff from `[1, genome_len - 1]`, then the weight `a` from
    /// `[0, 1)`.
    ///
    /// A one-gene genome has no interior cut point; its cutoff is `1`.
    pub fn draw(genome_len: usize, rng: &mut RandomNumberGenerator) -> Self {
        let upper = genome_len.saturating_sub(1).max(1);
        let cutoff = rng.index_inclusive(1, upper);
        let a = rng.uniform();
        Self::new(a, cutoff)
    }

    pub fn weights(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Blends two real genes. The sum of the pair is conserved.
    pub fn mix(&self, x1: f64, x2: f64) -> (f64, f64) {
        (self.a * x1 + self.b * x2, self.b * x1 + self.a * x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_conserves_sum() {
        let mut rng = RandomNumberGenerator::from_seed(13);
        for _ in 0..100 {
            let blend = Blend::draw(10, &mut rng);
            let (x1, x2) = (rng.uniform() * 50.0 - 25.0, rng.uniform() * 3.0);
            let (y1, y2) = blend.mix(x1, x2);

            assert!(((y1 + y2) - (x1 + x2)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let blend = Blend::new(0.2, 3);
        let (a, b) = blend.weights();
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cutoff_range() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        for _ in 0..200 {
            let blend = Blend::draw(5, &mut rng);
            assert!((1..=4).contains(&blend.cutoff));
        }
    }

    #[test]
    fn test_single_gene_genome_cutoff() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        assert_eq!(Blend::draw(1, &mut rng).cutoff, 1);
    }
}
