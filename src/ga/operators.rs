//! Genetic operators for bit-vector chromosomes.
//!
//! - [`one_point_crossover`]: prefix/suffix recombination of two parents
//! - [`bit_flip_mutation`]: independent per-gene flips
//!
//! Both operators are value-producing: parents are never mutated, and every
//! offspring is a fresh chromosome of the same length.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

use super::types::Chromosome;
use rand::Rng;

/// One-point crossover.
///
/// Draws u ~ U[0, 1); if u < `crossover_probability`, picks a crossover
/// point p uniformly from [1, L) and splices:
///
/// - offspring₁ = parent₁[0..p] + parent₂[p..L]
/// - offspring₂ = parent₂[0..p] + parent₁[p..L]
///
/// Otherwise the parents pass through content-unchanged. The point is drawn
/// fresh per invocation; chromosomes of fewer than two genes admit no
/// interior point and always pass through.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn one_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    crossover_probability: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let u = rng.random_range(0.0..1.0);
    if u >= crossover_probability || n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.random_range(1..n);
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1.bits()[..point]);
    child1.extend_from_slice(&parent2.bits()[point..]);
    child2.extend_from_slice(&parent2.bits()[..point]);
    child2.extend_from_slice(&parent1.bits()[point..]);

    (Chromosome::new(child1), Chromosome::new(child2))
}

/// Independent bit-flip mutation.
///
/// For each gene, draws u ~ U[0, 1) and flips the bit when u <
/// `mutation_rate`. Rate 0 is the identity and rate 1 flips every bit; the
/// per-gene draw happens at both extremes as well, so RNG consumption is
/// identical across configurations and seeded runs stay comparable when
/// only the rates differ.
pub fn bit_flip_mutation<R: Rng>(
    chromosome: &Chromosome,
    mutation_rate: f64,
    rng: &mut R,
) -> Chromosome {
    let bits = chromosome
        .bits()
        .iter()
        .map(|&b| {
            if rng.random_range(0.0..1.0) < mutation_rate {
                !b
            } else {
                b
            }
        })
        .collect();
    Chromosome::new(bits)
}
