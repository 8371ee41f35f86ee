//! # Swap Mutations
//!
//! Two interchangeable mutation strategies for ordered genomes. Both only
//! exchange genes, so a permutation stays a permutation.

use crate::rng::RandomNumberGenerator;

/// Selects which mutation an individual applies during a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutation {
    /// Every adjacent pair `(i, i + 1)` is swapped with the given probability,
    /// left to right, in place.
    #[default]
    AdjacentSwap,
    /// A single Bernoulli trial; on success two uniformly drawn positions are
    /// swapped.
    SingleSwap,
}

/// Walks the adjacent pairs left to right and swaps each one with the given
/// probability.
///
/// The pass is sequential, so a gene moved forward at `i` can be moved again
/// by the trial at `i + 1`. One coin is drawn per pair.
pub fn adjacent_swap<G>(genes: &mut [G], rng: &mut RandomNumberGenerator, probability: f64) {
    for i in 0..genes.len().saturating_sub(1) {
        if rng.coin(probability) {
            genes.swap(i, i + 1);
        }
    }
}

/// With the given probability, swaps the genes at two independently drawn
/// positions. Drawing the same position twice leaves the genome untouched.
pub fn single_swap<G>(genes: &mut [G], rng: &mut RandomNumberGenerator, probability: f64) {
    if genes.is_empty() {
        return;
    }

    if rng.coin(probability) {
        let i = rng.index(genes.len());
        let j = rng.index(genes.len());
        genes.swap(i, j);
    }
}
