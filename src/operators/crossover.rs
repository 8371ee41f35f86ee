//! # Order-Preserving Crossover
//!
//! Recombines two permutation genomes into a child that is again a
//! permutation of the same genes. A contiguous window is copied verbatim from
//! a donor parent; every other position is filled, starting right after the
//! window and wrapping around, with the remaining genes in the order they
//! appear in the second parent (read from the same wrap offset).
//!
//! ## Example
//!
//! ```rust
//! use genroute::operators::order_crossover;
//!
//! let donor = ['a', 'b', 'c', 'd', 'e'];
//! let filler = ['e', 'd', 'c', 'b', 'a'];
//!
//! let child = order_crossover(&donor, &filler, 1, 2);
//! assert_eq!(child, vec!['d', 'b', 'c', 'a', 'e']);
//! ```

use crate::rng::RandomNumberGenerator;

/// Draws the inclusive crossover window `(start, end)` for a genome of `len`
/// genes.
///
/// Two indices are drawn independently and uniformly over `0..len`, then
/// ordered, so the window may collapse to a single position or cover the whole
/// genome.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn cut_points(rng: &mut RandomNumberGenerator, len: usize) -> (usize, usize) {
    let first = rng.index(len);
    let second = rng.index(len);
    (first.min(second), first.max(second))
}

/// Builds one child of an order-preserving crossover.
///
/// Positions `start..=end` come from `donor`. The rest are filled in the
/// order `end + 1, end + 2, ...` wrapping to `start - 1`, taking genes from
/// `filler` read left to right from offset `end + 1`, skipping genes already
/// present in the copied window. Duplicate genes are matched one for one, so
/// the child is a rearrangement of the parents' shared multiset.
///
/// Both parents must be rearrangements of the same genes and
/// `start <= end < donor.len()` must hold.
pub fn order_crossover<G>(donor: &[G], filler: &[G], start: usize, end: usize) -> Vec<G>
where
    G: Clone + PartialEq,
{
    let len = donor.len();
    debug_assert_eq!(len, filler.len(), "parents must have equal length");
    debug_assert!(start <= end && end < len, "invalid crossover window");

    let window = &donor[start..=end];
    let mut claimed = vec![false; window.len()];
    let mut child = donor.to_vec();
    let mut remaining = len - window.len();
    let mut write = (end + 1) % len;

    for offset in 0..len {
        if remaining == 0 {
            break;
        }

        let gene = &filler[(end + 1 + offset) % len];
        let in_window = window
            .iter()
            .zip(claimed.iter())
            .position(|(placed, &taken)| !taken && placed == gene);

        match in_window {
            Some(slot) => claimed[slot] = true,
            None => {
                child[write] = gene.clone();
                write = (write + 1) % len;
                remaining -= 1;
            }
        }
    }

    debug_assert!(
        is_rearrangement_of(&child, donor),
        "order crossover produced an invalid permutation"
    );
    child
}

/// Returns `true` if `candidate` holds exactly the genes of `reference`
/// (same multiset), in any order.
pub fn is_rearrangement_of<G: PartialEq>(candidate: &[G], reference: &[G]) -> bool {
    if candidate.len() != reference.len() {
        return false;
    }

    let mut claimed = vec![false; reference.len()];
    candidate.iter().all(|gene| {
        match reference
            .iter()
            .zip(claimed.iter())
            .position(|(other, &taken)| !taken && other == gene)
        {
            Some(slot) => {
                claimed[slot] = true;
                true
            }
            None => false,
        }
    })
}
