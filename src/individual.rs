//! # Individual Trait
//!
//! The `Individual` trait is the capability set the engine needs from a
//! candidate solution. The engine never inspects a genome directly: it only
//! ranks individuals by fitness, clones them, and asks them to randomize,
//! mutate, and recombine themselves.
//!
//! Every operator is pure. It takes `&self` and returns a new individual whose
//! genome shares no mutable state with its parent, so a parent and its child
//! can never alias the same underlying sequence.
//!
//! ## Example
//!
//! ```rust
//! use genroute::individual::Individual;
//! use genroute::operators::{adjacent_swap, cut_points, order_crossover, single_swap};
//! use genroute::rng::RandomNumberGenerator;
//!
//! /// Fitness rewards orderings close to ascending.
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ranking {
//!     order: Vec<u32>,
//! }
//!
//! impl Ranking {
//!     fn new(order: Vec<u32>) -> Self {
//!         Self { order }
//!     }
//! }
//!
//! impl Individual for Ranking {
//!     fn fitness(&self) -> f64 {
//!         let displaced = self
//!             .order
//!             .iter()
//!             .enumerate()
//!             .filter(|&(i, &v)| i as u32 != v)
//!             .count();
//!         1.0 / (1.0 + displaced as f64)
//!     }
//!
//!     fn randomize(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         let mut order = self.order.clone();
//!         rng.shuffle(&mut order);
//!         Self::new(order)
//!     }
//!
//!     fn mutate_adjacent(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self {
//!         let mut order = self.order.clone();
//!         adjacent_swap(&mut order, rng, probability);
//!         Self::new(order)
//!     }
//!
//!     fn mutate_swap(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self {
//!         let mut order = self.order.clone();
//!         single_swap(&mut order, rng, probability);
//!         Self::new(order)
//!     }
//!
//!     fn crossover(
//!         &self,
//!         rng: &mut RandomNumberGenerator,
//!         probability: f64,
//!         other: &Self,
//!     ) -> (Self, Self) {
//!         if !rng.coin(probability) {
//!             return (self.clone(), other.clone());
//!         }
//!         let (start, end) = cut_points(rng, self.order.len());
//!         (
//!             Self::new(order_crossover(&other.order, &self.order, start, end)),
//!             Self::new(order_crossover(&self.order, &other.order, start, end)),
//!         )
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let sorted = Ranking::new(vec![0, 1, 2, 3]);
//! let shuffled = sorted.randomize(&mut rng);
//! assert!(sorted.fitness() >= shuffled.fitness());
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::operators::Mutation;
use crate::rng::RandomNumberGenerator;

/// Trait for types that represent candidate solutions in the genetic algorithm.
///
/// Fitness must be derived deterministically from the genome: evaluating it
/// twice on an unchanged genome yields the same value. A larger fitness is
/// better.
pub trait Individual: Clone + Debug + Send + Sync {
    /// The fitness of this individual. Larger is better.
    fn fitness(&self) -> f64;

    /// Ranks two individuals best first: `Ordering::Less` means `self` is the
    /// better one.
    ///
    /// The order is total (`f64::total_cmp`), and individuals with equal
    /// fitness compare `Equal`, so a stable sort keeps their relative order.
    fn compare(&self, other: &Self) -> Ordering {
        other.fitness().total_cmp(&self.fitness())
    }

    /// Returns a new individual whose genome is a uniformly random
    /// rearrangement of this one's genes, with fitness recomputed.
    fn randomize(&self, rng: &mut RandomNumberGenerator) -> Self;

    /// Returns a copy where every adjacent gene pair was swapped with the
    /// given probability, left to right.
    fn mutate_adjacent(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self;

    /// Returns a copy where, with the given probability, two uniformly drawn
    /// genes were swapped.
    fn mutate_swap(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self;

    /// Applies the selected mutation strategy.
    fn mutate(
        &self,
        rng: &mut RandomNumberGenerator,
        probability: f64,
        mutation: Mutation,
    ) -> Self {
        match mutation {
            Mutation::AdjacentSwap => self.mutate_adjacent(rng, probability),
            Mutation::SingleSwap => self.mutate_swap(rng, probability),
        }
    }

    /// With the given probability, recombines `self` and `other` into two
    /// children; otherwise returns copies of both parents.
    fn crossover(
        &self,
        rng: &mut RandomNumberGenerator,
        probability: f64,
        other: &Self,
    ) -> (Self, Self);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal individual with a fixed fitness, used to exercise the ranking
    /// and population plumbing without a real genome.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Scored {
        pub(crate) id: usize,
        pub(crate) score: f64,
    }

    impl Scored {
        pub(crate) fn new(id: usize, score: f64) -> Self {
            Self { id, score }
        }
    }

    impl Individual for Scored {
        fn fitness(&self) -> f64 {
            self.score
        }

        fn randomize(&self, _rng: &mut RandomNumberGenerator) -> Self {
            self.clone()
        }

        fn mutate_adjacent(&self, _rng: &mut RandomNumberGenerator, _probability: f64) -> Self {
            self.clone()
        }

        fn mutate_swap(&self, _rng: &mut RandomNumberGenerator, _probability: f64) -> Self {
            Self::new(self.id, self.score + 1.0)
        }

        fn crossover(
            &self,
            rng: &mut RandomNumberGenerator,
            probability: f64,
            other: &Self,
        ) -> (Self, Self) {
            if rng.coin(probability) {
                (
                    Self::new(other.id, self.score),
                    Self::new(self.id, other.score),
                )
            } else {
                (self.clone(), other.clone())
            }
        }
    }

    #[test]
    fn test_compare_ranks_higher_fitness_first() {
        let weak = Scored::new(0, 0.1);
        let strong = Scored::new(1, 0.9);

        assert_eq!(strong.compare(&weak), Ordering::Less);
        assert_eq!(weak.compare(&strong), Ordering::Greater);
        assert_eq!(weak.compare(&weak.clone()), Ordering::Equal);
    }

    #[test]
    fn test_stable_sort_keeps_ties_in_order() {
        let mut members = vec![
            Scored::new(0, 0.5),
            Scored::new(1, 0.9),
            Scored::new(2, 0.5),
            Scored::new(3, 0.9),
        ];
        members.sort_by(|a, b| a.compare(b));

        let ids: Vec<usize> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_mutate_dispatches_on_strategy() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let base = Scored::new(0, 1.0);

        assert_eq!(base.mutate(&mut rng, 1.0, Mutation::AdjacentSwap).score, 1.0);
        assert_eq!(base.mutate(&mut rng, 1.0, Mutation::SingleSwap).score, 2.0);
    }
}
