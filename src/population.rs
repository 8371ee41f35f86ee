//! # Population
//!
//! An ordered collection of individuals together with the generational
//! operators applied to it: parent selection, breeding, mutation and elitist
//! replacement. A population keeps its size for the whole run; only mating
//! pools drawn from it may differ in size.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::operators::Mutation;
use crate::rng::RandomNumberGenerator;
use crate::selection::{RouletteWheelSelection, SelectionStrategy, TournamentSelection};

/// A fixed-size generation of individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<I: Individual> {
    members: Vec<I>,
}

impl<I: Individual> Population<I> {
    /// Wraps an existing list of individuals.
    pub fn from_members(members: Vec<I>) -> Self {
        Self { members }
    }

    /// Grows an initial population of `size` individuals from one seed.
    ///
    /// The seed itself is the first member; every other member is an
    /// independent [`Individual::randomize`] of it.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn seeded(seed: &I, rng: &mut RandomNumberGenerator, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let mut members = Vec::with_capacity(size);
        members.push(seed.clone());
        members.extend((1..size).map(|_| seed.randomize(rng)));
        Ok(Self { members })
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[I] {
        &self.members
    }

    pub fn into_members(self) -> Vec<I> {
        self.members
    }

    /// The best member by fitness, or `None` for an empty population.
    ///
    /// Does not require the population to be sorted; among equally fit
    /// members the earliest wins.
    pub fn best(&self) -> Option<&I> {
        self.members.iter().reduce(|best, candidate| {
            if candidate.compare(best) == Ordering::Less {
                candidate
            } else {
                best
            }
        })
    }

    /// Stable sort, best first. Equally fit members keep their relative order.
    pub fn sort_best_first(&mut self) {
        self.members.sort_by(|a, b| a.compare(b));
    }

    /// Draws a mating pool with the given strategy.
    pub fn select_with<S>(
        &self,
        strategy: &S,
        rng: &mut RandomNumberGenerator,
        count: usize,
    ) -> Result<Population<I>>
    where
        S: SelectionStrategy<I>,
    {
        strategy
            .select(&self.members, count, rng)
            .map(Population::from_members)
    }

    /// Draws `count` members with fitness-proportionate probability, with
    /// replacement.
    pub fn select_roulette(
        &self,
        rng: &mut RandomNumberGenerator,
        count: usize,
    ) -> Result<Population<I>> {
        self.select_with(&RouletteWheelSelection::new(), rng, count)
    }

    /// Fills a pool as large as the population, each slot won by the best of
    /// `tournament_size` uniformly drawn contestants.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is zero or the population is
    /// empty.
    pub fn select_tournament(
        &self,
        rng: &mut RandomNumberGenerator,
        tournament_size: usize,
    ) -> Result<Population<I>> {
        let strategy = TournamentSelection::new(tournament_size)?;
        self.select_with(&strategy, rng, self.size())
    }

    /// Breeds an offspring pool of the same size by crossing consecutive
    /// pairs `(0, 1), (2, 3), ...`.
    ///
    /// When the pool has an odd size, the unpaired last member is carried
    /// into the offspring unchanged.
    pub fn breed(&self, rng: &mut RandomNumberGenerator, crossover_probability: f64) -> Self {
        let mut offspring = Vec::with_capacity(self.size());

        let mut pairs = self.members.chunks_exact(2);
        for pair in &mut pairs {
            let (first, second) = pair[0].crossover(rng, crossover_probability, &pair[1]);
            offspring.push(first);
            offspring.push(second);
        }
        offspring.extend(pairs.remainder().iter().cloned());

        Self { members: offspring }
    }

    /// Replaces every member with its mutation, in order.
    pub fn mutate_all(
        &mut self,
        rng: &mut RandomNumberGenerator,
        mutation_probability: f64,
        mutation: Mutation,
    ) {
        for member in self.members.iter_mut() {
            *member = member.mutate(rng, mutation_probability, mutation);
        }
    }

    /// Elitist replacement: the worst `round(fraction * size)` members are
    /// replaced by the best members of `offspring`.
    ///
    /// The count rounds half away from zero and never exceeds the offspring
    /// pool. Size never changes, and the best fitness never drops: if every
    /// slot would be replaced while the best offspring is worse than the
    /// current best member, that member is kept. Leaves the population sorted
    /// best first.
    pub fn replace_with(&mut self, mut offspring: Population<I>, fraction: f64) {
        self.sort_best_first();
        offspring.sort_best_first();

        let size = self.size();
        let mut count = ((fraction * size as f64).round() as usize)
            .min(size)
            .min(offspring.size());

        if count == size && count > 0 {
            let incumbent_is_better =
                self.members[0].compare(&offspring.members[0]) == Ordering::Less;
            if incumbent_is_better {
                count -= 1;
            }
        }

        trace!(replaced = count, size, "replacing worst members with best offspring");

        self.members.truncate(size - count);
        self.members.extend(offspring.members.into_iter().take(count));
        self.sort_best_first();
    }
}
