//! # GaOptions
//!
//! The `GaOptions` struct is the immutable run configuration of a genetic
//! algorithm: population size, mutation and crossover probabilities, the
//! replacement fraction, the number of generations, the tournament size and
//! the mutation strategy.
//!
//! ## Example
//!
//! ```rust
//! use genroute::evolution::options::GaOptions;
//! use genroute::operators::Mutation;
//!
//! // Positional constructor, validated on creation
//! let options = GaOptions::new(64, 0.01, 0.7, 0.5, 30).unwrap();
//! assert_eq!(options.tournament_size(), 0);
//!
//! // Fluent builder
//! let options = GaOptions::builder()
//!     .population_size(128)
//!     .num_generations(200)
//!     .tournament_size(4)
//!     .mutation(Mutation::SingleSwap)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.population_size(), 128);
//!
//! // Invalid values are rejected
//! assert!(GaOptions::new(64, 1.5, 0.7, 0.5, 30).is_err());
//! ```
//!
//! ## Validation
//!
//! - `population_size` and `num_generations` must be at least 1.
//! - `mutation_probability`, `crossover_probability` and `replacement_fraction`
//!   must lie in `[0, 1]`.
//! - `tournament_size` may be 0 here (unset); a tournament run rejects it.

use crate::error::{GeneticError, Result};
use crate::operators::Mutation;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaOptions {
    population_size: usize,
    mutation_probability: f64,
    crossover_probability: f64,
    replacement_fraction: f64,
    num_generations: usize,
    /// Contestants per tournament; 0 when no tournament run is planned.
    tournament_size: usize,
    mutation: Mutation,
}

impl GaOptions {
    /// Creates a validated configuration with no tournament size and the
    /// default mutation strategy.
    pub fn new(
        population_size: usize,
        mutation_probability: f64,
        crossover_probability: f64,
        replacement_fraction: f64,
        num_generations: usize,
    ) -> Result<Self> {
        Self::builder()
            .population_size(population_size)
            .mutation_probability(mutation_probability)
            .crossover_probability(crossover_probability)
            .replacement_fraction(replacement_fraction)
            .num_generations(num_generations)
            .build()
    }

    /// Creates a validated configuration that also carries a tournament size.
    pub fn with_tournament(
        population_size: usize,
        mutation_probability: f64,
        crossover_probability: f64,
        replacement_fraction: f64,
        num_generations: usize,
        tournament_size: usize,
    ) -> Result<Self> {
        Self::builder()
            .population_size(population_size)
            .mutation_probability(mutation_probability)
            .crossover_probability(crossover_probability)
            .replacement_fraction(replacement_fraction)
            .num_generations(num_generations)
            .tournament_size(tournament_size)
            .build()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn replacement_fraction(&self) -> f64 {
        self.replacement_fraction
    }

    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn mutation(&self) -> Mutation {
        self.mutation
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        check_unit_interval("Mutation probability", self.mutation_probability)?;
        check_unit_interval("Crossover probability", self.crossover_probability)?;
        check_unit_interval("Replacement fraction", self.replacement_fraction)?;

        Ok(())
    }

    /// Returns a builder for creating a `GaOptions` instance.
    pub fn builder() -> GaOptionsBuilder {
        GaOptionsBuilder::default()
    }
}

fn check_unit_interval(what: &str, value: f64) -> Result<()> {
    // NaN fails `contains`
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must lie in [0, 1], got {}",
            what, value
        )))
    }
}

/// Builder for `GaOptions`.
///
/// Unset fields fall back to: population 64, mutation probability 0.01,
/// crossover probability 0.7, replacement fraction 0.5, 100 generations,
/// no tournament size, adjacent-swap mutation.
#[derive(Debug, Clone, Default)]
pub struct GaOptionsBuilder {
    population_size: Option<usize>,
    mutation_probability: Option<f64>,
    crossover_probability: Option<f64>,
    replacement_fraction: Option<f64>,
    num_generations: Option<usize>,
    tournament_size: Option<usize>,
    mutation: Option<Mutation>,
}

impl GaOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn replacement_fraction(mut self, value: f64) -> Self {
        self.replacement_fraction = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn mutation(mut self, value: Mutation) -> Self {
        self.mutation = Some(value);
        self
    }

    /// Builds and validates the `GaOptions` instance.
    pub fn build(self) -> Result<GaOptions> {
        let options = GaOptions {
            population_size: self.population_size.unwrap_or(64),
            mutation_probability: self.mutation_probability.unwrap_or(0.01),
            crossover_probability: self.crossover_probability.unwrap_or(0.7),
            replacement_fraction: self.replacement_fraction.unwrap_or(0.5),
            num_generations: self.num_generations.unwrap_or(100),
            tournament_size: self.tournament_size.unwrap_or(0),
            mutation: self.mutation.unwrap_or_default(),
        };
        options.validate()?;
        Ok(options)
    }
}
