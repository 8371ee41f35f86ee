//! # genroute
//!
//! A generational genetic algorithm engine for permutation genomes,
//! demonstrated on closed-tour routing.
//!
//! - [`individual::Individual`] is the capability set a candidate solution provides.
//! - [`tour::Tour`] is a closed tour over [`tour::Location`]s, scored by the
//!   reciprocal of its length.
//! - [`population::Population`] holds the selection, breeding, mutation and
//!   elitist replacement operators.
//! - [`evolution::GeneticAlgorithm`] drives the generational loop with roulette
//!   or tournament selection.
//!
//! Runs are single-threaded and deterministic for a seeded
//! [`rng::RandomNumberGenerator`].

pub mod error;
pub mod evolution;
pub mod individual;
pub mod operators;
pub mod population;
pub mod rng;
pub mod selection;
pub mod tour;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{GaOptions, GeneticAlgorithm};
pub use individual::Individual;
pub use population::Population;
pub use tour::{Location, Tour, Waypoint};
