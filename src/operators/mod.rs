//! # Genome Operators
//!
//! Genome-level building blocks shared by every permutation individual. They
//! work on plain slices, so any ordered genome can reuse them without the
//! engine ever looking inside an individual.

pub mod crossover;
pub mod mutation;

pub use crossover::{cut_points, is_rearrangement_of, order_crossover};
pub use mutation::{adjacent_swap, single_swap, Mutation};
