//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! None of the operations perform I/O, so every variant describes a
//! configuration or programming defect detected at the point of violation.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genroute::error::{GeneticError, Result};
//!
//! fn check_probability(p: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(GeneticError::Configuration(format!(
//!             "Probability must lie in [0, 1], got {}",
//!             p
//!         )));
//!     }
//!     Ok(p)
//! }
//!
//! assert!(check_probability(0.5).is_ok());
//! assert!(check_probability(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genroute::error::{GeneticError, OptionExt};
//!
//! fn first_cost(costs: &[f64]) -> genroute::error::Result<f64> {
//!     costs.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_cost(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// An invalid run configuration was provided: a zero population size or
    /// generation count, a probability outside `[0, 1]`, or a tournament run
    /// requested without a tournament size.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A candidate's raw cost evaluated to zero (or to a non-finite value),
    /// which leaves its fitness undefined.
    #[error("Degenerate fitness: {0}")]
    DegenerateFitness(String),

    /// An operator that needs at least one individual received none.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
