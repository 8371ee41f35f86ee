pub mod algorithm;
pub mod builder;
pub mod options;

pub use algorithm::GeneticAlgorithm;
pub use builder::GeneticAlgorithmBuilder;
pub use options::{GaOptions, GaOptionsBuilder};
