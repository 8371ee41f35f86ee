use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

use super::{GaOptions, GeneticAlgorithm};

/// Fluent construction of a [`GeneticAlgorithm`].
///
/// The seed individual and the options are required. Without an explicit
/// generator, one seeded from system entropy is used.
///
/// ```rust
/// use genroute::evolution::{GaOptions, GeneticAlgorithmBuilder};
/// use genroute::rng::RandomNumberGenerator;
/// use genroute::tour::{Location, Tour};
///
/// let seed = Tour::new(vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 2.0, 0.0),
///     Location::new("c", 1.0, 1.0),
/// ])
/// .unwrap();
///
/// let ga = GeneticAlgorithmBuilder::new()
///     .with_seed(seed)
///     .with_rng(RandomNumberGenerator::from_seed(4))
///     .with_options(GaOptions::new(8, 0.01, 0.7, 0.5, 5).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(ga.population().size(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithmBuilder<I: Individual> {
    seed: Option<I>,
    rng: Option<RandomNumberGenerator>,
    options: Option<GaOptions>,
}

impl<I: Individual> GeneticAlgorithmBuilder<I> {
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: None,
            options: None,
        }
    }

    pub fn with_seed(mut self, seed: I) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_options(mut self, options: GaOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<GeneticAlgorithm<I>> {
        let seed = self.seed.ok_or_else(|| {
            GeneticError::Configuration("Seed individual not specified".to_string())
        })?;

        let options = self
            .options
            .ok_or_else(|| GeneticError::Configuration("Options not specified".to_string()))?;

        GeneticAlgorithm::new(seed, self.rng.unwrap_or_default(), options)
    }
}

impl<I: Individual> Default for GeneticAlgorithmBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
