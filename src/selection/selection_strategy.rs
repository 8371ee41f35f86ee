use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A strategy draws a mating pool from the current population. Every draw is
/// taken from the supplied generator, so a seeded generator reproduces the
/// same pool.
///
/// # Examples
///
/// ```
/// use genroute::rng::RandomNumberGenerator;
/// use genroute::selection::{SelectionStrategy, TournamentSelection};
/// use genroute::tour::{Location, Tour};
/// use genroute::error::Result;
///
/// fn main() -> Result<()> {
///     let seed = Tour::new(vec![
///         Location::new("a", 0.0, 0.0),
///         Location::new("b", 4.0, 0.0),
///         Location::new("c", 4.0, 3.0),
///     ])?;
///     let population = vec![seed.clone(), seed.clone(), seed];
///     let mut rng = RandomNumberGenerator::from_seed(3);
///
///     let selection = TournamentSelection::new(2)?;
///     let pool = selection.select(&population, 5, &mut rng)?;
///
///     assert_eq!(pool.len(), 5);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<I>: Debug + Send + Sync
where
    I: Individual,
{
    /// Draws `num_to_select` individuals from `population`, with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or its fitness values do
    /// not satisfy the strategy's requirements.
    fn select(
        &self,
        population: &[I],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}
