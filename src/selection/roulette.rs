use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection)
/// picks each individual with probability equal to its share of the total
/// population fitness. Draws are independent and with replacement, so a
/// strong individual can fill several slots of the pool.
///
/// All fitness values must be finite and non-negative, and at least one must
/// be positive.
///
/// # Examples
///
/// ```
/// use genroute::rng::RandomNumberGenerator;
/// use genroute::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genroute::tour::{Location, Tour};
/// use genroute::error::Result;
///
/// fn main() -> Result<()> {
///     let tour = Tour::new(vec![
///         Location::new("a", 0.0, 0.0),
///         Location::new("b", 1.0, 0.0),
///         Location::new("c", 1.0, 1.0),
///     ])?;
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selected = RouletteWheelSelection::new().select(&[tour], 3, &mut rng)?;
///     assert_eq!(selected.len(), 3);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Builds the cumulative fitness table.
    ///
    /// # Errors
    ///
    /// Returns an error if any fitness is negative or not finite, or if the
    /// total is not strictly positive.
    fn cumulative_fitness<I: Individual>(population: &[I]) -> Result<Vec<f64>> {
        let mut running = 0.0;
        let mut cumulative = Vec::with_capacity(population.len());

        for individual in population {
            let fitness = individual.fitness();
            if !fitness.is_finite() || fitness < 0.0 {
                return Err(GeneticError::DegenerateFitness(format!(
                    "Roulette wheel selection requires finite, non-negative fitness values, got {}",
                    fitness
                )));
            }
            running += fitness;
            cumulative.push(running);
        }

        if running <= 0.0 {
            return Err(GeneticError::DegenerateFitness(
                "Roulette wheel selection requires a positive total fitness".to_string(),
            ));
        }

        Ok(cumulative)
    }

    /// Maps one uniform draw onto the wheel.
    fn spin(cumulative: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let total = cumulative[cumulative.len() - 1];
        let target = rng.unit() * total;
        // Rounding can push `target` onto the last edge; clamp to the final slot.
        cumulative
            .partition_point(|&edge| edge <= target)
            .min(cumulative.len() - 1)
    }
}

impl<I> SelectionStrategy<I> for RouletteWheelSelection
where
    I: Individual,
{
    fn select(
        &self,
        population: &[I],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let cumulative = Self::cumulative_fitness(population)?;

        Ok((0..num_to_select)
            .map(|_| population[Self::spin(&cumulative, rng)].clone())
            .collect())
    }

    fn name(&self) -> &'static str {
        "roulette"
    }
}
