use tracing::{debug, info};

use super::options::GaOptions;
use crate::{
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy, TournamentSelection},
};

/// Drives the generational loop of a genetic algorithm.
///
/// The algorithm owns its population, its random number generator and an
/// immutable [`GaOptions`]. Each generation it
///
/// 1. selects a parent pool as large as the population,
/// 2. breeds the pool into offspring by pairwise crossover,
/// 3. mutates the offspring in place,
/// 4. replaces the worst fraction of the population with the best offspring,
/// 5. sorts the population best first.
///
/// Every stochastic decision draws from the one owned generator in a fixed
/// order, so the same seed and options reproduce the same result.
///
/// # Example
///
/// ```rust
/// use genroute::evolution::{GaOptions, GeneticAlgorithm};
/// use genroute::rng::RandomNumberGenerator;
/// use genroute::tour::{Location, Tour};
///
/// let seed = Tour::new(vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("c", 1.0, 1.0),
///     Location::new("b", 1.0, 0.0),
///     Location::new("d", 0.0, 1.0),
/// ])
/// .unwrap();
///
/// let options = GaOptions::with_tournament(16, 0.05, 0.7, 0.5, 20, 2).unwrap();
/// let mut ga = GeneticAlgorithm::new(seed, RandomNumberGenerator::from_seed(0), options).unwrap();
///
/// let best = ga.run_with_tournament().unwrap();
/// assert_eq!(best.cost(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<I: Individual> {
    population: Population<I>,
    rng: RandomNumberGenerator,
    options: GaOptions,
    generation: usize,
}

impl<I: Individual> GeneticAlgorithm<I> {
    /// Creates a genetic algorithm whose initial population is grown from
    /// `seed` (see [`Population::seeded`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, or if the seed's fitness
    /// is not strictly positive and finite.
    pub fn new(seed: I, mut rng: RandomNumberGenerator, options: GaOptions) -> Result<Self> {
        options.validate()?;

        let fitness = seed.fitness();
        if !fitness.is_finite() || fitness <= 0.0 {
            return Err(GeneticError::DegenerateFitness(format!(
                "Seed individual must have a positive, finite fitness, got {}",
                fitness
            )));
        }

        let population = Population::seeded(&seed, &mut rng, options.population_size())?;

        Ok(Self {
            population,
            rng,
            options,
            generation: 0,
        })
    }

    pub fn population(&self) -> &Population<I> {
        &self.population
    }

    /// Swaps in a different population.
    ///
    /// # Errors
    ///
    /// Returns an error if its size differs from the configured population size.
    pub fn set_population(&mut self, population: Population<I>) -> Result<()> {
        if population.size() != self.options.population_size() {
            return Err(GeneticError::Configuration(format!(
                "Population must hold {} individuals, got {}",
                self.options.population_size(),
                population.size()
            )));
        }
        self.population = population;
        Ok(())
    }

    pub fn rng_mut(&mut self) -> &mut RandomNumberGenerator {
        &mut self.rng
    }

    pub fn options(&self) -> &GaOptions {
        &self.options
    }

    pub fn mutation_probability(&self) -> f64 {
        self.options.mutation_probability()
    }

    pub fn crossover_probability(&self) -> f64 {
        self.options.crossover_probability()
    }

    pub fn replacement_fraction(&self) -> f64 {
        self.options.replacement_fraction()
    }

    pub fn generations(&self) -> usize {
        self.options.num_generations()
    }

    pub fn tournament_size(&self) -> usize {
        self.options.tournament_size()
    }

    /// Number of generations completed so far, across all runs.
    pub fn completed_generations(&self) -> usize {
        self.generation
    }

    /// Runs the configured number of generations with fitness-proportionate
    /// selection and returns the best individual.
    pub fn run_with_roulette(&mut self) -> Result<I> {
        self.run(&RouletteWheelSelection::new())
    }

    /// Runs the configured number of generations with tournament selection
    /// and returns the best individual.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the tournament size is 0.
    pub fn run_with_tournament(&mut self) -> Result<I> {
        let strategy = TournamentSelection::new(self.options.tournament_size()).map_err(|_| {
            GeneticError::Configuration(
                "Tournament runs require a tournament size of at least 1".to_string(),
            )
        })?;
        self.run(&strategy)
    }

    /// Runs the configured number of generations with any selection strategy
    /// and returns the best individual.
    pub fn run<S>(&mut self, strategy: &S) -> Result<I>
    where
        S: SelectionStrategy<I>,
    {
        info!(
            strategy = strategy.name(),
            population_size = self.population.size(),
            generations = self.options.num_generations(),
            "starting evolution"
        );

        self.population.sort_best_first();

        for _ in 0..self.options.num_generations() {
            let pool_size = self.population.size();
            let parents = self
                .population
                .select_with(strategy, &mut self.rng, pool_size)?;

            let mut offspring = parents.breed(&mut self.rng, self.options.crossover_probability());
            offspring.mutate_all(
                &mut self.rng,
                self.options.mutation_probability(),
                self.options.mutation(),
            );

            self.population
                .replace_with(offspring, self.options.replacement_fraction());
            self.population.sort_best_first();

            debug!(
                generation = self.generation,
                best_fitness = self.population.members()[0].fitness(),
                "generation complete"
            );
            self.generation += 1;
        }

        let best = self
            .population
            .members()
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        info!(best_fitness = best.fitness(), "evolution finished");
        Ok(best)
    }
}
