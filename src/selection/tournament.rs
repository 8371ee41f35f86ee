use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// For each slot of the pool, `tournament_size` contestants are drawn
/// uniformly at random, with replacement, and the best of them wins. When
/// contestants tie, the one drawn first wins.
///
/// Tournament size controls the selection pressure:
/// - A size of 1 is uniform random selection
/// - Larger sizes focus the pool on the best individuals
///
/// # Examples
///
/// ```
/// use genroute::selection::TournamentSelection;
///
/// assert!(TournamentSelection::new(3).is_ok());
/// assert!(TournamentSelection::new(0).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament<I: Individual>(
        &self,
        population: &[I],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut best_idx = rng.index(population.len());

        for _ in 1..self.tournament_size {
            let idx = rng.index(population.len());
            if population[idx].compare(&population[best_idx]) == Ordering::Less {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl<I> SelectionStrategy<I> for TournamentSelection
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

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(population, rng)].clone())
            .collect())
    }

    fn name(&self) -> &'static str {
        "tournament"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::tests::Scored;

    fn population() -> Vec<Scored> {
        vec![
            Scored::new(0, 0.5),
            Scored::new(1, 0.8),
            Scored::new(2, 0.3),
            Scored::new(3, 0.9),
            Scored::new(4, 0.1),
        ]
    }

    #[test]
    fn test_tournament_selection() {
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population(), 5, &mut rng).unwrap();

        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_tournament_selection_with_different_sizes() {
        let mut rng = RandomNumberGenerator::from_seed(42);

        for size in [1, 5, 10] {
            let selection = TournamentSelection::new(size).unwrap();
            let selected = selection.select(&population(), 3, &mut rng).unwrap();
            assert_eq!(selected.len(), 3);
        }
    }

    #[test]
    fn test_large_tournament_favours_the_best() {
        let mut rng = RandomNumberGenerator::from_seed(17);

        // With 64 contestants out of 5 the best is missed with probability (4/5)^64
        let selection = TournamentSelection::new(64).unwrap();
        let selected = selection.select(&population(), 20, &mut rng).unwrap();

        assert!(selected.iter().all(|s| s.id == 3));
    }

    #[test]
    fn test_winner_never_worse_than_worst() {
        let mut rng = RandomNumberGenerator::from_seed(8);

        let selection = TournamentSelection::new(2).unwrap();
        let selected = selection.select(&population(), 100, &mut rng).unwrap();

        assert!(selected.iter().all(|s| population().iter().any(|p| p == s)));
    }

    #[test]
    fn test_ties_keep_first_drawn() {
        let tied = vec![Scored::new(0, 1.0), Scored::new(1, 1.0)];
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut replay = rng.clone();

        let selection = TournamentSelection::new(3).unwrap();
        let winner = selection.run_tournament(&tied, &mut rng);

        assert_eq!(winner, replay.index(2));
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let empty: Vec<Scored> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = TournamentSelection::default().select(&empty, 3, &mut rng);
        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(matches!(
            TournamentSelection::new(0),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_run_tournament_is_deterministic() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);
        let selection = TournamentSelection::new(3).unwrap();

        let winners1: Vec<usize> = (0..10)
            .map(|_| selection.run_tournament(&population(), &mut rng1))
            .collect();
        let winners2: Vec<usize> = (0..10)
            .map(|_| selection.run_tournament(&population(), &mut rng2))
            .collect();

        assert_eq!(winners1, winners2);
    }
}
