//! # Tour
//!
//! A closed tour over a fixed set of locations: the permutation individual the
//! engine is demonstrated on. The genome is the visiting order; the fitness is
//! the reciprocal of the closed-tour length (the sum of consecutive distances
//! plus the leg from the last stop back to the first).
//!
//! The distance metric belongs to the location type through the [`Waypoint`]
//! trait. [`Location`] is a named point in the plane with Euclidean distance.
//!
//! ## Example
//!
//! ```rust
//! use genroute::individual::Individual;
//! use genroute::tour::{Location, Tour};
//!
//! let square = Tour::new(vec![
//!     Location::new("a", 0.0, 0.0),
//!     Location::new("b", 1.0, 0.0),
//!     Location::new("c", 1.0, 1.0),
//!     Location::new("d", 0.0, 1.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(square.cost(), 4.0);
//! assert_eq!(square.fitness(), 0.25);
//! assert_eq!(square.to_string(), "a->b->c->d->a\nPath length: 4");
//! ```

use std::fmt::{self, Debug, Display};

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::operators::{adjacent_swap, cut_points, order_crossover, single_swap};
use crate::rng::RandomNumberGenerator;

/// A stop on a tour. Implementors supply the distance metric.
pub trait Waypoint: Clone + Debug + Display + PartialEq + Send + Sync {
    /// Distance to another stop. Must be non-negative and symmetric.
    fn distance(&self, other: &Self) -> f64;
}

/// A named point in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Waypoint for Location {
    fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Closed-tour length of a visiting order.
fn closed_length<L: Waypoint>(stops: &[L]) -> f64 {
    let legs: f64 = stops.windows(2).map(|w| w[0].distance(&w[1])).sum();
    match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => legs + last.distance(first),
        _ => legs,
    }
}

/// A visiting order over a set of stops together with its closed length.
///
/// Two tours are equal when both their visiting orders and their fitness
/// values are equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Tour<L: Waypoint> {
    stops: Vec<L>,
    length: f64,
}

impl<L: Waypoint> Tour<L> {
    /// Creates a tour visiting `stops` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::DegenerateFitness`] if there are fewer than two
    /// stops or the closed-tour length is zero or not finite: such a tour has
    /// no defined fitness.
    pub fn new(stops: Vec<L>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(GeneticError::DegenerateFitness(format!(
                "A closed tour needs at least two locations, got {}",
                stops.len()
            )));
        }

        let length = closed_length(&stops);
        if !length.is_finite() || length <= 0.0 {
            return Err(GeneticError::DegenerateFitness(format!(
                "Closed tour length must be strictly positive and finite, got {}",
                length
            )));
        }

        Ok(Self { stops, length })
    }

    /// Builds a tour from a rearrangement of an already validated tour's
    /// stops. Every rearrangement of a set with positive closed length also
    /// has positive closed length, so the check in [`Tour::new`] cannot fail.
    fn rearranged(stops: Vec<L>) -> Self {
        let length = closed_length(&stops);
        debug_assert!(length > 0.0, "rearranged tour lost its positive length");
        Self { stops, length }
    }

    /// The stops in visiting order.
    pub fn stops(&self) -> &[L] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The closed-tour length, i.e. the reciprocal of the fitness.
    pub fn cost(&self) -> f64 {
        self.length
    }

    pub fn into_stops(self) -> Vec<L> {
        self.stops
    }
}

impl<L: Waypoint> PartialEq for Tour<L> {
    fn eq(&self, other: &Self) -> bool {
        self.stops == other.stops && self.fitness() == other.fitness()
    }
}

impl<L: Waypoint> Individual for Tour<L> {
    fn fitness(&self) -> f64 {
        1.0 / self.length
    }

    fn randomize(&self, rng: &mut RandomNumberGenerator) -> Self {
        let mut stops = self.stops.clone();
        rng.shuffle(&mut stops);
        Self::rearranged(stops)
    }

    fn mutate_adjacent(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self {
        let mut stops = self.stops.clone();
        adjacent_swap(&mut stops, rng, probability);
        Self::rearranged(stops)
    }

    fn mutate_swap(&self, rng: &mut RandomNumberGenerator, probability: f64) -> Self {
        let mut stops = self.stops.clone();
        single_swap(&mut stops, rng, probability);
        Self::rearranged(stops)
    }

    fn crossover(
        &self,
        rng: &mut RandomNumberGenerator,
        probability: f64,
        other: &Self,
    ) -> (Self, Self) {
        debug_assert_eq!(self.len(), other.len(), "parents must visit the same stops");

        if !rng.coin(probability) {
            return (self.clone(), other.clone());
        }

        let (start, end) = cut_points(rng, self.len());
        let first = order_crossover(&other.stops, &self.stops, start, end);
        let second = order_crossover(&self.stops, &other.stops, start, end);
        (Self::rearranged(first), Self::rearranged(second))
    }
}

impl<L: Waypoint> Display for Tour<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            write!(f, "{}->", stop)?;
        }
        if let Some(first) = self.stops.first() {
            write!(f, "{}", first)?;
        }
        write!(f, "\nPath length: {}", self.cost())
    }
}
