use genroute::{
    error::GeneticError,
    evolution::{GaOptions, GeneticAlgorithm},
    individual::Individual,
    operators::{is_rearrangement_of, Mutation},
    rng::RandomNumberGenerator,
    tour::{Location, Tour, Waypoint},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn cities() -> Vec<Location> {
    vec![
        Location::new("London", 0.0, 1.0),
        Location::new("Tokyo", -88.0, -44.0),
        Location::new("Moscow", 6878.0, 9999.0),
        Location::new("Chaves", 6.0, 9.0),
        Location::new("Loule", 1337.0, 1337.0),
        Location::new("Quarteira", -1.0, -2.0),
        Location::new("Berlin", 49.0, -12312321.0),
        Location::new("Amsterdam", 9898.0, 123.0),
    ]
}

/// Twenty collinear stops spaced 10 apart, listed in scrambled blocks.
/// Any optimal closed tour walks out and back: 2 * 190 = 380.
fn scrambled_line() -> Vec<Location> {
    [15..20, 0..5, 10..15, 5..10]
        .into_iter()
        .flatten()
        .map(|i| Location::new(format!("stop{}", i), 0.0, i as f64 * 10.0))
        .collect()
}

const LINE_OPTIMUM: f64 = 1.0 / 380.0;

fn closed_length(stops: &[Location], order: &[usize]) -> f64 {
    order
        .iter()
        .zip(order.iter().cycle().skip(1))
        .map(|(&a, &b)| stops[a].distance(&stops[b]))
        .sum()
}

/// Exhaustive shortest closed tour with the first stop fixed.
fn brute_force_optimum(stops: &[Location]) -> f64 {
    fn search(stops: &[Location], order: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
        if order.len() == stops.len() {
            *best = best.min(closed_length(stops, order));
            return;
        }
        for next in 1..stops.len() {
            if !used[next] {
                used[next] = true;
                order.push(next);
                search(stops, order, used, best);
                order.pop();
                used[next] = false;
            }
        }
    }

    let mut used = vec![false; stops.len()];
    used[0] = true;
    let mut best = f64::INFINITY;
    search(stops, &mut vec![0], &mut used, &mut best);
    best
}

fn assert_relative_eq(actual: f64, expected: f64) {
    assert!(
        ((actual - expected) / expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_unit_square_fitness() {
    let corners = vec![
        Location::new("a", 0.0, 0.0),
        Location::new("b", 1.0, 0.0),
        Location::new("c", 1.0, 1.0),
        Location::new("d", 0.0, 1.0),
    ];

    for shift in 0..corners.len() {
        let mut rotated = corners.clone();
        rotated.rotate_left(shift);
        let mut reflected = rotated.clone();
        reflected.reverse();

        assert_eq!(Tour::new(rotated).unwrap().fitness(), 0.25);
        assert_eq!(Tour::new(reflected).unwrap().fitness(), 0.25);
    }
}

#[test]
fn test_degenerate_instance_is_fatal() {
    let same_place = vec![Location::new("a", 1.0, 1.0), Location::new("b", 1.0, 1.0)];
    assert!(matches!(
        Tour::new(same_place),
        Err(GeneticError::DegenerateFitness(_))
    ));
}

#[test]
fn test_tournament_is_reproducible() {
    init_tracing();
    let seed = Tour::new(cities()).unwrap();
    let options = GaOptions::with_tournament(64, 0.01, 0.7, 0.5, 30, 2).unwrap();

    let mut first = GeneticAlgorithm::new(
        seed.clone(),
        RandomNumberGenerator::from_seed(0),
        options.clone(),
    )
    .unwrap();
    let mut second =
        GeneticAlgorithm::new(seed.clone(), RandomNumberGenerator::from_seed(0), options).unwrap();

    let best_first = first.run_with_tournament().unwrap();
    let best_second = second.run_with_tournament().unwrap();

    assert_eq!(best_first, best_second);
    assert!(is_rearrangement_of(best_first.stops(), seed.stops()));
    assert_relative_eq(best_first.cost(), brute_force_optimum(&cities()));
}

#[test]
fn test_roulette_is_reproducible() {
    init_tracing();
    let seed = Tour::new(cities()).unwrap();
    let options = GaOptions::new(32, 0.01, 0.7, 0.5, 20).unwrap();

    let run = |options: GaOptions| {
        GeneticAlgorithm::new(seed.clone(), RandomNumberGenerator::from_seed(0), options)
            .unwrap()
            .run_with_roulette()
            .unwrap()
    };

    let best = run(options.clone());
    assert_eq!(best, run(options));
    assert!(is_rearrangement_of(best.stops(), seed.stops()));
    assert_relative_eq(best.cost(), brute_force_optimum(&cities()));
}

#[test]
fn test_single_swap_mutation_is_reproducible() {
    let seed = Tour::new(cities()).unwrap();
    let options = GaOptions::builder()
        .population_size(48)
        .num_generations(25)
        .tournament_size(3)
        .mutation(Mutation::SingleSwap)
        .mutation_probability(0.2)
        .build()
        .unwrap();

    let run = || {
        GeneticAlgorithm::new(
            seed.clone(),
            RandomNumberGenerator::from_seed(77),
            options.clone(),
        )
        .unwrap()
        .run_with_tournament()
        .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_population_size_is_invariant() {
    let seed = Tour::new(scrambled_line()).unwrap();

    for size in [1, 2, 7, 33] {
        for generations in 1..4 {
            let options =
                GaOptions::with_tournament(size, 0.05, 0.9, 0.5, generations, 2).unwrap();
            let mut ga =
                GeneticAlgorithm::new(seed.clone(), RandomNumberGenerator::from_seed(3), options)
                    .unwrap();
            assert_eq!(ga.population().size(), size);

            ga.run_with_tournament().unwrap();
            assert_eq!(ga.population().size(), size);

            ga.run_with_roulette().unwrap();
            assert_eq!(ga.population().size(), size);
        }
    }
}

#[test]
fn test_best_fitness_never_regresses_between_generations() {
    let seed = Tour::new(scrambled_line()).unwrap();
    let options = GaOptions::with_tournament(40, 0.05, 0.7, 1.0, 1, 2).unwrap();
    let mut ga = GeneticAlgorithm::new(seed, RandomNumberGenerator::from_seed(11), options).unwrap();

    let mut previous = ga.population().best().unwrap().fitness();
    for generation in 0..60 {
        let best = if generation % 2 == 0 {
            ga.run_with_tournament().unwrap()
        } else {
            ga.run_with_roulette().unwrap()
        };
        assert!(best.fitness() >= previous);
        previous = best.fitness();
    }
}

#[test]
fn test_tournament_converges_on_collinear_stops() {
    init_tracing();
    let seed = Tour::new(scrambled_line()).unwrap();
    let options = GaOptions::with_tournament(256, 0.01, 0.7, 0.5, 300, 4).unwrap();
    let mut ga = GeneticAlgorithm::new(seed, RandomNumberGenerator::from_seed(0), options).unwrap();

    let best = ga.run_with_tournament().unwrap();

    assert!(
        (best.cost() - 380.0).abs() < 1e-9,
        "tournament ended at {} (optimum 380)",
        best.cost()
    );
    assert!((best.fitness() - LINE_OPTIMUM).abs() < 1e-12);
}

#[test]
fn test_roulette_converges_on_collinear_stops() {
    init_tracing();
    let seed = Tour::new(scrambled_line()).unwrap();
    let options = GaOptions::new(256, 0.01, 0.7, 0.5, 400).unwrap();
    let mut ga = GeneticAlgorithm::new(seed, RandomNumberGenerator::from_seed(0), options).unwrap();

    let best = ga.run_with_roulette().unwrap();

    assert!(
        (best.cost() - 380.0).abs() < 1e-9,
        "roulette ended at {} (optimum 380)",
        best.cost()
    );
    assert!((best.fitness() - LINE_OPTIMUM).abs() < 1e-12);
}

#[test]
fn test_report_rendering() {
    let tour = Tour::new(vec![
        Location::new("Lisbon", 0.0, 0.0),
        Location::new("Porto", 0.0, 3.0),
        Location::new("Faro", 4.0, 0.0),
    ])
    .unwrap();

    assert_eq!(
        tour.to_string(),
        "Lisbon->Porto->Faro->Lisbon\nPath length: 12"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_options_serialize() {
    let options = GaOptions::with_tournament(64, 0.01, 0.7, 0.5, 30, 2).unwrap();
    let json = serde_json::to_string(&options).unwrap();
    let restored: GaOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}
