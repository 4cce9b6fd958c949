//! Colony search driver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::{AcoConfig, PheromoneMatrix, PheromoneSummary, TransitionSampler};
use crate::distance::{DistanceMatrix, DistanceOracle, GreatCircle};
use crate::error::Result;
use crate::evaluation::RouteCostModel;
use crate::models::{City, CityOrdering, Route};
use crate::telemetry::InfoLogger;

/// Outcome of a colony search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best route found.
    pub route: Route,
    /// The same route as indices into the input city list.
    pub tour: Vec<usize>,
    /// Internal cost of the best route.
    pub cost: f64,
    /// Path length of the best route.
    pub distance: f64,
    /// Best internal cost after each ant.
    pub history: Vec<f64>,
    /// Range of trail strengths when the search ended.
    pub pheromone: PheromoneSummary,
}

/// Best route seen so far; `None` until the first ant finishes.
type Best = Option<(Vec<usize>, f64)>;

/// Runs an ant colony over a list of cities.
///
/// Every ant starts at `first_pos`, extends its route with
/// [`TransitionSampler`] until all cities are visited, and then, before the
/// next ant starts, the matrix is decayed and the ant's edges are set to the
/// reciprocal of its internal cost. The lowest-cost route wins.
///
/// With `batch_size > 1`, up to that many ants build their routes in
/// parallel against the same matrix; their updates are still applied one
/// ant at a time, in ant order.
///
/// # Examples
///
/// ```
/// use u_ants::aco::{AcoConfig, ColonySearch};
/// use u_ants::distance::GreatCircle;
/// use u_ants::models::{City, Coordinate};
///
/// let cities = City::from_coordinates(&[
///     Coordinate::new(50.45, 30.52).unwrap(),
///     Coordinate::new(49.84, 24.03).unwrap(),
///     Coordinate::new(46.48, 30.72).unwrap(),
///     Coordinate::new(49.99, 36.23).unwrap(),
/// ]);
/// let search = ColonySearch::new(AcoConfig::default().with_ants(16).with_seed(42));
/// let result = search.run(&cities, &GreatCircle).unwrap();
/// assert!(result.route.is_permutation_of(&cities));
/// assert_eq!(result.route.cities()[0], cities[0]);
/// ```
#[derive(Clone)]
pub struct ColonySearch {
    config: AcoConfig,
    logger: Option<InfoLogger>,
}

impl ColonySearch {
    /// Creates a search with the given parameters.
    pub fn new(config: AcoConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    /// Reports progress through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Search parameters.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs the search, seeding from the config or from the OS.
    pub fn run<D: DistanceOracle + ?Sized>(&self, cities: &[City], oracle: &D) -> Result<SearchResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(cities, oracle, &mut rng)
    }

    /// Runs the search drawing every random number from `rng`.
    pub fn run_with_rng<D, R>(&self, cities: &[City], oracle: &D, rng: &mut R) -> Result<SearchResult>
    where
        D: DistanceOracle + ?Sized,
        R: Rng + ?Sized,
    {
        self.config.validate_for(cities.len())?;
        let ordering = CityOrdering::new(cities)?;
        let distances = DistanceMatrix::from_ordering(&ordering, oracle);
        let mut pheromone = PheromoneMatrix::initialize(&distances, rng);

        self.log(&format!(
            "colony search: {} cities, {} ants, alpha={}, beta={}, batch={}",
            ordering.len(),
            self.config.ants,
            self.config.alpha,
            self.config.beta,
            self.config.batch_size
        ));

        let mut best: Best = None;
        let mut history = Vec::with_capacity(self.config.ants);

        if self.config.batch_size == 1 {
            for ant in 0..self.config.ants {
                let route = TransitionSampler::new(&pheromone, &distances, self.config.beta)
                    .construct(self.config.first_pos, rng);
                self.absorb(ant, route, &distances, &mut pheromone, &mut best, &mut history);
            }
        } else {
            let mut ant = 0;
            while ant < self.config.ants {
                let wave = self.config.batch_size.min(self.config.ants - ant);
                let seeds: Vec<u64> = (0..wave).map(|_| rng.random()).collect();
                let routes: Vec<Vec<usize>> = {
                    let sampler = TransitionSampler::new(&pheromone, &distances, self.config.beta);
                    seeds
                        .par_iter()
                        .map(|&seed| {
                            let mut ant_rng = StdRng::seed_from_u64(seed);
                            sampler.construct(self.config.first_pos, &mut ant_rng)
                        })
                        .collect()
                };
                for route in routes {
                    self.absorb(ant, route, &distances, &mut pheromone, &mut best, &mut history);
                    ant += 1;
                }
            }
        }

        // ants >= 1 is validated, so at least one route was absorbed
        let (tour, cost) = best.unwrap_or_else(|| (vec![self.config.first_pos], 0.0));
        let distance = RouteCostModel::new(&distances).reported_distance(&tour);
        self.log(&format!(
            "colony search finished: cost {:.3}, distance {:.3}",
            cost, distance
        ));

        Ok(SearchResult {
            route: Route::new(ordering.resolve(&tour)),
            tour,
            cost,
            distance,
            history,
            pheromone: pheromone.summary(),
        })
    }

    /// Applies one finished ant to the matrix and the best-so-far.
    fn absorb(
        &self,
        ant: usize,
        route: Vec<usize>,
        distances: &DistanceMatrix,
        pheromone: &mut PheromoneMatrix,
        best: &mut Best,
        history: &mut Vec<f64>,
    ) {
        pheromone.decay(self.config.alpha);
        let cost = RouteCostModel::new(distances).internal_cost(&route);
        pheromone.update(&route, cost);

        let improved = match best {
            None => true,
            Some((_, best_cost)) => cost < *best_cost,
        };
        if improved {
            self.log(&format!("ant {}: new best cost {:.3}", ant, cost));
            *best = Some((route, cost));
        }
        history.push(best.as_ref().map_or(cost, |(_, c)| *c));
    }

    fn log(&self, msg: &str) {
        if let Some(logger) = &self.logger {
            logger(msg);
        }
    }
}

/// Finds a short route through `cities` with great-circle distances.
///
/// Starts at `cities[first_pos]`, runs `ants` ants with evaporation `alpha`
/// and heuristic exponent `beta`, and returns the best route found.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ants::aco::search;
/// use u_ants::models::{City, Coordinate};
///
/// let cities = City::from_coordinates(&[
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
///     Coordinate::new(1.0, 1.0).unwrap(),
/// ]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let route = search(&cities, 0.2, 2.0, 8, 0, &mut rng).unwrap();
/// assert!(route.is_permutation_of(&cities));
/// ```
pub fn search<R: Rng + ?Sized>(
    cities: &[City],
    alpha: f64,
    beta: f64,
    ants: usize,
    first_pos: usize,
    rng: &mut R,
) -> Result<Route> {
    let config = AcoConfig::default()
        .with_alpha(alpha)
        .with_beta(beta)
        .with_ants(ants)
        .with_first_pos(first_pos);
    ColonySearch::new(config)
        .run_with_rng(cities, &GreatCircle, rng)
        .map(|result| result.route)
}
