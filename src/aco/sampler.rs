//! State transition rule: roulette-wheel choice of the next city.

use rand::Rng;

use super::PheromoneMatrix;
use crate::distance::DistanceMatrix;

/// Picks the next city of a partial route.
///
/// The weight of moving from the last city `i` to an unvisited city `j` is
/// `pheromone[i][j] * (1 / d(i, j))^beta`. Candidates are always walked in
/// ascending index order, so a seeded RNG reproduces the same choices.
///
/// Coincident cities (`d = 0`) get an infinite weight when `beta > 0`; if
/// any candidate is infinite the choice is uniform among those candidates.
/// If every weight is zero the choice is uniform among all candidates.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ants::aco::{PheromoneMatrix, TransitionSampler};
/// use u_ants::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// let ph = PheromoneMatrix::new(3, 1.0);
/// let sampler = TransitionSampler::new(&ph, &dm, 2.0);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let next = sampler.sample(&[0, 2], &mut rng);
/// assert_eq!(next, Some(1));
/// assert_eq!(sampler.sample(&[0, 2, 1], &mut rng), None);
/// ```
pub struct TransitionSampler<'a> {
    pheromone: &'a PheromoneMatrix,
    distances: &'a DistanceMatrix,
    beta: f64,
}

impl<'a> TransitionSampler<'a> {
    /// Creates a sampler reading the given matrices.
    pub fn new(pheromone: &'a PheromoneMatrix, distances: &'a DistanceMatrix, beta: f64) -> Self {
        Self {
            pheromone,
            distances,
            beta,
        }
    }

    /// Unnormalized weight of the move `from -> to`. NaN is reported as zero.
    pub fn desirability(&self, from: usize, to: usize) -> f64 {
        let heuristic = if self.beta == 0.0 {
            1.0
        } else {
            (1.0 / self.distances.get(from, to)).powf(self.beta)
        };
        let w = self.pheromone.get(from, to) * heuristic;
        if w.is_nan() {
            0.0
        } else {
            w
        }
    }

    /// Chooses the next city after `route`.
    ///
    /// Returns `None` if `route` is empty or already visits every city.
    /// Never returns a city that is on `route`.
    ///
    /// # Panics
    ///
    /// Panics if `route` holds an index outside the matrices.
    pub fn sample<R: Rng + ?Sized>(&self, route: &[usize], rng: &mut R) -> Option<usize> {
        let &last = route.last()?;
        let mut visited = vec![false; self.distances.size()];
        for &c in route {
            debug_assert!(c < visited.len(), "city {c} out of range");
            visited[c] = true;
        }
        let candidates: Vec<usize> = (0..visited.len()).filter(|&c| !visited[c]).collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.choose(last, &candidates, rng)])
    }

    /// Builds a complete route starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is outside the matrices.
    pub fn construct<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> Vec<usize> {
        let n = self.distances.size();
        debug_assert!(start < n, "start {start} out of range");
        let mut route = Vec::with_capacity(n);
        route.push(start);
        // ascending order is kept by Vec::remove
        let mut candidates: Vec<usize> = (0..n).filter(|&c| c != start).collect();
        while !candidates.is_empty() {
            let last = route[route.len() - 1];
            let pos = self.choose(last, &candidates, rng);
            route.push(candidates.remove(pos));
        }
        route
    }

    /// Roulette-wheel selection; returns a position into `candidates`.
    ///
    /// Draws exactly one random number per call. Weights are scaled by the
    /// largest one first, so their sum stays finite.
    fn choose<R: Rng + ?Sized>(&self, from: usize, candidates: &[usize], rng: &mut R) -> usize {
        debug_assert!(!candidates.is_empty());
        let weights: Vec<f64> = candidates
            .iter()
            .map(|&c| self.desirability(from, c))
            .collect();
        let r: f64 = rng.random();

        let infinite: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_infinite())
            .map(|(pos, _)| pos)
            .collect();
        if !infinite.is_empty() {
            return pick_uniform(&infinite, r);
        }

        let max = weights.iter().copied().fold(0.0, f64::max);
        if max == 0.0 {
            let all: Vec<usize> = (0..candidates.len()).collect();
            return pick_uniform(&all, r);
        }

        let scaled: Vec<f64> = weights.iter().map(|w| w / max).collect();
        let total: f64 = scaled.iter().sum();
        let mut cumulative = 0.0;
        for (pos, w) in scaled.iter().enumerate() {
            cumulative += w / total;
            if cumulative >= r {
                return pos;
            }
        }
        // rounding left the running total just below r
        candidates.len() - 1
    }
}

fn pick_uniform(pool: &[usize], r: f64) -> usize {
    let k = ((r * pool.len() as f64) as usize).min(pool.len() - 1);
    pool[k]
}
