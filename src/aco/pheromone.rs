//! Pheromone trail matrix.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::RouteCostModel;

/// Stand-in for a zero route cost when taking its reciprocal.
pub const ZERO_COST_EPSILON: f64 = f64::EPSILON;

/// Reciprocal of a route cost, with zero replaced by [`ZERO_COST_EPSILON`].
fn trail_strength(cost: f64) -> f64 {
    let cost = if cost == 0.0 { ZERO_COST_EPSILON } else { cost };
    1.0 / cost
}

/// A dense n×n grid of trail strengths, row `from`, column `to`.
///
/// Every cell stays finite and non-negative across initialize, decay and
/// update.
///
/// # Examples
///
/// ```
/// use u_ants::aco::PheromoneMatrix;
///
/// let mut ph = PheromoneMatrix::new(3, 0.25);
/// ph.update(&[0, 2, 1], 2.0);
/// assert_eq!(ph.get(0, 2), 0.5);
/// assert_eq!(ph.get(2, 1), 0.5);
/// assert_eq!(ph.get(1, 0), 0.25);
///
/// ph.decay(0.5);
/// assert!((ph.get(1, 0) - 0.5).abs() < 1e-12); // 0.25^0.5
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Smallest and largest trail strength of a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneSummary {
    /// Smallest cell value.
    pub min: f64,
    /// Largest cell value.
    pub max: f64,
}

impl PheromoneMatrix {
    /// Creates a matrix with every cell set to `value`.
    pub fn new(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Creates the starting matrix for a search.
    ///
    /// Shuffles one full permutation of the cities, takes its internal cost
    /// as a baseline and sets every cell to `1 / baseline`.
    pub fn initialize<R: Rng + ?Sized>(distances: &DistanceMatrix, rng: &mut R) -> Self {
        let mut way: Vec<usize> = (0..distances.size()).collect();
        way.shuffle(rng);
        let baseline = RouteCostModel::new(distances).internal_cost(&way);
        Self::new(distances.size(), trail_strength(baseline))
    }

    /// Evaporates every trail: `v` becomes `v^(1 - alpha)`.
    ///
    /// Note this is an exponent, not the usual `v * (1 - alpha)`: cells below
    /// one grow toward one and cells above one shrink toward it.
    pub fn decay(&mut self, alpha: f64) {
        let exponent = 1.0 - alpha;
        for v in &mut self.data {
            *v = v.powf(exponent);
        }
    }

    /// Sets the trail of every edge of `route` to `1 / cost`.
    ///
    /// Replaces the previous value rather than adding to it.
    ///
    /// # Panics
    ///
    /// Panics if `route` holds an index outside the matrix.
    pub fn update(&mut self, route: &[usize], cost: f64) {
        let strength = trail_strength(cost);
        for w in route.windows(2) {
            debug_assert!(w[0] < self.size && w[1] < self.size, "edge {w:?} out of range");
            self.data[w[0] * self.size + w[1]] = strength;
        }
    }

    /// Trail strength on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if every cell is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Smallest and largest cell values.
    pub fn summary(&self) -> PheromoneSummary {
        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        PheromoneSummary { min, max }
    }
}
