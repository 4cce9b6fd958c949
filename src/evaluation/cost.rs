//! Internal cost and reported distance of a route.

use crate::distance::{DistanceMatrix, DistanceOracle};
use crate::models::Route;

/// Computes route costs over a precomputed distance matrix.
///
/// Routes are given as matrix indices.
///
/// # Examples
///
/// ```
/// use u_ants::distance::DistanceMatrix;
/// use u_ants::evaluation::RouteCostModel;
///
/// // three points on a line at 0, 1 and 3
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// let model = RouteCostModel::new(&dm);
/// assert_eq!(model.reported_distance(&[0, 1, 2]), 3.0);
/// // every term is measured from the second city
/// assert_eq!(model.internal_cost(&[0, 1, 2]), 2.0);
/// ```
pub struct RouteCostModel<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteCostModel<'a> {
    /// Creates a cost model over the given distances.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Cost used for pheromone updates and for picking the best route.
    ///
    /// Sums `d(route[1], route[i + 1])` for `i` in `0..len - 1`, i.e. every
    /// term is anchored at the second city rather than being the edge
    /// `route[i] -> route[i + 1]`. This is not the tour length and must not be
    /// replaced by [`Self::reported_distance`]: the two rank routes
    /// differently and so steer the colony differently.
    ///
    /// Zero for routes shorter than two cities.
    pub fn internal_cost(&self, route: &[usize]) -> f64 {
        if route.len() < 2 {
            return 0.0;
        }
        let anchor = route[1];
        route[1..]
            .iter()
            .map(|&to| self.distances.get(anchor, to))
            .sum()
    }

    /// Conventional path length, `Σ d(route[i], route[i + 1])`.
    ///
    /// Used for output only. Zero for empty and single-city routes.
    pub fn reported_distance(&self, route: &[usize]) -> f64 {
        route
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum()
    }
}

/// Path length of a [`Route`] measured with `oracle`.
///
/// Zero for empty and single-city routes.
///
/// # Examples
///
/// ```
/// use u_ants::distance::Euclidean;
/// use u_ants::evaluation::reported_distance;
/// use u_ants::models::{City, Coordinate, Route};
///
/// let route = Route::new(City::from_coordinates(&[
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(3.0, 4.0).unwrap(),
///     Coordinate::new(3.0, 5.0).unwrap(),
/// ]));
/// assert!((reported_distance(&route, &Euclidean) - 6.0).abs() < 1e-12);
/// assert_eq!(reported_distance(&Route::default(), &Euclidean), 0.0);
/// ```
pub fn reported_distance<D: DistanceOracle + ?Sized>(route: &Route, oracle: &D) -> f64 {
    route
        .cities()
        .windows(2)
        .map(|w| oracle.distance(w[0].coordinate(), w[1].coordinate()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Euclidean, GreatCircle};
    use crate::models::{City, Coordinate};

    /// Square with side 1: corners 0 (0,0), 1 (0,1), 2 (1,1), 3 (1,0).
    fn square() -> DistanceMatrix {
        let d = std::f64::consts::SQRT_2;
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, d, 1.0, //
                1.0, 0.0, 1.0, d, //
                d, 1.0, 0.0, 1.0, //
                1.0, d, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_reported_distance_tour() {
        let dm = square();
        let model = RouteCostModel::new(&dm);
        assert!((model.reported_distance(&[0, 1, 2, 3]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reported_distance_degenerate() {
        let dm = square();
        let model = RouteCostModel::new(&dm);
        assert_eq!(model.reported_distance(&[]), 0.0);
        assert_eq!(model.reported_distance(&[2]), 0.0);
    }

    #[test]
    fn test_internal_cost_anchored_at_second_city() {
        let dm = square();
        let model = RouteCostModel::new(&dm);
        // anchor 1: d(1,1) + d(1,2) + d(1,3) = 0 + 1 + sqrt2
        let expected = 1.0 + std::f64::consts::SQRT_2;
        assert!((model.internal_cost(&[0, 1, 2, 3]) - expected).abs() < 1e-12);
        // differs from the edge sum
        assert!((model.internal_cost(&[0, 1, 2, 3]) - model.reported_distance(&[0, 1, 2, 3])).abs() > 0.1);
    }

    #[test]
    fn test_internal_cost_short_routes() {
        let dm = square();
        let model = RouteCostModel::new(&dm);
        assert_eq!(model.internal_cost(&[]), 0.0);
        assert_eq!(model.internal_cost(&[3]), 0.0);
        assert_eq!(model.internal_cost(&[3, 1]), 0.0);
    }

    #[test]
    fn test_reported_distance_route_reversible() {
        let route = Route::new(City::from_coordinates(&[
            Coordinate::new(50.45, 30.52).expect("valid"),
            Coordinate::new(49.84, 24.03).expect("valid"),
            Coordinate::new(46.48, 30.72).expect("valid"),
        ]));
        let forward = reported_distance(&route, &GreatCircle);
        let backward = reported_distance(&route.reversed(), &GreatCircle);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_reported_distance_single_city() {
        let route = Route::new(City::from_coordinates(&[Coordinate::new(1.0, 1.0).expect("valid")]));
        assert_eq!(reported_distance(&route, &Euclidean), 0.0);
    }
}
