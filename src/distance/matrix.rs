//! Dense distance matrix.

use super::DistanceOracle;
use crate::models::CityOrdering;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per search from a [`CityOrdering`] so that the colony never
/// asks the oracle for the same pair twice.
///
/// # Examples
///
/// ```
/// use u_ants::models::{City, CityOrdering, Coordinate};
/// use u_ants::distance::{DistanceMatrix, Euclidean};
///
/// let cities = City::from_coordinates(&[
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(3.0, 4.0).unwrap(),
///     Coordinate::new(6.0, 8.0).unwrap(),
/// ]);
/// let ordering = CityOrdering::new(&cities).unwrap();
/// let dm = DistanceMatrix::from_ordering(&ordering, &Euclidean);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix for every pair of cities using `oracle`.
    ///
    /// Only the upper triangle is evaluated; the oracle is symmetric.
    pub fn from_ordering<D: DistanceOracle + ?Sized>(ordering: &CityOrdering, oracle: &D) -> Self {
        let n = ordering.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = oracle.distance(ordering.city(i).coordinate(), ordering.city(j).coordinate());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Euclidean, GreatCircle};
    use crate::models::{City, Coordinate};

    fn sample_ordering() -> CityOrdering {
        let cities = City::from_coordinates(&[
            Coordinate::new(0.0, 0.0).expect("valid"),
            Coordinate::new(4.0, 3.0).expect("valid"),
            Coordinate::new(8.0, 0.0).expect("valid"),
        ]);
        CityOrdering::new(&cities).expect("valid")
    }

    #[test]
    fn test_from_ordering() {
        let dm = DistanceMatrix::from_ordering(&sample_ordering(), &Euclidean);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_ordering(&sample_ordering(), &GreatCircle);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
