//! Distances between coordinates.
//!
//! Provides the [`DistanceOracle`] trait with great-circle and planar
//! implementations, and a dense distance matrix for one city ordering.

mod matrix;
mod oracle;

pub use matrix::DistanceMatrix;
pub use oracle::{DistanceOracle, Euclidean, GreatCircle, EARTH_RADIUS_KM};
