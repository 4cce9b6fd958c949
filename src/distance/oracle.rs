//! Distance functions between coordinates.

use crate::models::Coordinate;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Computes a scalar distance between two coordinates.
///
/// Implementations must be symmetric, non-negative, and return zero exactly
/// when both coordinates are equal. The unit is irrelevant to the search.
pub trait DistanceOracle: Send + Sync {
    /// Distance from `a` to `b`.
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64;
}

/// Great-circle distance in kilometres using the haversine formula.
///
/// # Examples
///
/// ```
/// use u_ants::distance::{DistanceOracle, GreatCircle};
/// use u_ants::models::Coordinate;
///
/// let kyiv = Coordinate::new(50.4501, 30.5234).unwrap();
/// let lviv = Coordinate::new(49.8397, 24.0297).unwrap();
/// let d = GreatCircle.distance(kyiv, lviv);
/// assert!((d - 467.5).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl DistanceOracle for GreatCircle {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        if a == b {
            return 0.0;
        }
        let (lat1, lat2) = (a.lat().to_radians(), b.lat().to_radians());
        let dlat = lat2 - lat1;
        let dlon = (b.lon() - a.lon()).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // h may drift just above 1.0 for antipodal points
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}

/// Planar distance treating latitude as `y` and longitude as `x`.
///
/// Useful for synthetic instances where coordinates are not geographic.
///
/// # Examples
///
/// ```
/// use u_ants::distance::{DistanceOracle, Euclidean};
/// use u_ants::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(3.0, 4.0).unwrap();
/// assert!((Euclidean.distance(a, b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceOracle for Euclidean {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let dy = a.lat() - b.lat();
        let dx = a.lon() - b.lon();
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    #[test]
    fn test_great_circle_zero() {
        let a = coord(48.5, 35.0);
        assert_eq!(GreatCircle.distance(a, a), 0.0);
    }

    #[test]
    fn test_great_circle_symmetric() {
        let a = coord(46.48, 30.72);
        let b = coord(49.99, 36.23);
        assert_eq!(GreatCircle.distance(a, b), GreatCircle.distance(b, a));
    }

    #[test]
    fn test_great_circle_quarter_meridian() {
        // equator to pole along a meridian is a quarter circumference
        let d = GreatCircle.distance(coord(0.0, 0.0), coord(90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_great_circle_antipodal_is_finite() {
        let d = GreatCircle.distance(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean() {
        assert!((Euclidean.distance(coord(0.0, 0.0), coord(3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert_eq!(Euclidean.distance(coord(1.0, 1.0), coord(1.0, 1.0)), 0.0);
    }
}
