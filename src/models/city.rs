//! Coordinate and city types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A geographic position as (latitude, longitude) in degrees.
///
/// Both components are finite, so coordinates compare and hash by value and
/// can key a map. `-0.0` is stored as `0.0`.
///
/// # Examples
///
/// ```
/// use u_ants::models::Coordinate;
///
/// let kyiv = Coordinate::new(50.45, 30.52).unwrap();
/// assert_eq!(kyiv.lat(), 50.45);
/// assert!(Coordinate::new(f64::NAN, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// Returns `None` if either component is non-finite.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        // adding 0.0 turns -0.0 into 0.0
        Some(Self {
            lat: lat + 0.0,
            lon: lon + 0.0,
        })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = String;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lon).ok_or_else(|| format!("invalid coordinate ({lat}, {lon})"))
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A city visited by a tour.
///
/// Cities are opaque to the search: an id plus a coordinate. Two cities may
/// share a coordinate as long as their ids differ.
///
/// # Examples
///
/// ```
/// use u_ants::models::{City, Coordinate};
///
/// let c = City::new(3, Coordinate::new(48.0, 37.8).unwrap());
/// assert_eq!(c.id(), 3);
/// assert_eq!(c.coordinate().lon(), 37.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    id: usize,
    coordinate: Coordinate,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }

    /// Creates cities from a coordinate list, numbering them in order.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Vec<City> {
        coordinates
            .iter()
            .enumerate()
            .map(|(id, &c)| City::new(id, c))
            .collect()
    }

    /// City id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Position of this city.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
