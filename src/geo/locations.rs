//! Known places keyed by coordinate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// One known place: where it is, what it was asked as, and its address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Position of the place.
    pub coordinate: Coordinate,
    /// Place name as it was looked up.
    pub place: String,
    /// Address returned by the resolver.
    pub address: String,
}

/// An insertion-ordered mapping `Coordinate -> (place, address)`.
///
/// Inserting a coordinate that is already present replaces its place and
/// address but keeps its position.
///
/// # Examples
///
/// ```
/// use u_ants::geo::Locations;
/// use u_ants::models::Coordinate;
///
/// let mut locations = Locations::new();
/// let c = Coordinate::new(50.45, 30.52).unwrap();
/// locations.insert(c, "Kyiv, UA", "Kyiv, Ukraine");
/// assert_eq!(locations.get(&c).map(|l| l.place.as_str()), Some("Kyiv, UA"));
/// assert_eq!(locations.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Location>", into = "Vec<Location>")]
pub struct Locations {
    entries: Vec<Location>,
    index: HashMap<Coordinate, usize>,
}

impl Locations {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the place at `coordinate`.
    pub fn insert(&mut self, coordinate: Coordinate, place: impl Into<String>, address: impl Into<String>) {
        let location = Location {
            coordinate,
            place: place.into(),
            address: address.into(),
        };
        match self.index.get(&coordinate) {
            Some(&i) => self.entries[i] = location,
            None => {
                self.index.insert(coordinate, self.entries.len());
                self.entries.push(location);
            }
        }
    }

    /// Place at `coordinate`, if known.
    pub fn get(&self, coordinate: &Coordinate) -> Option<&Location> {
        self.index.get(coordinate).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }

    /// Entry at position `i` in insertion order.
    pub fn at(&self, i: usize) -> Option<&Location> {
        self.entries.get(i)
    }

    /// Coordinates in insertion order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.iter().map(|l| l.coordinate).collect()
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no place is known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Location>> for Locations {
    fn from(entries: Vec<Location>) -> Self {
        let mut locations = Locations::new();
        for l in entries {
            locations.insert(l.coordinate, l.place, l.address);
        }
        locations
    }
}

impl From<Locations> for Vec<Location> {
    fn from(locations: Locations) -> Self {
        locations.entries
    }
}
