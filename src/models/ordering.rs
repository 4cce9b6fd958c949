//! Fixed city ordering for one search.

use std::collections::HashMap;

use super::City;
use crate::error::{AcoError, Result};

/// The ordered set of cities taking part in one search.
///
/// Assigns every city a matrix index: the city at position `i` of the input
/// list owns row and column `i`. The mapping is bijective for the lifetime of
/// the ordering.
///
/// # Examples
///
/// ```
/// use u_ants::models::{City, CityOrdering, Coordinate};
///
/// let cities = City::from_coordinates(&[
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(1.0, 0.0).unwrap(),
/// ]);
/// let ordering = CityOrdering::new(&cities).unwrap();
/// assert_eq!(ordering.len(), 2);
/// assert_eq!(ordering.index_of(&cities[1]), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct CityOrdering {
    cities: Vec<City>,
    index: HashMap<City, usize>,
}

impl CityOrdering {
    /// Builds an ordering from a city list.
    ///
    /// Fails if the list is empty or contains the same city twice.
    pub fn new(cities: &[City]) -> Result<Self> {
        if cities.is_empty() {
            return Err(AcoError::EmptyCities);
        }
        let mut index = HashMap::with_capacity(cities.len());
        for (position, &city) in cities.iter().enumerate() {
            if index.insert(city, position).is_some() {
                return Err(AcoError::DuplicateCity {
                    id: city.id(),
                    position,
                });
            }
        }
        Ok(Self {
            cities: cities.to_vec(),
            index,
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: an ordering holds at least one city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Matrix index of `city`, if it belongs to this ordering.
    pub fn index_of(&self, city: &City) -> Option<usize> {
        self.index.get(city).copied()
    }

    /// City at matrix index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn city(&self, i: usize) -> City {
        self.cities[i]
    }

    /// All cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Maps a sequence of indices to cities.
    pub fn resolve(&self, tour: &[usize]) -> Vec<City> {
        tour.iter().map(|&i| self.cities[i]).collect()
    }
}
