//! Route type.

use std::collections::HashSet;

use super::{City, Coordinate};

/// An ordered sequence of distinct cities.
///
/// While an ant is building it, a route is a prefix of a tour; once complete
/// it is a permutation of the search's cities.
///
/// # Examples
///
/// ```
/// use u_ants::models::{City, Coordinate, Route};
///
/// let a = City::new(0, Coordinate::new(0.0, 0.0).unwrap());
/// let b = City::new(1, Coordinate::new(0.0, 1.0).unwrap());
/// let route = Route::new(vec![a, b]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.last(), Some(&b));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    cities: Vec<City>,
}

impl Route {
    /// Creates a route visiting `cities` in order.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Appends a city to the end of the route.
    pub fn push(&mut self, city: City) {
        self.cities.push(city);
    }

    /// Cities in visit order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Coordinates in visit order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.cities.iter().map(City::coordinate).collect()
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Last visited city.
    pub fn last(&self) -> Option<&City> {
        self.cities.last()
    }

    /// Returns `true` if `city` is already on the route.
    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// The same cities visited in reverse order.
    pub fn reversed(&self) -> Route {
        let mut cities = self.cities.clone();
        cities.reverse();
        Route { cities }
    }

    /// Returns `true` if the route visits every city of `all` exactly once.
    pub fn is_permutation_of(&self, all: &[City]) -> bool {
        if self.cities.len() != all.len() {
            return false;
        }
        let visited: HashSet<&City> = self.cities.iter().collect();
        visited.len() == all.len() && all.iter().all(|c| visited.contains(c))
    }
}

impl From<Vec<City>> for Route {
    fn from(cities: Vec<City>) -> Self {
        Self::new(cities)
    }
}
