//! # u-ants
//!
//! Short tours over geographic points with an ant colony: simulated ants
//! build routes guided by a shared pheromone matrix that good routes
//! reinforce and every ant decays.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, City, CityOrdering, Route)
//! - [`distance`] — Distance oracles and the dense distance matrix
//! - [`evaluation`] — Internal route cost and reported path length
//! - [`aco`] — Pheromone matrix, transition sampler and the colony driver
//! - [`geo`] — Geocoding cache, GeoNames gazetteer, city sampling and reporting
//! - [`telemetry`] — Progress logging callback
//! - [`error`] — Error type

pub mod aco;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod geo;
pub mod models;
pub mod telemetry;

pub use error::{AcoError, Result};
