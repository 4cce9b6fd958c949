//! Domain model types for tour search.
//!
//! Provides coordinates and cities, the fixed city ordering that assigns
//! matrix indices for one search, and routes as ordered city sequences.

mod city;
mod ordering;
mod route;

pub use city::{City, Coordinate};
pub use ordering::CityOrdering;
pub use route::Route;
