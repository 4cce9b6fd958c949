//! Route cost accounting.
//!
//! Two distinct measures are kept apart on purpose: the internal cost that
//! drives pheromone updates and best-route selection, and the reported path
//! length shown to users.

mod cost;

pub use cost::{reported_distance, RouteCostModel};
