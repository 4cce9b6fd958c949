//! Ant colony optimization for single-tour routing.
//!
//! - [`PheromoneMatrix`] — shared trail strengths, decayed and reinforced per ant
//! - [`TransitionSampler`] — roulette-wheel choice of the next city
//! - [`ColonySearch`] — the driver, tracking the best route found
//! - [`AcoConfig`] — search parameters
//!
//! The colony is incremental: each ant sees the trails left by every ant
//! before it, so the order in which ants are applied matters.

mod config;
mod pheromone;
mod sampler;
mod search;

pub use config::AcoConfig;
pub use pheromone::{PheromoneMatrix, PheromoneSummary, ZERO_COST_EPSILON};
pub use sampler::TransitionSampler;
pub use search::{search, ColonySearch, SearchResult};
