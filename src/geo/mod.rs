//! Collaborators around the search: turning place names into cities and
//! routes back into text.
//!
//! - [`GeocodeResolver`], [`GeocodeCache`], [`CachedGeocoder`] — name lookup with a permanent cache
//! - [`Gazetteer`] — offline resolver and city lists from GeoNames dumps
//! - [`sample_cities`] — choose which known places to route through
//! - [`load_lines`] — read a place list
//! - [`write_route`] — print a route with place names

mod gazetteer;
mod geocode;
mod loader;
mod locations;
mod report;
mod sample;

pub use gazetteer::{place_names, read_entries, CityFilter, Gazetteer, GeoNamesEntry};
pub use geocode::{CachedGeocoder, GeocodeCache, GeocodeResolver, Geocoded};
pub use loader::{load_lines, parse_lines, save_lines};
pub use locations::{Location, Locations};
pub use report::write_route;
pub use sample::sample_cities;
