//! Picking the cities to route through.

use rand::seq::index;
use rand::Rng;

use super::Locations;
use crate::models::Coordinate;

/// Selects up to `n` coordinates from `locations`.
///
/// Returns `min(n, locations.len())` entries: a random subset of distinct
/// places if `randomize` is set, otherwise the first ones in insertion order.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ants::geo::{sample_cities, Locations};
/// use u_ants::models::Coordinate;
///
/// let mut locations = Locations::new();
/// for i in 0..5 {
///     locations.insert(Coordinate::new(i as f64, 0.0).unwrap(), format!("p{i}"), "");
/// }
/// let mut rng = StdRng::seed_from_u64(42);
/// let prefix = sample_cities(&locations, 2, false, &mut rng);
/// assert_eq!(prefix, locations.coordinates()[..2].to_vec());
/// assert_eq!(sample_cities(&locations, 10, true, &mut rng).len(), 5);
/// ```
pub fn sample_cities<R: Rng + ?Sized>(
    locations: &Locations,
    n: usize,
    randomize: bool,
    rng: &mut R,
) -> Vec<Coordinate> {
    let n = n.min(locations.len());
    let all = locations.coordinates();
    if !randomize {
        return all[..n].to_vec();
    }
    index::sample(rng, all.len(), n)
        .into_iter()
        .map(|i| all[i])
        .collect()
}
