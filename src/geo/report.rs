//! Human-readable route listing.

use std::io::{self, Write};

use super::gazetteer::split_country;
use super::Locations;
use crate::models::Coordinate;

/// Writes one line per visited city: position in the route, coordinate,
/// place name and address.
///
/// A trailing `", CC"` country qualifier is dropped from the place name.
/// Coordinates missing from `locations` print as `N/A` / `Unknown`.
///
/// # Examples
///
/// ```
/// use u_ants::geo::{write_route, Locations};
/// use u_ants::models::Coordinate;
///
/// let kyiv = Coordinate::new(50.45, 30.52).unwrap();
/// let mut locations = Locations::new();
/// locations.insert(kyiv, "Kyiv, UA", "Kyiv, Ukraine");
///
/// let mut out = Vec::new();
/// write_route(&mut out, &[kyiv], &locations).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0: (50.45, 30.52), Kyiv - Kyiv, Ukraine\n");
/// ```
pub fn write_route<W: Write>(out: &mut W, route: &[Coordinate], locations: &Locations) -> io::Result<()> {
    for (i, coordinate) in route.iter().enumerate() {
        let (place, address) = match locations.get(coordinate) {
            Some(l) => (split_country(&l.place).0.trim(), l.address.as_str()),
            None => ("N/A", "Unknown"),
        };
        writeln!(out, "{}: {}, {} - {}", i, coordinate, place, address)?;
    }
    Ok(())
}
