//! GeoNames gazetteer: city lists and offline geocoding.
//!
//! Reads the tab-separated GeoNames dump format (`cities5000.txt` and
//! friends, 19 columns per line). Used two ways: filtering a dump down to a
//! list of city names, and answering place-name lookups without a network
//! geocoder.

use std::collections::HashMap;
use std::io::BufRead;

use super::{GeocodeResolver, Geocoded};
use crate::error::{AcoError, Result};
use crate::models::Coordinate;

const COLUMNS: usize = 19;

/// One row of a GeoNames dump.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoNamesEntry {
    /// Name in local script.
    pub name: String,
    /// Name in plain ASCII.
    pub ascii_name: String,
    /// Position.
    pub coordinate: Coordinate,
    /// Feature class, e.g. `P` for populated places.
    pub feature_class: String,
    /// Feature code, e.g. `PPLA`.
    pub feature_code: String,
    /// ISO 3166 country code.
    pub country_code: String,
    /// Population, 0 if unknown.
    pub population: u64,
}

impl GeoNamesEntry {
    /// Parses one dump line; `line_no` is used in error messages.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMNS {
            return Err(parse_error(
                line_no,
                format!("expected {COLUMNS} columns, got {}", fields.len()),
            ));
        }
        let number = |i: usize, what: &str| -> Result<f64> {
            fields[i]
                .trim()
                .parse::<f64>()
                .map_err(|e| parse_error(line_no, format!("{what}: {e}")))
        };
        let (lat, lon) = (number(4, "latitude")?, number(5, "longitude")?);
        let coordinate =
            Coordinate::new(lat, lon).ok_or(AcoError::InvalidCoordinate { lat, lon })?;
        let population = match fields[14].trim() {
            "" => 0,
            p => p
                .parse::<u64>()
                .map_err(|e| parse_error(line_no, format!("population: {e}")))?,
        };
        Ok(Self {
            name: fields[1].to_string(),
            ascii_name: fields[2].to_string(),
            coordinate,
            feature_class: fields[6].to_string(),
            feature_code: fields[7].to_string(),
            country_code: fields[8].to_string(),
            population,
        })
    }
}

fn parse_error(line: usize, reason: String) -> AcoError {
    AcoError::Parse { line, reason }
}

/// Reads every non-blank line of a GeoNames dump.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<GeoNamesEntry>> {
    let mut entries = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(GeoNamesEntry::parse(&line, i + 1)?);
    }
    Ok(entries)
}

/// Which dump rows count as cities.
#[derive(Debug, Clone, PartialEq)]
pub struct CityFilter {
    /// Minimum population, inclusive.
    pub min_population: u64,
    /// Accepted feature classes.
    pub feature_classes: Vec<String>,
    /// Accepted country codes; empty accepts every country.
    pub countries: Vec<String>,
}

impl Default for CityFilter {
    fn default() -> Self {
        Self {
            min_population: 20_000,
            feature_classes: vec!["P".to_string()],
            countries: Vec::new(),
        }
    }
}

impl CityFilter {
    /// Restricts the filter to one country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.countries.push(country.into());
        self
    }

    /// Sets the population threshold.
    #[must_use]
    pub fn with_min_population(mut self, min_population: u64) -> Self {
        self.min_population = min_population;
        self
    }

    /// Returns `true` if `entry` passes.
    pub fn accepts(&self, entry: &GeoNamesEntry) -> bool {
        entry.population >= self.min_population
            && self.feature_classes.iter().any(|c| *c == entry.feature_class)
            && (self.countries.is_empty() || self.countries.iter().any(|c| *c == entry.country_code))
    }
}

/// ASCII names of the accepted entries, sorted and without repeats.
///
/// # Examples
///
/// ```
/// use u_ants::geo::{place_names, read_entries, CityFilter};
///
/// let dump = "1\tLviv\tLviv\t\t49.84\t24.03\tP\tPPLA\tUA\t\t\t\t\t\t717273\t\t\t\t\n\
///             2\tTiny\tTiny\t\t49.00\t24.00\tP\tPPL\tUA\t\t\t\t\t\t150\t\t\t\t\n";
/// let entries = read_entries(dump.as_bytes()).unwrap();
/// let names = place_names(&entries, &CityFilter::default().with_country("UA"));
/// assert_eq!(names, vec!["Lviv".to_string()]);
/// ```
pub fn place_names(entries: &[GeoNamesEntry], filter: &CityFilter) -> Vec<String> {
    let mut names: Vec<String> = entries
        .iter()
        .filter(|e| filter.accepts(e))
        .map(|e| e.ascii_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Offline [`GeocodeResolver`] backed by GeoNames entries.
///
/// Answers `"Name"` and `"Name, CC"` queries, case-insensitively, matching
/// either the local or the ASCII name. When several places share a name the
/// most populous one wins.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<GeoNamesEntry>,
    by_name: HashMap<String, Vec<usize>>,
}

impl Gazetteer {
    /// Indexes `entries` by name.
    pub fn new(entries: Vec<GeoNamesEntry>) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, e) in entries.iter().enumerate() {
            let local = e.name.to_lowercase();
            let ascii = e.ascii_name.to_lowercase();
            if local != ascii {
                by_name.entry(local).or_default().push(i);
            }
            by_name.entry(ascii).or_default().push(i);
        }
        Self { entries, by_name }
    }

    /// Reads and indexes a GeoNames dump.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::new(read_entries(reader)?))
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best entry for a place query.
    pub fn lookup(&self, place: &str) -> Option<&GeoNamesEntry> {
        let (name, country) = split_country(place);
        self.by_name
            .get(&name.trim().to_lowercase())?
            .iter()
            .map(|&i| &self.entries[i])
            .filter(|e| country.map_or(true, |cc| e.country_code.eq_ignore_ascii_case(cc)))
            .max_by_key(|e| e.population)
    }
}

impl GeocodeResolver for Gazetteer {
    fn resolve(&self, place: &str) -> Option<Geocoded> {
        self.lookup(place).map(|e| Geocoded {
            coordinate: e.coordinate,
            address: format!("{}, {}", e.name, e.country_code),
        })
    }
}

/// Splits `"Name, CC"` into the name and a two-letter country code.
pub(crate) fn split_country(place: &str) -> (&str, Option<&str>) {
    match place.rsplit_once(',') {
        Some((name, cc)) => {
            let cc = cc.trim();
            if cc.len() == 2 && cc.chars().all(|c| c.is_ascii_alphabetic()) {
                (name, Some(cc))
            } else {
                (place, None)
            }
        }
        None => (place, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, ascii: &str, lat: f64, lon: f64, class: &str, cc: &str, pop: u64) -> String {
        format!(
            "0\t{name}\t{ascii}\t\t{lat}\t{lon}\t{class}\tPPL\t{cc}\t\t\t\t\t\t{pop}\t\t\t\tEurope/Kyiv"
        )
    }

    fn dump() -> String {
        [
            row("Київ", "Kyiv", 50.45, 30.52, "P", "UA", 2_797_553),
            row("Odesa", "Odesa", 46.48, 30.72, "P", "UA", 1_015_826),
            row("Odesa", "Odesa", 31.85, -102.37, "P", "US", 106_102),
            row("Hoverla", "Hoverla", 48.16, 24.50, "T", "UA", 0),
            row("Selo", "Selo", 48.00, 25.00, "P", "UA", 900),
            row("Kraków", "Krakow", 50.06, 19.94, "P", "PL", 755_050),
        ]
        .join("\n")
    }

    #[test]
    fn test_parse_entry() {
        let e = GeoNamesEntry::parse(&row("Київ", "Kyiv", 50.45, 30.52, "P", "UA", 42), 1)
            .expect("valid");
        assert_eq!(e.name, "Київ");
        assert_eq!(e.ascii_name, "Kyiv");
        assert_eq!(e.coordinate, Coordinate::new(50.45, 30.52).expect("valid"));
        assert_eq!(e.feature_class, "P");
        assert_eq!(e.country_code, "UA");
        assert_eq!(e.population, 42);
    }

    #[test]
    fn test_parse_wrong_columns() {
        let err = GeoNamesEntry::parse("a\tb\tc", 7).expect_err("too short");
        assert!(matches!(err, AcoError::Parse { line: 7, .. }));
    }

    #[test]
    fn test_parse_bad_population() {
        let line = row("X", "X", 1.0, 1.0, "P", "UA", 1).replace("\t1\t\t\t\t", "\tmany\t\t\t\t");
        assert!(matches!(GeoNamesEntry::parse(&line, 3), Err(AcoError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_read_entries_skips_blank_lines() {
        let text = format!("{}\n\n{}\n", row("A", "A", 1.0, 1.0, "P", "UA", 1), row("B", "B", 2.0, 2.0, "P", "UA", 2));
        let entries = read_entries(text.as_bytes()).expect("valid");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_place_names_filter() {
        let entries = read_entries(dump().as_bytes()).expect("valid");
        let names = place_names(&entries, &CityFilter::default().with_country("UA"));
        assert_eq!(names, vec!["Kyiv".to_string(), "Odesa".to_string()]);

        let all = place_names(&entries, &CityFilter::default().with_min_population(0));
        assert_eq!(all, vec!["Krakow", "Kyiv", "Odesa", "Selo"]);
    }

    #[test]
    fn test_gazetteer_size() {
        let gz = Gazetteer::from_reader(dump().as_bytes()).expect("valid");
        assert_eq!(gz.len(), 6);
        assert!(!gz.is_empty());
        assert!(Gazetteer::from_reader("".as_bytes()).expect("valid").is_empty());
    }

    #[test]
    fn test_lookup_with_country() {
        let gz = Gazetteer::from_reader(dump().as_bytes()).expect("valid");
        assert_eq!(gz.lookup("Odesa, US").expect("found").country_code, "US");
        assert_eq!(gz.lookup("odesa, ua").expect("found").country_code, "UA");
        assert!(gz.lookup("Krakow, UA").is_none());
    }

    #[test]
    fn test_lookup_most_populous() {
        let gz = Gazetteer::from_reader(dump().as_bytes()).expect("valid");
        assert_eq!(gz.lookup("Odesa").expect("found").country_code, "UA");
    }

    #[test]
    fn test_lookup_local_name() {
        let gz = Gazetteer::from_reader(dump().as_bytes()).expect("valid");
        assert_eq!(gz.lookup("Київ").expect("found").ascii_name, "Kyiv");
        assert_eq!(gz.lookup("Kraków, PL").expect("found").ascii_name, "Krakow");
    }

    #[test]
    fn test_resolve() {
        let gz = Gazetteer::from_reader(dump().as_bytes()).expect("valid");
        let found = gz.resolve("Kyiv, UA").expect("found");
        assert_eq!(found.address, "Київ, UA");
        assert!(gz.resolve("Atlantis").is_none());
    }

    #[test]
    fn test_split_country() {
        assert_eq!(split_country("Kyiv, UA"), ("Kyiv", Some("UA")));
        assert_eq!(split_country("Kyiv"), ("Kyiv", None));
        assert_eq!(split_country("Rome, Italy"), ("Rome, Italy", None));
    }
}
