//! Place-name resolution with a permanent on-disk cache.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::Locations;
use crate::error::Result;
use crate::models::Coordinate;

/// A successful lookup: where the place is and its address.
#[derive(Debug, Clone, PartialEq)]
pub struct Geocoded {
    /// Position of the place.
    pub coordinate: Coordinate,
    /// Human-readable address.
    pub address: String,
}

/// Resolves a place name to a position.
///
/// Returns `None` when the place is unknown; lookups never fail loudly.
pub trait GeocodeResolver {
    /// Looks up `place`.
    fn resolve(&self, place: &str) -> Option<Geocoded>;
}

impl<F> GeocodeResolver for F
where
    F: Fn(&str) -> Option<Geocoded>,
{
    fn resolve(&self, place: &str) -> Option<Geocoded> {
        self(place)
    }
}

/// JSON file mapping a place-name list to its resolved [`Locations`].
///
/// Entries never expire: once a list has been resolved it is served from the
/// cache for good. The file is read by [`GeocodeCache::open`] and written by
/// [`GeocodeCache::save`].
#[derive(Debug)]
pub struct GeocodeCache {
    path: PathBuf,
    entries: HashMap<String, Locations>,
    dirty: bool,
}

impl GeocodeCache {
    /// Opens the cache at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Cached locations for exactly this list of place names.
    pub fn get(&self, place_names: &[String]) -> Option<&Locations> {
        self.entries.get(&Self::key(place_names))
    }

    /// Stores the locations resolved for `place_names`.
    pub fn insert(&mut self, place_names: &[String], locations: Locations) {
        self.entries.insert(Self::key(place_names), locations);
        self.dirty = true;
    }

    /// Number of cached lists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the cache to disk if it changed since it was opened.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        fs::write(&self.path, serde_json::to_string(&self.entries)?)?;
        self.dirty = false;
        Ok(())
    }

    fn key(place_names: &[String]) -> String {
        place_names.join("\n")
    }
}

/// A resolver wrapped in a [`GeocodeCache`].
///
/// # Examples
///
/// ```
/// use u_ants::geo::{CachedGeocoder, GeocodeCache, Geocoded};
/// use u_ants::models::Coordinate;
///
/// let dir = std::env::temp_dir().join("u-ants-doc-cache.json");
/// # let _ = std::fs::remove_file(&dir);
/// let resolver = |place: &str| {
///     (place == "Kyiv").then(|| Geocoded {
///         coordinate: Coordinate::new(50.45, 30.52).unwrap(),
///         address: "Kyiv, Ukraine".to_string(),
///     })
/// };
/// let mut geocoder = CachedGeocoder::new(resolver, GeocodeCache::open(&dir).unwrap());
/// let names = vec!["Kyiv".to_string(), "Atlantis".to_string()];
/// let locations = geocoder.load_locations(&names);
/// assert_eq!(locations.len(), 1);
/// # let _ = std::fs::remove_file(&dir);
/// ```
pub struct CachedGeocoder<R> {
    resolver: R,
    cache: GeocodeCache,
}

impl<R: GeocodeResolver> CachedGeocoder<R> {
    /// Wraps `resolver` with `cache`.
    pub fn new(resolver: R, cache: GeocodeCache) -> Self {
        Self { resolver, cache }
    }

    /// Resolves every place name, skipping the ones the resolver does not know.
    ///
    /// A list seen before is answered from the cache without calling the
    /// resolver.
    pub fn load_locations(&mut self, place_names: &[String]) -> Locations {
        if let Some(cached) = self.cache.get(place_names) {
            return cached.clone();
        }
        let mut locations = Locations::new();
        for place in place_names {
            if let Some(found) = self.resolver.resolve(place) {
                locations.insert(found.coordinate, place.as_str(), found.address);
            }
        }
        self.cache.insert(place_names, locations.clone());
        locations
    }

    /// The underlying cache.
    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    /// Persists the cache.
    pub fn save(&mut self) -> Result<()> {
        self.cache.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl GeocodeResolver for CountingResolver {
        fn resolve(&self, place: &str) -> Option<Geocoded> {
            self.calls.set(self.calls.get() + 1);
            match place {
                "Odesa" => Some(Geocoded {
                    coordinate: coord(46.48, 30.72),
                    address: "Odesa, Ukraine".to_string(),
                }),
                "Lviv" => Some(Geocoded {
                    coordinate: coord(49.84, 24.03),
                    address: "Lviv, Ukraine".to_string(),
                }),
                _ => None,
            }
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_failed_lookups_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = GeocodeCache::open(dir.path().join("cache.json")).expect("open");
        let mut geocoder = CachedGeocoder::new(CountingResolver { calls: Cell::new(0) }, cache);
        let locations = geocoder.load_locations(&names(&["Odesa", "Nowhere", "Lviv"]));
        assert_eq!(locations.len(), 2);
        assert_eq!(locations.at(0).expect("present").place, "Odesa");
        assert_eq!(locations.at(1).expect("present").address, "Lviv, Ukraine");
    }

    #[test]
    fn test_second_load_served_from_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = GeocodeCache::open(dir.path().join("cache.json")).expect("open");
        let mut geocoder = CachedGeocoder::new(CountingResolver { calls: Cell::new(0) }, cache);
        let list = names(&["Odesa", "Lviv"]);
        let first = geocoder.load_locations(&list);
        let second = geocoder.load_locations(&list);
        assert_eq!(first, second);
        assert_eq!(geocoder.resolver.calls.get(), 2);
    }

    #[test]
    fn test_cache_persists_across_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        let list = names(&["Odesa", "Lviv"]);
        {
            let cache = GeocodeCache::open(&path).expect("open");
            let mut geocoder = CachedGeocoder::new(CountingResolver { calls: Cell::new(0) }, cache);
            geocoder.load_locations(&list);
            geocoder.save().expect("save");
        }
        let cache = GeocodeCache::open(&path).expect("reopen");
        assert_eq!(cache.len(), 1);
        let mut geocoder = CachedGeocoder::new(CountingResolver { calls: Cell::new(0) }, cache);
        let locations = geocoder.load_locations(&list);
        assert_eq!(locations.len(), 2);
        assert_eq!(geocoder.resolver.calls.get(), 0);
    }

    #[test]
    fn test_different_list_is_a_different_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = GeocodeCache::open(dir.path().join("cache.json")).expect("open");
        let mut geocoder = CachedGeocoder::new(CountingResolver { calls: Cell::new(0) }, cache);
        geocoder.load_locations(&names(&["Odesa"]));
        geocoder.load_locations(&names(&["Odesa", "Lviv"]));
        assert_eq!(geocoder.cache().len(), 2);
        assert_eq!(geocoder.resolver.calls.get(), 3);
    }

    #[test]
    fn test_save_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");
        let mut cache = GeocodeCache::open(&path).expect("open");
        cache.save().expect("save");
        assert!(!path.exists());
    }
}
