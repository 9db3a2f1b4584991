//! Static city table with ordered matching strategies.
//!
//! A [`CityTable`] is an immutable, declaration-ordered list of known
//! city labels. It is built once (from the embedded registry or from a
//! host-supplied TOML document) and passed by reference to everything
//! that needs coordinates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tour_routing_geography_models::{CityMatch, Coordinate, MatchStrategy, UnresolvableCity};

use crate::{ConfigError, CoordinateSource};

/// Inputs shorter than this never go through substring matching, so that
/// abbreviations such as `"LA"` cannot land on an arbitrary label that
/// happens to contain those letters.
pub const DEFAULT_MIN_SUBSTRING_LEN: usize = 3;

/// A known city label and its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEntry {
    /// Canonical label, e.g. `"Seattle, WA"`.
    pub label: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl CityEntry {
    /// The entry's coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// On-disk shape of a city table TOML document.
#[derive(Debug, Deserialize)]
struct CityTableFile {
    cities: Vec<CityEntry>,
}

/// An immutable table of known cities plus the strategies used to match
/// free-text labels against it.
#[derive(Debug, Clone)]
pub struct CityTable {
    entries: Vec<CityEntry>,
    /// Lowercased labels, index-aligned with `entries`.
    folded: Vec<String>,
    strategies: Vec<MatchStrategy>,
    min_substring_len: usize,
}

impl CityTable {
    /// Builds a table from entries in the order given.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::EmptyTable`] if `entries` is empty
    /// * [`ConfigError::DuplicateLabel`] if a label repeats
    /// * [`ConfigError::InvalidCoordinate`] if a coordinate is out of range
    pub fn new(entries: Vec<CityEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    label: entry.label.clone(),
                });
            }
            if !entry.coordinate().is_valid() {
                return Err(ConfigError::InvalidCoordinate {
                    label: entry.label.clone(),
                    latitude: entry.latitude,
                    longitude: entry.longitude,
                });
            }
        }

        let folded = entries.iter().map(|e| e.label.to_lowercase()).collect();

        Ok(Self {
            entries,
            folded,
            strategies: MatchStrategy::default_order().to_vec(),
            min_substring_len: DEFAULT_MIN_SUBSTRING_LEN,
        })
    }

    /// Parses a table from a TOML document with a top-level `cities`
    /// array of `{ label, latitude, longitude }` tables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, or any error
    /// from [`CityTable::new`].
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let file: CityTableFile = toml::de::from_str(toml_str)?;
        Self::new(file.cities)
    }

    /// The built-in North American market table.
    #[must_use]
    pub fn builtin() -> Self {
        crate::registry::builtin_table()
    }

    /// Replaces the strategies tried by [`CityTable::resolve`], in order.
    #[must_use]
    pub fn with_strategies(mut self, strategies: &[MatchStrategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    /// Sets the minimum trimmed input length for substring matching.
    #[must_use]
    pub fn with_min_substring_len(mut self, len: usize) -> Self {
        self.min_substring_len = len;
        self
    }

    /// All entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[CityEntry] {
        &self.entries
    }

    /// Number of known cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `label` by trying each configured strategy in order.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvableCity`] if no strategy matches.
    pub fn resolve(&self, label: &str) -> Result<CityMatch, UnresolvableCity> {
        for &strategy in &self.strategies {
            if let Some(found) = self.match_with(strategy, label) {
                if strategy == MatchStrategy::SubstringFallback {
                    log::debug!("Fuzzy-matched city {label:?} to {:?}", found.label);
                }
                return Ok(found);
            }
        }

        Err(UnresolvableCity::new(label))
    }

    /// Applies a single strategy, ignoring the configured order.
    #[must_use]
    pub fn match_with(&self, strategy: MatchStrategy, label: &str) -> Option<CityMatch> {
        let index = match strategy {
            MatchStrategy::Exact => self.exact_index(label),
            MatchStrategy::SubstringFallback => self.substring_index(label),
        }?;

        let entry = &self.entries[index];
        Some(CityMatch {
            label: entry.label.clone(),
            coordinate: entry.coordinate(),
            strategy,
        })
    }

    fn exact_index(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }

    fn substring_index(&self, label: &str) -> Option<usize> {
        let needle = label.trim().to_lowercase();
        if needle.is_empty() || needle.chars().count() < self.min_substring_len {
            return None;
        }

        self.folded.iter().position(|known| known.contains(&needle))
    }
}

impl CoordinateSource for CityTable {
    fn lookup(&self, label: &str) -> Option<Coordinate> {
        self.resolve(label).ok().map(|m| m.coordinate)
    }
}
