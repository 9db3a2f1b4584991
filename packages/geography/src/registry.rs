//! Compile-time registry of known touring markets.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Tables are concatenated in the order listed here, which fixes the
//! iteration order used by substring matching. Adding a region requires
//! creating a TOML file in `markets/` and adding it below.

use crate::resolver::{CityEntry, CityTable};

/// Number of cities across all embedded markets. Enforced by a test.
#[cfg(test)]
const EXPECTED_CITY_COUNT: usize = 62;

/// Embedded TOML market tables.
const MARKET_TOMLS: &[(&str, &str)] = &[
    ("us", include_str!("../markets/us.toml")),
    ("canada", include_str!("../markets/canada.toml")),
];

#[derive(serde::Deserialize)]
struct MarketFile {
    name: String,
    cities: Vec<CityEntry>,
}

/// Returns every embedded city entry, in registry order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn all_cities() -> Vec<CityEntry> {
    MARKET_TOMLS
        .iter()
        .flat_map(|(name, toml_str)| {
            let file: MarketFile = toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse market table '{name}': {e}"));
            log::trace!("Loaded {} cities from {}", file.cities.len(), file.name);
            file.cities
        })
        .collect()
}

/// Builds the built-in [`CityTable`] with default strategies.
///
/// # Panics
///
/// Panics if the embedded tables are malformed or contain duplicate
/// labels.
#[must_use]
pub fn builtin_table() -> CityTable {
    CityTable::new(all_cities())
        .unwrap_or_else(|e| panic!("Invalid built-in market table: {e}"))
}
