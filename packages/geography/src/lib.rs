#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City coordinate resolution and inter-show route metrics.
//!
//! Free-text city labels are resolved to coordinates through a
//! [`CoordinateSource`]. The built-in source is a [`CityTable`] loaded
//! from the embedded market registry (see [`registry`]), which tries an
//! ordered list of [`MatchStrategy`]s:
//!
//! 1. **Exact**: case-sensitive match on the canonical label.
//! 2. **Substring fallback**: first known label (in declaration order)
//!    containing the lowercased input.
//!
//! Route metrics (great-circle distance, drive time, fuel cost, and risk
//! flags) are computed from two resolved coordinates by the functions in
//! [`route`], using the tunable [`RouteAssumptions`].

pub mod assumptions;
pub mod registry;
pub mod resolver;
pub mod route;

pub use assumptions::RouteAssumptions;
pub use resolver::{CityEntry, CityTable};
pub use route::{compute_route, compute_route_with, haversine_miles};
pub use tour_routing_geography_models::{
    CityMatch, Coordinate, MatchStrategy, RouteMetrics, UnresolvableCity,
};

use thiserror::Error;

/// A source of coordinates for free-text city labels.
///
/// The route calculator only depends on this trait, so a geocoding
/// service can stand in for the static [`CityTable`].
pub trait CoordinateSource {
    /// Looks up the coordinate for `label`, or `None` if it is unknown.
    fn lookup(&self, label: &str) -> Option<Coordinate>;

    /// Like [`CoordinateSource::lookup`], but reports the miss as an
    /// [`UnresolvableCity`].
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvableCity`] if `label` is unknown to this source.
    fn resolve_coordinate(&self, label: &str) -> Result<Coordinate, UnresolvableCity> {
        self.lookup(label).ok_or_else(|| UnresolvableCity::new(label))
    }
}

impl<T: CoordinateSource + ?Sized> CoordinateSource for &T {
    fn lookup(&self, label: &str) -> Option<Coordinate> {
        (**self).lookup(label)
    }
}

/// Errors from loading city tables or route assumptions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A city table contained no entries.
    #[error("City table is empty")]
    EmptyTable,

    /// The same canonical label appeared more than once.
    #[error("Duplicate city label: {label:?}")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },

    /// A city entry had an out-of-range or non-finite coordinate.
    #[error("Invalid coordinate for {label:?}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// The city whose coordinate is invalid.
        label: String,
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },

    /// A route assumption was zero, negative, or non-finite.
    #[error("Invalid route assumption {field}: {value}")]
    InvalidAssumption {
        /// Name of the offending field.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}
