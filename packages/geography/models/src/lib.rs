#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate and route metric types.
//!
//! These types describe where a show happens and what it costs to get
//! from one show to the next. They are pure values derived on demand and
//! are never persisted by the engine.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90.
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Estimated travel between two show cities.
///
/// `distance_miles` and `drive_time_hours` are unrounded so that totals
/// across a multi-show route do not accumulate rounding error. Use
/// [`RouteMetrics::display_distance_miles`] and
/// [`RouteMetrics::display_drive_time_hours`] when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    /// Great-circle distance in miles.
    pub distance_miles: f64,
    /// Estimated drive time in hours.
    pub drive_time_hours: f64,
    /// Estimated fuel cost, rounded to whole currency units.
    pub estimated_gas_cost: f64,
    /// Drive time exceeds the long-drive threshold.
    pub is_long_drive: bool,
    /// Drive time exceeds the impossible-drive threshold.
    pub is_impossible: bool,
}

impl RouteMetrics {
    /// Distance rounded to the nearest mile.
    #[must_use]
    pub fn display_distance_miles(&self) -> f64 {
        self.distance_miles.round()
    }

    /// Drive time rounded to one decimal place.
    #[must_use]
    pub fn display_drive_time_hours(&self) -> f64 {
        (self.drive_time_hours * 10.0).round() / 10.0
    }
}

/// How a free-text city label is matched against a table of known cities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStrategy {
    /// Case-sensitive comparison against the canonical label.
    Exact,
    /// Case-insensitive search for the first known label containing the
    /// input.
    SubstringFallback,
}

impl MatchStrategy {
    /// The default resolution order: exact first, then substring.
    #[must_use]
    pub const fn default_order() -> &'static [Self] {
        &[Self::Exact, Self::SubstringFallback]
    }
}

/// A successfully resolved city label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMatch {
    /// The canonical label of the matched known city.
    pub label: String,
    /// Coordinate of the matched city.
    pub coordinate: Coordinate,
    /// Which strategy produced the match.
    pub strategy: MatchStrategy,
}

/// A city label that could not be matched to any known coordinate.
///
/// This is an expected outcome, not a failure: callers must render the
/// affected route as "distance unknown" rather than as zero.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Unresolvable city: {label:?}")]
pub struct UnresolvableCity {
    /// The label as supplied by the caller.
    pub label: String,
}

impl UnresolvableCity {
    /// Creates a new unresolvable-city outcome for `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
