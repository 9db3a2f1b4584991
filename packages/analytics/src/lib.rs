#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Financial and route-risk rollups for tours.
//!
//! Each public function is a pure computation over shows the host has
//! already loaded:
//!
//! * [`rollup`] sums per-show profit and loss across show lists, groups
//!   (tour, artist), and booking statuses.
//! * [`routing`] walks a date-ordered itinerary and flags long,
//!   impossible, and undetermined drives between consecutive shows.
//! * [`summary`] combines both into a per-tour overview.
//!
//! Nothing here holds state between calls, so results can be computed
//! concurrently and cached (or not) by the host.

pub mod rollup;
pub mod routing;
pub mod summary;

pub use rollup::{
    filter_confirmed, revenue_report, rollup_by_group, rollup_confirmed, rollup_roster,
    rollup_shows,
};
pub use routing::{
    itinerary, route_segments, route_segments_with, route_warnings, tour_route_segments,
};
pub use summary::{summarize_tour, summarize_tour_with};
