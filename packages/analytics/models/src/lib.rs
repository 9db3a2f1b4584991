#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for tour rollups and itinerary checks.
//!
//! Everything here is derived from a tour's shows on demand. The host
//! renders these directly (itinerary conflict indicators, revenue cards)
//! or caches them at its own discretion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use tour_routing_finance_models::RollupResult;
use tour_routing_geography_models::RouteMetrics;

/// Severity of a warning between two consecutive shows.
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
pub enum RouteWarningLevel {
    /// One of the cities could not be located; distance unknown.
    Undetermined,
    /// Drive exceeds the long-drive threshold.
    LongDrive,
    /// Drive cannot reasonably be made between shows.
    Impossible,
}

/// Result of routing between two consecutive shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentOutcome {
    /// Both cities resolved.
    Resolved(RouteMetrics),
    /// A city could not be resolved, so no distance exists.
    Undetermined {
        /// The label that failed to resolve.
        city: String,
    },
}

/// The drive between two consecutive shows of a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    /// Show the drive starts from.
    pub from_show_id: String,
    /// Show the drive ends at.
    pub to_show_id: String,
    /// City label of the departure show.
    pub from_city: String,
    /// City label of the arrival show.
    pub to_city: String,
    /// Metrics, or the reason none exist.
    pub outcome: SegmentOutcome,
}

impl RouteSegment {
    /// Route metrics if both cities resolved.
    #[must_use]
    pub const fn metrics(&self) -> Option<&RouteMetrics> {
        match &self.outcome {
            SegmentOutcome::Resolved(metrics) => Some(metrics),
            SegmentOutcome::Undetermined { .. } => None,
        }
    }

    /// The most severe warning for this segment, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<RouteWarningLevel> {
        match &self.outcome {
            SegmentOutcome::Resolved(m) if m.is_impossible => Some(RouteWarningLevel::Impossible),
            SegmentOutcome::Resolved(m) if m.is_long_drive => Some(RouteWarningLevel::LongDrive),
            SegmentOutcome::Resolved(_) => None,
            SegmentOutcome::Undetermined { .. } => Some(RouteWarningLevel::Undetermined),
        }
    }
}

/// Shows that are not yet confirmed, kept apart from recognized revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    /// Rollup over draft and held shows. Potential, not recognized, revenue.
    pub pipeline: RollupResult,
    /// Number of draft shows.
    pub draft_count: u64,
    /// Number of held shows.
    pub hold_count: u64,
    /// Number of canceled shows. These contribute to no revenue figure.
    pub canceled_count: u64,
}

/// Recognized revenue alongside pipeline statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    /// Rollup over confirmed shows only.
    pub confirmed: RollupResult,
    /// Draft, hold, and canceled statistics.
    pub pipeline: PipelineStats,
}

/// Financial and routing overview of a single tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSummary {
    /// Tour identifier.
    pub tour_id: String,
    /// Tour display name.
    pub tour_name: String,
    /// Artist the tour belongs to.
    pub artist: String,
    /// Total shows on the tour, any status.
    pub show_count: u64,
    /// Date of the earliest show.
    pub first_date: Option<NaiveDate>,
    /// Date of the latest show.
    pub last_date: Option<NaiveDate>,
    /// Confirmed revenue and pipeline.
    pub revenue: RevenueReport,
    /// Sum of resolved segment distances, unrounded.
    pub total_distance_miles: f64,
    /// Sum of resolved segment drive times, unrounded.
    pub total_drive_time_hours: f64,
    /// Sum of resolved segment fuel estimates.
    pub total_gas_cost: f64,
    /// Segments flagged as long drives (impossible ones included).
    pub long_drive_count: u64,
    /// Segments flagged as impossible.
    pub impossible_count: u64,
    /// Segments with an unresolvable city.
    pub undetermined_count: u64,
    /// Every segment with a warning, in itinerary order.
    pub warnings: Vec<RouteSegment>,
    /// Human-readable one-line description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(outcome: SegmentOutcome) -> RouteSegment {
        RouteSegment {
            from_show_id: "s1".to_string(),
            to_show_id: "s2".to_string(),
            from_city: "Seattle, WA".to_string(),
            to_city: "Portland, OR".to_string(),
            outcome,
        }
    }

    fn metrics(long: bool, impossible: bool) -> RouteMetrics {
        RouteMetrics {
            distance_miles: 100.0,
            drive_time_hours: 1.8,
            estimated_gas_cost: 33.0,
            is_long_drive: long,
            is_impossible: impossible,
        }
    }

    #[test]
    fn warning_prefers_most_severe() {
        let s = segment(SegmentOutcome::Resolved(metrics(true, true)));
        assert_eq!(s.warning(), Some(RouteWarningLevel::Impossible));

        let s = segment(SegmentOutcome::Resolved(metrics(true, false)));
        assert_eq!(s.warning(), Some(RouteWarningLevel::LongDrive));

        let s = segment(SegmentOutcome::Resolved(metrics(false, false)));
        assert_eq!(s.warning(), None);
        assert!(s.metrics().is_some());
    }

    #[test]
    fn undetermined_segment_has_no_metrics() {
        let s = segment(SegmentOutcome::Undetermined {
            city: "Atlantis".to_string(),
        });
        assert_eq!(s.warning(), Some(RouteWarningLevel::Undetermined));
        assert!(s.metrics().is_none());
    }

    #[test]
    fn outcome_serializes_with_type_tag() {
        let s = segment(SegmentOutcome::Undetermined {
            city: "Atlantis".to_string(),
        });
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["outcome"]["type"], "undetermined");
        assert_eq!(json["outcome"]["city"], "Atlantis");
        assert_eq!(json["fromShowId"], "s1");

        let s = segment(SegmentOutcome::Resolved(metrics(false, false)));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["outcome"]["type"], "resolved");
        assert_eq!(json["outcome"]["distanceMiles"], 100.0);
    }
}
