//! Route-risk checks between consecutive shows.

use tour_routing_analytics_models::{RouteSegment, SegmentOutcome};
use tour_routing_finance_models::{Show, ShowStatus, Tour};
use tour_routing_geography::{CoordinateSource, RouteAssumptions, compute_route_with};

/// Routes each consecutive pair of a date-sorted show sequence with the
/// default [`RouteAssumptions`].
///
/// Returns `n - 1` segments for `n` shows, and none for zero or one.
#[must_use]
pub fn route_segments<S: CoordinateSource + ?Sized>(
    source: &S,
    shows: &[&Show],
) -> Vec<RouteSegment> {
    route_segments_with(source, shows, &RouteAssumptions::default())
}

/// Routes each consecutive pair of a date-sorted show sequence.
///
/// Pairs whose cities cannot be resolved produce an
/// [`SegmentOutcome::Undetermined`] segment rather than being dropped.
#[must_use]
pub fn route_segments_with<S: CoordinateSource + ?Sized>(
    source: &S,
    shows: &[&Show],
    assumptions: &RouteAssumptions,
) -> Vec<RouteSegment> {
    shows
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);

            let outcome = match compute_route_with(source, &from.city, &to.city, assumptions) {
                Ok(metrics) => SegmentOutcome::Resolved(metrics),
                Err(unresolved) => {
                    log::warn!(
                        "Distance unknown between shows {} and {}: {unresolved}",
                        from.id,
                        to.id
                    );
                    SegmentOutcome::Undetermined {
                        city: unresolved.label,
                    }
                }
            };

            RouteSegment {
                from_show_id: from.id.clone(),
                to_show_id: to.id.clone(),
                from_city: from.city.clone(),
                to_city: to.city.clone(),
                outcome,
            }
        })
        .collect()
}

/// The itinerary a tour actually travels: non-canceled shows in date
/// order.
#[must_use]
pub fn itinerary(tour: &Tour) -> Vec<&Show> {
    let mut shows = tour.shows_by_date();
    shows.retain(|s| s.status != ShowStatus::Canceled);
    shows
}

/// Routes a tour's itinerary (see [`itinerary`]) with the given
/// assumptions.
///
/// Canceled shows are not routed, so a tour with `n` shows of which `k`
/// are canceled yields `max(0, n - k - 1)` segments, not `n - 1`.
#[must_use]
pub fn tour_route_segments<S: CoordinateSource + ?Sized>(
    source: &S,
    tour: &Tour,
    assumptions: &RouteAssumptions,
) -> Vec<RouteSegment> {
    route_segments_with(source, &itinerary(tour), assumptions)
}

/// Segments carrying a warning, in itinerary order.
#[must_use]
pub fn route_warnings(segments: &[RouteSegment]) -> Vec<&RouteSegment> {
    segments.iter().filter(|s| s.warning().is_some()).collect()
}
