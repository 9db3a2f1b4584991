//! Great-circle route metrics between two show cities.

use tour_routing_geography_models::{Coordinate, RouteMetrics, UnresolvableCity};

use crate::{CoordinateSource, RouteAssumptions};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle (haversine) distance in miles between two coordinates.
#[must_use]
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    // Rounding can push `a` just past 1.0 for near-antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Derives drive time, fuel cost, and risk flags from a raw distance.
#[must_use]
pub fn metrics_for_distance(distance_miles: f64, assumptions: &RouteAssumptions) -> RouteMetrics {
    let drive_time_hours = assumptions.drive_time_hours(distance_miles);

    RouteMetrics {
        distance_miles,
        drive_time_hours,
        estimated_gas_cost: assumptions.gas_cost(distance_miles),
        is_long_drive: assumptions.is_long_drive(drive_time_hours),
        is_impossible: assumptions.is_impossible(drive_time_hours),
    }
}

/// Computes route metrics between two city labels with the default
/// [`RouteAssumptions`].
///
/// # Errors
///
/// Returns [`UnresolvableCity`] for the first label `source` cannot
/// resolve. An unresolvable route has no distance; it is never zero.
pub fn compute_route<S: CoordinateSource + ?Sized>(
    source: &S,
    city_a: &str,
    city_b: &str,
) -> Result<RouteMetrics, UnresolvableCity> {
    compute_route_with(source, city_a, city_b, &RouteAssumptions::default())
}

/// Computes route metrics between two city labels.
///
/// The result is symmetric: swapping `city_a` and `city_b` yields the
/// same metrics.
///
/// # Errors
///
/// Returns [`UnresolvableCity`] for the first label `source` cannot
/// resolve.
pub fn compute_route_with<S: CoordinateSource + ?Sized>(
    source: &S,
    city_a: &str,
    city_b: &str,
    assumptions: &RouteAssumptions,
) -> Result<RouteMetrics, UnresolvableCity> {
    let from = source.resolve_coordinate(city_a)?;
    let to = source.resolve_coordinate(city_b)?;

    let metrics = metrics_for_distance(haversine_miles(from, to), assumptions);
    log::debug!(
        "Route {city_a:?} -> {city_b:?}: {:.1} mi, {:.2} h",
        metrics.distance_miles,
        metrics.drive_time_hours
    );

    Ok(metrics)
}
