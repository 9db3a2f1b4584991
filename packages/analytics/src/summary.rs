//! Per-tour financial and routing overview.

use tour_routing_analytics_models::{RouteWarningLevel, TourSummary};
use tour_routing_finance_models::Tour;
use tour_routing_geography::{CoordinateSource, RouteAssumptions};

use crate::rollup::revenue_report;
use crate::routing::tour_route_segments;

/// Summarizes a tour with the default [`RouteAssumptions`].
#[must_use]
pub fn summarize_tour<S: CoordinateSource + ?Sized>(source: &S, tour: &Tour) -> TourSummary {
    summarize_tour_with(source, tour, &RouteAssumptions::default())
}

/// Summarizes a tour: revenue report over all shows, plus route totals and
/// warnings over its itinerary.
///
/// Route totals only include resolved segments; undetermined ones are
/// counted separately and never contribute a zero distance.
#[must_use]
pub fn summarize_tour_with<S: CoordinateSource + ?Sized>(
    source: &S,
    tour: &Tour,
    assumptions: &RouteAssumptions,
) -> TourSummary {
    let segments = tour_route_segments(source, tour, assumptions);

    let mut total_distance_miles = 0.0;
    let mut total_drive_time_hours = 0.0;
    let mut total_gas_cost = 0.0;
    let mut long_drive_count = 0;
    let mut impossible_count = 0;
    let mut undetermined_count = 0;

    for segment in &segments {
        if let Some(metrics) = segment.metrics() {
            total_distance_miles += metrics.distance_miles;
            total_drive_time_hours += metrics.drive_time_hours;
            total_gas_cost += metrics.estimated_gas_cost;
            long_drive_count += u64::from(metrics.is_long_drive);
            impossible_count += u64::from(metrics.is_impossible);
        }
        if segment.warning() == Some(RouteWarningLevel::Undetermined) {
            undetermined_count += 1;
        }
    }

    let revenue = revenue_report(&tour.shows);
    let span = tour.date_span();
    let show_count = tour.shows.len() as u64;

    let description = describe_tour(tour, show_count, span, impossible_count);

    TourSummary {
        tour_id: tour.id.clone(),
        tour_name: tour.name.clone(),
        artist: tour.artist.clone(),
        show_count,
        first_date: span.map(|(first, _)| first),
        last_date: span.map(|(_, last)| last),
        revenue,
        total_distance_miles,
        total_drive_time_hours,
        total_gas_cost,
        long_drive_count,
        impossible_count,
        undetermined_count,
        warnings: segments
            .into_iter()
            .filter(|s| s.warning().is_some())
            .collect(),
        description,
    }
}

fn describe_tour(
    tour: &Tour,
    show_count: u64,
    span: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    impossible_count: u64,
) -> String {
    let plural = if show_count == 1 { "" } else { "s" };
    let mut out = format!("{} - {}: {show_count} show{plural}", tour.artist, tour.name);

    if let Some((first, last)) = span {
        if first == last {
            out.push_str(&format!(" on {first}"));
        } else {
            out.push_str(&format!(" from {first} to {last}"));
        }
    }

    if impossible_count > 0 {
        out.push_str(&format!(", {impossible_count} impossible drive(s)"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_routing_finance_models::{Show, ShowFinancials, ShowStatus};
    use tour_routing_geography::{CityTable, compute_route};

    fn show(id: &str, date: &str, city: &str, status: ShowStatus) -> Show {
        Show {
            id: id.to_string(),
            tour_id: "t1".to_string(),
            date: date.parse().unwrap(),
            city: city.to_string(),
            status,
            financials: ShowFinancials {
                guarantee: 1_000.0,
                ticket_price: 10.0,
                sold_count: 50,
                capacity: 100,
                expenses: [("venue", 300.0)].into_iter().collect(),
                merch_sales: 0.0,
            },
        }
    }

    fn west_coast_tour() -> Tour {
        Tour {
            id: "t1".to_string(),
            name: "West Coast".to_string(),
            artist: "The Examples".to_string(),
            shows: vec![
                show("s1", "2025-05-01", "Seattle, WA", ShowStatus::Confirmed),
                show("s2", "2025-05-02", "Portland, OR", ShowStatus::Confirmed),
                show("s3", "2025-05-04", "San Francisco, CA", ShowStatus::Hold),
                show("s4", "2025-05-05", "Atlantis", ShowStatus::Draft),
                show("s5", "2025-05-06", "Los Angeles, CA", ShowStatus::Canceled),
            ],
        }
    }

    #[test]
    fn totals_cover_resolved_segments_only() {
        let table = CityTable::builtin();
        let summary = summarize_tour(&table, &west_coast_tour());

        let leg1 = compute_route(&table, "Seattle, WA", "Portland, OR").unwrap();
        let leg2 = compute_route(&table, "Portland, OR", "San Francisco, CA").unwrap();

        assert!(
            (summary.total_distance_miles - (leg1.distance_miles + leg2.distance_miles)).abs()
                < 1e-9
        );
        assert!(
            (summary.total_gas_cost - (leg1.estimated_gas_cost + leg2.estimated_gas_cost)).abs()
                < 1e-9
        );
        assert_eq!(summary.undetermined_count, 1);
        assert_eq!(summary.impossible_count, 0);
        assert_eq!(summary.long_drive_count, 1);
        assert_eq!(summary.warnings.len(), 2);
    }

    #[test]
    fn revenue_is_split_by_status() {
        let table = CityTable::builtin();
        let summary = summarize_tour(&table, &west_coast_tour());

        assert_eq!(summary.show_count, 5);
        assert_eq!(summary.revenue.confirmed.show_count, 2);
        // 2 * (1000 + 500)
        assert!((summary.revenue.confirmed.total_revenue - 3_000.0).abs() < f64::EPSILON);
        assert!((summary.revenue.confirmed.net_profit - 2_400.0).abs() < f64::EPSILON);
        assert_eq!(summary.revenue.pipeline.hold_count, 1);
        assert_eq!(summary.revenue.pipeline.draft_count, 1);
        assert_eq!(summary.revenue.pipeline.canceled_count, 1);
    }

    #[test]
    fn describes_date_span() {
        let table = CityTable::builtin();
        let summary = summarize_tour(&table, &west_coast_tour());

        assert_eq!(summary.first_date.unwrap().to_string(), "2025-05-01");
        assert_eq!(summary.last_date.unwrap().to_string(), "2025-05-06");
        assert_eq!(
            summary.description,
            "The Examples - West Coast: 5 shows from 2025-05-01 to 2025-05-06"
        );
    }

    #[test]
    fn empty_tour_is_all_zero() {
        let table = CityTable::builtin();
        let tour = Tour {
            id: "t0".to_string(),
            name: "Unbooked".to_string(),
            artist: "Nobody".to_string(),
            shows: Vec::new(),
        };

        let summary = summarize_tour(&table, &tour);
        assert_eq!(summary.show_count, 0);
        assert!(summary.first_date.is_none());
        assert!(summary.warnings.is_empty());
        assert!(summary.total_distance_miles.abs() < f64::EPSILON);
        assert_eq!(summary.description, "Nobody - Unbooked: 0 shows");
    }
}
