//! Financial rollups across show lists, groups, and booking statuses.
//!
//! Rollups are sums, so they are order-independent and combine
//! associatively: `rollup_shows(A ++ B) == rollup_shows(A).combine(rollup_shows(B))`.

use std::collections::BTreeMap;

use tour_routing_analytics_models::{PipelineStats, RevenueReport};
use tour_routing_finance::compute_show_pnl;
use tour_routing_finance_models::{RollupResult, Show, ShowStatus, Tour};

fn rollup_iter<'a>(shows: impl IntoIterator<Item = &'a Show>) -> RollupResult {
    shows
        .into_iter()
        .map(|show| RollupResult::from_pnl(&compute_show_pnl(&show.financials)))
        .sum()
}

/// Rolls up every show regardless of status.
///
/// An empty list yields a zero rollup.
#[must_use]
pub fn rollup_shows(shows: &[Show]) -> RollupResult {
    rollup_iter(shows)
}

/// Buckets shows by `key_fn` and rolls up each bucket independently.
#[must_use]
pub fn rollup_by_group<F>(shows: &[Show], key_fn: F) -> BTreeMap<String, RollupResult>
where
    F: Fn(&Show) -> String,
{
    let mut groups: BTreeMap<String, RollupResult> = BTreeMap::new();

    for show in shows {
        let single = rollup_iter(std::iter::once(show));
        let entry = groups.entry(key_fn(show)).or_default();
        *entry = entry.combine(single);
    }

    groups
}

/// Shows whose booking is confirmed.
#[must_use]
pub fn filter_confirmed(shows: &[Show]) -> Vec<&Show> {
    shows.iter().filter(|s| s.status.is_confirmed()).collect()
}

/// Recognized revenue: rolls up confirmed shows only.
#[must_use]
pub fn rollup_confirmed(shows: &[Show]) -> RollupResult {
    rollup_iter(filter_confirmed(shows))
}

/// Confirmed revenue with draft, hold, and canceled shows reported
/// separately.
///
/// Draft and held shows form the pipeline rollup. Canceled shows are only
/// counted.
#[must_use]
pub fn revenue_report(shows: &[Show]) -> RevenueReport {
    let mut report = RevenueReport::default();

    for show in shows {
        let single = rollup_iter(std::iter::once(show));
        match show.status {
            ShowStatus::Confirmed => report.confirmed = report.confirmed.combine(single),
            ShowStatus::Draft | ShowStatus::Hold => {
                let stats: &mut PipelineStats = &mut report.pipeline;
                stats.pipeline = stats.pipeline.combine(single);
                if show.status == ShowStatus::Draft {
                    stats.draft_count += 1;
                } else {
                    stats.hold_count += 1;
                }
            }
            ShowStatus::Canceled => report.pipeline.canceled_count += 1,
        }
    }

    report
}

/// Confirmed revenue per artist across all of their tours.
#[must_use]
pub fn rollup_roster(tours: &[Tour]) -> BTreeMap<String, RollupResult> {
    let mut roster: BTreeMap<String, RollupResult> = BTreeMap::new();

    for tour in tours {
        let entry = roster.entry(tour.artist.clone()).or_default();
        *entry = entry.combine(rollup_confirmed(&tour.shows));
    }

    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_routing_finance_models::ShowFinancials;

    fn show(id: &str, tour_id: &str, status: ShowStatus, guarantee: f64, venue: f64) -> Show {
        Show {
            id: id.to_string(),
            tour_id: tour_id.to_string(),
            date: "2025-06-01".parse().unwrap(),
            city: "Seattle, WA".to_string(),
            status,
            financials: ShowFinancials {
                guarantee,
                ticket_price: 20.0,
                sold_count: 100,
                capacity: 200,
                expenses: [("venue", venue), ("misc", 25.0)].into_iter().collect(),
                merch_sales: 300.0,
            },
        }
    }

    fn sample_shows() -> Vec<Show> {
        vec![
            show("s1", "t1", ShowStatus::Confirmed, 1_000.0, 400.0),
            show("s2", "t1", ShowStatus::Confirmed, 500.0, 200.0),
            show("s3", "t2", ShowStatus::Hold, 750.0, 100.0),
            show("s4", "t2", ShowStatus::Draft, 0.0, 50.0),
            show("s5", "t2", ShowStatus::Canceled, 2_000.0, 0.0),
        ]
    }

    #[test]
    fn empty_rollup_is_zero() {
        let result = rollup_shows(&[]);
        assert_eq!(
            result,
            RollupResult {
                total_revenue: 0.0,
                total_expenses: 0.0,
                net_profit: 0.0,
                show_count: 0,
            }
        );
    }

    #[test]
    fn rollup_sums_every_show() {
        let result = rollup_shows(&sample_shows()[..2]);
        // (1000 + 2000 + 300) + (500 + 2000 + 300)
        assert!((result.total_revenue - 6_100.0).abs() < f64::EPSILON);
        // (400 + 25) + (200 + 25)
        assert!((result.total_expenses - 650.0).abs() < f64::EPSILON);
        assert!((result.net_profit - 5_450.0).abs() < f64::EPSILON);
        assert_eq!(result.show_count, 2);
    }

    #[test]
    fn rollup_is_additive() {
        let shows = sample_shows();
        let (a, b) = shows.split_at(2);

        let whole = rollup_shows(&shows);
        let left = rollup_shows(a);
        let right = rollup_shows(b);

        assert!((whole.total_revenue - (left.total_revenue + right.total_revenue)).abs() < 1e-9);
        assert!(
            (whole.total_expenses - (left.total_expenses + right.total_expenses)).abs() < 1e-9
        );
        assert_eq!(whole, left.combine(right));
    }

    #[test]
    fn rollup_ignores_order() {
        let shows = sample_shows();
        let mut reversed = shows.clone();
        reversed.reverse();
        assert_eq!(rollup_shows(&shows), rollup_shows(&reversed));
    }

    #[test]
    fn rollup_is_idempotent() {
        let shows = sample_shows();
        assert_eq!(rollup_shows(&shows), rollup_shows(&shows));
    }

    #[test]
    fn group_by_artist_matches_flat_rollup() {
        let artists: BTreeMap<&str, &str> = [("t1", "A"), ("t2", "B")].into_iter().collect();
        let shows = vec![
            show("s1", "t1", ShowStatus::Confirmed, 1_000.0, 400.0),
            show("s2", "t1", ShowStatus::Confirmed, 500.0, 200.0),
            show("s3", "t2", ShowStatus::Confirmed, 750.0, 100.0),
        ];

        let groups = rollup_by_group(&shows, |s| artists[s.tour_id.as_str()].to_string());
        let flat = rollup_shows(&shows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["A"].show_count, 2);
        assert_eq!(groups["B"].show_count, 1);
        assert_eq!(groups.values().map(|g| g.show_count).sum::<u64>(), 3);

        let combined_revenue: f64 = groups.values().map(|g| g.total_revenue).sum();
        assert!((combined_revenue - flat.total_revenue).abs() < 1e-9);
    }

    #[test]
    fn group_of_empty_list_is_empty() {
        assert!(rollup_by_group(&[], |s| s.tour_id.clone()).is_empty());
    }

    #[test]
    fn filter_confirmed_excludes_other_statuses() {
        let shows = sample_shows();
        let ids: Vec<&str> = filter_confirmed(&shows)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["s1", "s2"]);
        assert_eq!(rollup_confirmed(&shows), rollup_shows(&shows[..2]));
    }

    #[test]
    fn revenue_report_separates_pipeline() {
        let shows = sample_shows();
        let report = revenue_report(&shows);

        assert_eq!(report.confirmed.show_count, 2);
        assert!((report.confirmed.total_revenue - 6_100.0).abs() < f64::EPSILON);

        assert_eq!(report.pipeline.pipeline.show_count, 2);
        // (750 + 2000 + 300) + (0 + 2000 + 300)
        assert!((report.pipeline.pipeline.total_revenue - 5_350.0).abs() < f64::EPSILON);
        assert_eq!(report.pipeline.draft_count, 1);
        assert_eq!(report.pipeline.hold_count, 1);
        assert_eq!(report.pipeline.canceled_count, 1);
    }

    #[test]
    fn roster_rolls_up_confirmed_shows_per_artist() {
        let shows = sample_shows();
        let tours = vec![
            Tour {
                id: "t1".to_string(),
                name: "Spring".to_string(),
                artist: "A".to_string(),
                shows: shows[..2].to_vec(),
            },
            Tour {
                id: "t2".to_string(),
                name: "Summer".to_string(),
                artist: "B".to_string(),
                shows: shows[2..].to_vec(),
            },
            Tour {
                id: "t3".to_string(),
                name: "Fall".to_string(),
                artist: "A".to_string(),
                shows: vec![show("s6", "t3", ShowStatus::Confirmed, 100.0, 0.0)],
            },
        ];

        let roster = rollup_roster(&tours);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster["A"].show_count, 3);
        assert_eq!(roster["B"], RollupResult::default());
    }
}
