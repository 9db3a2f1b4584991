#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Show, tour, and profit rollup types.
//!
//! These mirror the records the host application stores for each show
//! (date, city, booking status, and money in/out). Everything derived
//! from them, [`ShowPnl`] and [`RollupResult`], is recomputed on every
//! request and never persisted by the engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Booking status of a show.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ShowStatus {
    /// Penciled in, no offer sent.
    #[default]
    Draft,
    /// Date held with the venue, not yet confirmed.
    Hold,
    /// Engagement locked in. Only these count toward recognized revenue.
    Confirmed,
    /// Called off.
    Canceled,
}

impl ShowStatus {
    /// Whether the booking is locked in.
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Whether the show is still in the booking pipeline (draft or hold).
    #[must_use]
    pub const fn is_pipeline(self) -> bool {
        matches!(self, Self::Draft | Self::Hold)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Draft, Self::Hold, Self::Confirmed, Self::Canceled]
    }
}

/// Expense categories the host application offers by default.
///
/// [`ExpenseBreakdown`] is keyed by plain strings, so categories outside
/// this list are allowed and summed like any other.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExpenseCategory {
    /// Venue rental and house fees.
    Venue,
    /// Sound, lights, and crew.
    Production,
    /// Fuel, tolls, flights.
    Travel,
    /// Lodging.
    Hotels,
    /// Advertising and promotion.
    Marketing,
    /// Anything else.
    Misc,
}

impl ExpenseCategory {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Venue,
            Self::Production,
            Self::Travel,
            Self::Hotels,
            Self::Marketing,
            Self::Misc,
        ]
    }
}

/// Named expense amounts for a single show.
///
/// Keys are unique and the set is open-ended; [`ExpenseBreakdown::total`]
/// sums every key present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseBreakdown(BTreeMap<String, f64>);

impl ExpenseBreakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets the amount for `category`, returning the previous amount.
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) -> Option<f64> {
        self.0.insert(category.into(), amount)
    }

    /// Amount recorded for `category`, if any.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    /// Iterates `(category, amount)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of every amount present.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Number of categories present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no categories are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ExpenseBreakdown {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Money in and out for a single show.
///
/// All amounts and counts are expected to be non-negative; the host
/// validates before calling the calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowFinancials {
    /// Flat guarantee paid by the promoter.
    pub guarantee: f64,
    /// Price per ticket.
    pub ticket_price: f64,
    /// Tickets sold. May exceed `capacity`.
    pub sold_count: u32,
    /// Venue capacity.
    pub capacity: u32,
    /// Itemized expenses.
    #[serde(default)]
    pub expenses: ExpenseBreakdown,
    /// Merchandise sales.
    pub merch_sales: f64,
}

/// Profit and loss for a single show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowPnl {
    /// `sold_count * ticket_price`.
    pub ticket_revenue: f64,
    /// Guarantee plus ticket revenue plus merch.
    pub total_revenue: f64,
    /// Sum of all expense categories.
    pub total_expenses: f64,
    /// Revenue minus expenses. May be negative.
    pub net_profit: f64,
    /// Tickets sold over capacity, when capacity is known. Above 1.0 on
    /// an oversold show.
    pub sell_through: Option<f64>,
}

/// A single show on a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Show identifier.
    pub id: String,
    /// Owning tour. Filled in from the tour when omitted.
    #[serde(default)]
    pub tour_id: String,
    /// Calendar day of the show.
    pub date: NaiveDate,
    /// Free-text city label, e.g. "Seattle, WA".
    pub city: String,
    /// Booking status.
    #[serde(default)]
    pub status: ShowStatus,
    /// Money in and out.
    pub financials: ShowFinancials,
}

/// A tour: one artist's ordered run of shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Tour identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Artist the tour belongs to.
    pub artist: String,
    /// Shows owned by this tour.
    #[serde(default)]
    pub shows: Vec<Show>,
}

impl Tour {
    /// Sets every show's `tour_id` to this tour's id.
    pub fn assign_show_tour_ids(&mut self) {
        for show in &mut self.shows {
            show.tour_id.clone_from(&self.id);
        }
    }

    /// Shows ordered by date. Shows on the same day keep their stored
    /// order.
    #[must_use]
    pub fn shows_by_date(&self) -> Vec<&Show> {
        let mut shows: Vec<&Show> = self.shows.iter().collect();
        shows.sort_by_key(|s| s.date);
        shows
    }

    /// First and last show dates, or `None` for an empty tour.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.shows.iter().map(|s| s.date).min()?;
        let last = self.shows.iter().map(|s| s.date).max()?;
        Some((first, last))
    }
}

/// Financial totals across a set of shows.
///
/// Rollups combine associatively, so totals computed over pages of shows
/// can be merged with [`RollupResult::combine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupResult {
    /// Sum of show revenue.
    pub total_revenue: f64,
    /// Sum of show expenses.
    pub total_expenses: f64,
    /// `total_revenue - total_expenses`.
    pub net_profit: f64,
    /// Number of shows rolled up.
    pub show_count: u64,
}

impl RollupResult {
    /// A single-show rollup.
    #[must_use]
    pub fn from_pnl(pnl: &ShowPnl) -> Self {
        Self {
            total_revenue: pnl.total_revenue,
            total_expenses: pnl.total_expenses,
            net_profit: pnl.total_revenue - pnl.total_expenses,
            show_count: 1,
        }
    }

    /// Merges two rollups.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        let total_revenue = self.total_revenue + other.total_revenue;
        let total_expenses = self.total_expenses + other.total_expenses;

        Self {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            show_count: self.show_count + other.show_count,
        }
    }
}

impl std::iter::Sum for RollupResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::combine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: &str, date: &str) -> Show {
        Show {
            id: id.to_string(),
            tour_id: String::new(),
            date: date.parse().unwrap(),
            city: "Seattle, WA".to_string(),
            status: ShowStatus::Confirmed,
            financials: ShowFinancials::default(),
        }
    }

    #[test]
    fn expense_total_includes_unknown_categories() {
        let venue: &str = ExpenseCategory::Venue.as_ref();
        let expenses: ExpenseBreakdown = [
            (venue, 200.0),
            ("catering", 75.0),
            ("visa fees", 25.0),
        ]
        .into_iter()
        .collect();

        assert!((expenses.total() - 300.0).abs() < f64::EPSILON);
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses.get("catering"), Some(75.0));
    }

    #[test]
    fn expense_breakdown_deserializes_as_plain_map() {
        let expenses: ExpenseBreakdown =
            serde_json::from_str(r#"{"venue": 200, "production": 300, "green room": 40}"#)
                .unwrap();
        assert!((expenses.total() - 540.0).abs() < f64::EPSILON);
    }

    #[test]
    fn financials_reject_non_numeric_fields() {
        let result: Result<ShowFinancials, _> = serde_json::from_str(
            r#"{"guarantee": "lots", "ticketPrice": 25, "soldCount": 1,
                "capacity": 1, "merchSales": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn financials_reject_negative_counts() {
        let result: Result<ShowFinancials, _> = serde_json::from_str(
            r#"{"guarantee": 0, "ticketPrice": 25, "soldCount": -3,
                "capacity": 1, "merchSales": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("confirmed".parse::<ShowStatus>().ok(), Some(ShowStatus::Confirmed));
        assert_eq!("HOLD".parse::<ShowStatus>().ok(), Some(ShowStatus::Hold));
        assert!(ShowStatus::Hold.is_pipeline());
        assert!(!ShowStatus::Canceled.is_pipeline());
        assert!(!ShowStatus::Canceled.is_confirmed());
    }

    #[test]
    fn shows_by_date_is_stable() {
        let tour = Tour {
            id: "t1".to_string(),
            name: "Spring".to_string(),
            artist: "A".to_string(),
            shows: vec![
                show("c", "2025-04-03"),
                show("a", "2025-04-01"),
                show("b1", "2025-04-02"),
                show("b2", "2025-04-02"),
            ],
        };

        let ids: Vec<&str> = tour.shows_by_date().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b1", "b2", "c"]);

        let (first, last) = tour.date_span().unwrap();
        assert_eq!(first.to_string(), "2025-04-01");
        assert_eq!(last.to_string(), "2025-04-03");
    }

    #[test]
    fn assigns_tour_ids() {
        let mut tour = Tour {
            id: "t9".to_string(),
            name: "Fall".to_string(),
            artist: "B".to_string(),
            shows: vec![show("x", "2025-10-01")],
        };
        tour.assign_show_tour_ids();
        assert_eq!(tour.shows[0].tour_id, "t9");
    }

    #[test]
    fn combine_recomputes_net_profit() {
        let a = RollupResult {
            total_revenue: 100.0,
            total_expenses: 30.0,
            net_profit: 70.0,
            show_count: 1,
        };
        let b = RollupResult {
            total_revenue: 50.0,
            total_expenses: 80.0,
            net_profit: -30.0,
            show_count: 2,
        };

        let merged = a.combine(b);
        assert!((merged.net_profit - 40.0).abs() < f64::EPSILON);
        assert_eq!(merged.show_count, 3);
        assert_eq!([a, b].into_iter().sum::<RollupResult>(), merged);
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: RollupResult = std::iter::empty().sum();
        assert_eq!(total, RollupResult::default());
    }
}
