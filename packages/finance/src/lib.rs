#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-show profit and loss.
//!
//! [`compute_show_pnl`] turns a [`ShowFinancials`] record into revenue,
//! expense, and profit figures. It assumes validated input: callers that
//! accept user-edited records run [`validate_financials`] first so that
//! bad data is rejected instead of silently coerced.

use thiserror::Error;
use tour_routing_finance_models::{ShowFinancials, ShowPnl};

/// Errors from validating a show's financial record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinancialsError {
    /// A monetary amount was below zero.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// The offending field or expense category.
        field: String,
        /// Supplied value.
        value: f64,
    },

    /// A monetary amount was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// The offending field or expense category.
        field: String,
    },
}

/// Checks that every monetary amount is finite and non-negative.
///
/// Counts are unsigned and need no check. Overselling (`sold_count` above
/// `capacity`) is allowed.
///
/// # Errors
///
/// Returns the first [`FinancialsError`] found. Expense categories are
/// reported as `expenses.<category>`.
pub fn validate_financials(financials: &ShowFinancials) -> Result<(), FinancialsError> {
    let fixed = [
        ("guarantee", financials.guarantee),
        ("ticketPrice", financials.ticket_price),
        ("merchSales", financials.merch_sales),
    ];

    for (field, value) in fixed {
        check_amount(field.to_string(), value)?;
    }

    for (category, value) in financials.expenses.iter() {
        check_amount(format!("expenses.{category}"), value)?;
    }

    Ok(())
}

fn check_amount(field: String, value: f64) -> Result<(), FinancialsError> {
    if !value.is_finite() {
        return Err(FinancialsError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(FinancialsError::Negative { field, value });
    }
    Ok(())
}

/// Computes revenue, expenses, and net profit for a single show.
///
/// Every expense category present is summed, including ones outside the
/// standard set. Oversold shows are computed as given.
#[must_use]
pub fn compute_show_pnl(financials: &ShowFinancials) -> ShowPnl {
    debug_assert!(
        validate_financials(financials).is_ok(),
        "compute_show_pnl called with unvalidated financials: {financials:?}"
    );

    let ticket_revenue = f64::from(financials.sold_count) * financials.ticket_price;
    let total_revenue = financials.guarantee + ticket_revenue + financials.merch_sales;
    let total_expenses = financials.expenses.total();

    let sell_through = (financials.capacity > 0)
        .then(|| f64::from(financials.sold_count) / f64::from(financials.capacity));

    if sell_through.is_some_and(|s| s > 1.0) {
        log::debug!(
            "Oversold show: {} sold against capacity {}",
            financials.sold_count,
            financials.capacity
        );
    }

    ShowPnl {
        ticket_revenue,
        total_revenue,
        total_expenses,
        net_profit: total_revenue - total_expenses,
        sell_through,
    }
}
