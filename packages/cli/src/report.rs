//! Plain-text rendering of engine results.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tour_routing_analytics_models::{RouteSegment, RouteWarningLevel, SegmentOutcome, TourSummary};
use tour_routing_finance_models::{RollupResult, Show, ShowPnl};
use tour_routing_geography::{RouteMetrics, UnresolvableCity};

fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${amount:.2}")
    }
}

fn metrics_line(metrics: &RouteMetrics) -> String {
    format!(
        "{:.0} mi, {:.1} h, ~${:.0} fuel",
        metrics.display_distance_miles(),
        metrics.display_drive_time_hours(),
        metrics.estimated_gas_cost
    )
}

/// Renders a single city-to-city route.
#[must_use]
pub fn route(from: &str, to: &str, result: &Result<RouteMetrics, UnresolvableCity>) -> String {
    match result {
        Ok(metrics) => {
            let flag = if metrics.is_impossible {
                " [IMPOSSIBLE]"
            } else if metrics.is_long_drive {
                " [LONG DRIVE]"
            } else {
                ""
            };
            format!("{from} -> {to}: {}{flag}", metrics_line(metrics))
        }
        Err(unresolved) => format!(
            "{from} -> {to}: distance unknown (no coordinates for {:?})",
            unresolved.label
        ),
    }
}

/// Renders one show's profit and loss.
#[must_use]
pub fn show(show: &Show, pnl: &ShowPnl) -> String {
    let mut out = String::new();
    writeln!(out, "{} {} ({}) [{}]", show.date, show.city, show.id, show.status).unwrap();
    writeln!(out, "  Ticket revenue: {}", money(pnl.ticket_revenue)).unwrap();
    writeln!(out, "  Total revenue:  {}", money(pnl.total_revenue)).unwrap();
    writeln!(out, "  Expenses:       {}", money(pnl.total_expenses)).unwrap();
    for (category, amount) in show.financials.expenses.iter() {
        writeln!(out, "    {category:<14}{}", money(amount)).unwrap();
    }
    writeln!(out, "  Net profit:     {}", money(pnl.net_profit)).unwrap();
    if let Some(sell_through) = pnl.sell_through {
        writeln!(out, "  Sell-through:   {:.1}%", sell_through * 100.0).unwrap();
    }
    out
}

fn rollup_lines(out: &mut String, label: &str, rollup: &RollupResult) {
    writeln!(
        out,
        "  {label:<10} {} show(s), revenue {}, expenses {}, net {}",
        rollup.show_count,
        money(rollup.total_revenue),
        money(rollup.total_expenses),
        money(rollup.net_profit)
    )
    .unwrap();
}

fn segment_line(segment: &RouteSegment) -> String {
    let detail = match &segment.outcome {
        SegmentOutcome::Resolved(metrics) => metrics_line(metrics),
        SegmentOutcome::Undetermined { city } => {
            format!("distance unknown (no coordinates for {city:?})")
        }
    };
    let level = match segment.warning() {
        Some(RouteWarningLevel::Impossible) => "IMPOSSIBLE",
        Some(RouteWarningLevel::LongDrive) => "LONG DRIVE",
        Some(RouteWarningLevel::Undetermined) => "UNKNOWN",
        None => "ok",
    };

    format!(
        "  [{level}] {} ({}) -> {} ({}): {detail}",
        segment.from_show_id, segment.from_city, segment.to_show_id, segment.to_city
    )
}

/// Renders a tour summary with its route warnings.
#[must_use]
pub fn tour(summary: &TourSummary) -> String {
    let mut out = String::new();
    writeln!(out, "{}", summary.description).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "Revenue").unwrap();
    rollup_lines(&mut out, "Confirmed", &summary.revenue.confirmed);
    rollup_lines(&mut out, "Pipeline", &summary.revenue.pipeline.pipeline);
    writeln!(
        out,
        "  ({} draft, {} on hold, {} canceled)",
        summary.revenue.pipeline.draft_count,
        summary.revenue.pipeline.hold_count,
        summary.revenue.pipeline.canceled_count
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "Routing").unwrap();
    writeln!(
        out,
        "  {:.0} mi, {:.1} h driving, ~{} fuel",
        summary.total_distance_miles.round(),
        summary.total_drive_time_hours,
        money(summary.total_gas_cost)
    )
    .unwrap();
    if summary.undetermined_count > 0 {
        writeln!(
            out,
            "  (excludes {} segment(s) with unknown distance)",
            summary.undetermined_count
        )
        .unwrap();
    }

    if summary.warnings.is_empty() {
        writeln!(out, "  No route warnings").unwrap();
    } else {
        writeln!(out, "  Warnings:").unwrap();
        for segment in &summary.warnings {
            writeln!(out, "{}", segment_line(segment)).unwrap();
        }
    }

    out
}

/// Renders a per-artist rollup table.
#[must_use]
pub fn roster(roster: &BTreeMap<String, RollupResult>) -> String {
    let mut out = String::new();
    writeln!(out, "Confirmed revenue by artist").unwrap();
    for (artist, rollup) in roster {
        rollup_lines(&mut out, artist, rollup);
    }
    out
}
