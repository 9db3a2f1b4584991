#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for checking tour routing and show financials.
//!
//! ```text
//! tour_routing_cli route "Seattle, WA" "Portland, OR"
//! tour_routing_cli show show.toml
//! tour_routing_cli tour spring_2025.toml [--json]
//! tour_routing_cli roster spring_2025.toml fall_2025.toml
//! tour_routing_cli cities
//! ```
//!
//! `--cities` and `--assumptions` replace the built-in market table and
//! travel assumptions with TOML overrides. Set `RUST_LOG=debug` to see
//! fuzzy city matches and per-segment routing.

mod input;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tour_routing_analytics::{rollup_roster, summarize_tour_with};
use tour_routing_finance::compute_show_pnl;
use tour_routing_geography::compute_route_with;

#[derive(Parser)]
#[command(
    name = "tour_routing_cli",
    about = "Tour routing and show financial analytics"
)]
struct Cli {
    /// TOML city table to use instead of the built-in markets
    #[arg(long, global = true)]
    cities: Option<PathBuf>,
    /// TOML route assumptions overriding the defaults
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance, drive time, and fuel cost between two cities
    Route {
        /// Departure city label
        from: String,
        /// Arrival city label
        to: String,
    },
    /// Profit and loss for a single show file
    Show {
        /// Show file (TOML or JSON)
        file: PathBuf,
    },
    /// Revenue and route warnings for a tour file
    Tour {
        /// Tour file (TOML or JSON)
        file: PathBuf,
    },
    /// Confirmed revenue per artist across tour files
    Roster {
        /// Tour files (TOML or JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List known cities
    Cities,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let table = input::load_city_table(cli.cities.as_deref())?;
    let assumptions = input::load_assumptions(cli.assumptions.as_deref())?;

    match cli.command {
        Commands::Route { from, to } => {
            let result = compute_route_with(&table, &from, &to, &assumptions);
            if cli.json {
                match &result {
                    Ok(metrics) => print_json(metrics)?,
                    Err(unresolved) => print_json(unresolved)?,
                }
            } else {
                println!("{}", report::route(&from, &to, &result));
            }
        }
        Commands::Show { file } => {
            let show = input::load_show(&file)?;
            let pnl = compute_show_pnl(&show.financials);
            if cli.json {
                print_json(&pnl)?;
            } else {
                print!("{}", report::show(&show, &pnl));
            }
        }
        Commands::Tour { file } => {
            let tour = input::load_tour(&file)?;
            let summary = summarize_tour_with(&table, &tour, &assumptions);
            if cli.json {
                print_json(&summary)?;
            } else {
                print!("{}", report::tour(&summary));
            }
        }
        Commands::Roster { files } => {
            let tours = files
                .iter()
                .map(|path| input::load_tour(path))
                .collect::<Result<Vec<_>, _>>()?;
            let roster = rollup_roster(&tours);
            if cli.json {
                print_json(&roster)?;
            } else {
                print!("{}", report::roster(&roster));
            }
        }
        Commands::Cities => {
            if cli.json {
                print_json(&table.entries())?;
            } else {
                for entry in table.entries() {
                    println!(
                        "{:<22} {:>9.4} {:>10.4}",
                        entry.label, entry.latitude, entry.longitude
                    );
                }
            }
        }
    }

    Ok(())
}
