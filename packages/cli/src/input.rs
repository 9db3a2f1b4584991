//! Loading tours, shows, and configuration overrides from disk.
//!
//! Files ending in `.json` are parsed as JSON; everything else as TOML.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tour_routing_finance::{FinancialsError, validate_financials};
use tour_routing_finance_models::{Show, Tour};
use tour_routing_geography::{CityTable, ConfigError, RouteAssumptions};

/// Errors from reading CLI input files.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// TOML input did not match the expected shape.
    #[error("Invalid TOML in {}: {source}", path.display())]
    Toml {
        /// File that failed.
        path: PathBuf,
        /// Parser error.
        source: toml::de::Error,
    },

    /// JSON input did not match the expected shape.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },

    /// A city table or assumptions override was rejected.
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        /// File that failed.
        path: PathBuf,
        /// Validation error.
        source: ConfigError,
    },

    /// A show's financial record failed validation.
    #[error("Show {show_id}: {source}")]
    Financials {
        /// Offending show.
        show_id: String,
        /// Validation error.
        source: FinancialsError,
    },
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let contents = read(path)?;

    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        serde_json::from_str(&contents).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::de::from_str(&contents).map_err(|source| InputError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn validate_show(show: &Show) -> Result<(), InputError> {
    validate_financials(&show.financials).map_err(|source| InputError::Financials {
        show_id: show.id.clone(),
        source,
    })
}

/// Loads a single show and validates its financials.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read or parsed, or if the
/// show's financials are invalid.
pub fn load_show(path: &Path) -> Result<Show, InputError> {
    let show: Show = parse(path)?;
    validate_show(&show)?;
    Ok(show)
}

/// Loads a tour, stamps its id onto every show, and validates every
/// show's financials.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read or parsed, or if any
/// show's financials are invalid.
pub fn load_tour(path: &Path) -> Result<Tour, InputError> {
    let mut tour: Tour = parse(path)?;
    tour.assign_show_tour_ids();

    for show in &tour.shows {
        validate_show(show)?;
    }

    log::debug!(
        "Loaded tour {} ({} shows) from {}",
        tour.id,
        tour.shows.len(),
        path.display()
    );

    Ok(tour)
}

/// Loads the city table override, or the built-in markets if `path` is
/// `None`.
///
/// # Errors
///
/// Returns [`InputError`] if the override cannot be read or is invalid.
pub fn load_city_table(path: Option<&Path>) -> Result<CityTable, InputError> {
    let Some(path) = path else {
        return Ok(CityTable::builtin());
    };

    let table = CityTable::from_toml_str(&read(path)?).map_err(|source| InputError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} cities from {}", table.len(), path.display());

    Ok(table)
}

/// Loads route assumptions, or the defaults if `path` is `None`.
///
/// # Errors
///
/// Returns [`InputError`] if the override cannot be read or is invalid.
pub fn load_assumptions(path: Option<&Path>) -> Result<RouteAssumptions, InputError> {
    let Some(path) = path else {
        return Ok(RouteAssumptions::default());
    };

    RouteAssumptions::from_toml_str(&read(path)?).map_err(|source| InputError::Config {
        path: path.to_path_buf(),
        source,
    })
}
