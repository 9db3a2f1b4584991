//! Travel assumptions behind drive time, fuel cost, and risk flags.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunable constants for converting distance into drive time, fuel cost,
/// and risk flags.
///
/// Every field has a default, so an override file only needs the values
/// it changes:
///
/// ```toml
/// fuel_price_per_gallon = 4.75
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteAssumptions {
    /// Average touring-van highway speed, stops included. The default of
    /// 55 already folds in a ~10% slowdown over a 60 mph cruise and must
    /// not be inflated again.
    pub average_speed_mph: f64,
    /// Vehicle fuel economy.
    pub miles_per_gallon: f64,
    /// Fuel price in currency units per gallon.
    pub fuel_price_per_gallon: f64,
    /// Drive times strictly above this are long drives.
    pub long_drive_hours: f64,
    /// Drive times strictly above this are impossible between shows.
    pub impossible_drive_hours: f64,
}

impl Default for RouteAssumptions {
    fn default() -> Self {
        Self {
            average_speed_mph: 55.0,
            miles_per_gallon: 12.0,
            fuel_price_per_gallon: 4.0,
            long_drive_hours: 8.0,
            impossible_drive_hours: 14.0,
        }
    }
}

impl RouteAssumptions {
    /// Parses assumptions from TOML; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or
    /// [`ConfigError::InvalidAssumption`] if a value is not a positive
    /// finite number.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let assumptions: Self = toml::de::from_str(toml_str)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Checks that every value is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAssumption`] naming the first bad
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("average_speed_mph", self.average_speed_mph),
            ("miles_per_gallon", self.miles_per_gallon),
            ("fuel_price_per_gallon", self.fuel_price_per_gallon),
            ("long_drive_hours", self.long_drive_hours),
            ("impossible_drive_hours", self.impossible_drive_hours),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidAssumption { field, value });
            }
        }

        Ok(())
    }

    /// Drive time in hours for a distance in miles.
    #[must_use]
    pub fn drive_time_hours(&self, distance_miles: f64) -> f64 {
        distance_miles / self.average_speed_mph
    }

    /// Fuel cost for a distance, rounded to whole currency units.
    #[must_use]
    pub fn gas_cost(&self, distance_miles: f64) -> f64 {
        (distance_miles / self.miles_per_gallon * self.fuel_price_per_gallon).round()
    }

    /// Whether `drive_time_hours` counts as a long drive.
    #[must_use]
    pub fn is_long_drive(&self, drive_time_hours: f64) -> bool {
        drive_time_hours > self.long_drive_hours
    }

    /// Whether `drive_time_hours` is too long to make between shows.
    #[must_use]
    pub fn is_impossible(&self, drive_time_hours: f64) -> bool {
        drive_time_hours > self.impossible_drive_hours
    }
}
