//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate regimes and the public holiday table from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::holidays::HolidayCalendar;
use super::rates::RateTable;
use super::types::{HolidayTable, PayrollConfig, RateRegime};

/// Loads and provides access to the statutory configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kenya/
/// ├── holidays.yaml        # Fixed and floating public holidays
/// └── rates/
///     ├── 2025-02-01.yaml  # Regime effective from this date
///     └── 2026-02-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use kenya_payroll::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kenya").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
/// let rates = loader.config().rates.rates_for(date).unwrap();
/// println!("Regime: {}", rates.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kenya")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `holidays.yaml` or the `rates` directory is missing
    /// - Any file contains invalid YAML
    /// - The rate regimes break the rate table invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidayTable>(&holidays_path)?;

        let rates_dir = path.join("rates");
        let regimes = Self::load_rates(&rates_dir)?;
        let regime_count = regimes.len();
        let rates = RateTable::new(regimes)?;

        info!(
            path = %path.display(),
            regimes = regime_count,
            holiday_years = holidays.variable.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig {
                rates,
                holidays: HolidayCalendar::new(holidays),
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every regime file from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateRegime>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut regimes = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let regime = Self::load_yaml::<RateRegime>(&path)?;
                debug!(
                    file = %path.display(),
                    effective_date = %regime.effective_date,
                    "Loaded rate regime"
                );
                regimes.push(regime);
            }
        }

        if regimes.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(regimes)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
