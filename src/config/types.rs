//! Configuration types for the statutory tables.
//!
//! This module contains the strongly-typed structures that describe a
//! statutory rate regime and the public holiday table. They are built in
//! code for the Kenyan defaults and can also be deserialized from YAML.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{HolidayCalendar, RateTable};

/// One band of the progressive income tax schedule.
///
/// Bands are cumulative: `upper_bound` is the chargeable pay at which the
/// band ends, not its width. The final band has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Cumulative upper bound of the band, or `None` for the final band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied within the band.
    pub rate: Decimal,
}

impl TaxBand {
    /// Creates a bounded band.
    pub fn bounded(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// Creates the unbounded final band.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Every statutory rate in effect for one payroll date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRateSnapshot {
    /// Name of the regime, e.g. "NSSF Year 4".
    pub name: String,
    /// Lower earnings limit: the ceiling of tier 1 pensionable pay.
    pub pension_lower_limit: Decimal,
    /// Upper earnings limit: the ceiling of tier 2 pensionable pay.
    pub pension_upper_limit: Decimal,
    /// Employee pension contribution rate.
    pub pension_rate: Decimal,
    /// Health insurance contribution rate.
    pub health_insurance_rate: Decimal,
    /// Minimum monthly health insurance contribution.
    pub health_insurance_floor: Decimal,
    /// Housing levy rate.
    pub housing_levy_rate: Decimal,
    /// Flat monthly personal relief.
    pub personal_relief: Decimal,
    /// Income tax bands in ascending order.
    pub tax_bands: Vec<TaxBand>,
    /// Statutory monthly minimum wage.
    pub minimum_monthly_wage: Decimal,
}

/// A rate snapshot together with the first date it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRegime {
    /// The first payroll date the regime applies to.
    pub effective_date: NaiveDate,
    /// The rates in force from `effective_date`.
    pub rates: StatutoryRateSnapshot,
}

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// Name of the holiday.
    pub name: String,
    /// Month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

/// A holiday whose date moves from year to year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedHoliday {
    /// Name of the holiday.
    pub name: String,
    /// The date it falls on (or is gazetted for).
    pub date: NaiveDate,
}

/// The public holiday table, as maintained in `holidays.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    /// Holidays on the same date every year.
    pub fixed: Vec<FixedHoliday>,
    /// Floating holidays keyed by year.
    #[serde(default)]
    pub variable: BTreeMap<i32, Vec<DatedHoliday>>,
}

/// The complete statutory configuration a payroll run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    /// Statutory rate regimes.
    pub rates: RateTable,
    /// Public holidays.
    pub holidays: HolidayCalendar,
}

impl PayrollConfig {
    /// The built-in Kenyan configuration.
    pub fn kenya() -> Self {
        Self {
            rates: RateTable::kenya(),
            holidays: HolidayCalendar::kenya(),
        }
    }
}
