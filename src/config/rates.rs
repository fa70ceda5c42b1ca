//! Date-indexed statutory rate table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

use super::types::{RateRegime, StatutoryRateSnapshot, TaxBand};

/// An ordered list of rate regimes, each in force from its effective date
/// until the next one begins.
///
/// # Example
///
/// ```
/// use kenya_payroll::config::RateTable;
/// use chrono::NaiveDate;
///
/// let table = RateTable::kenya();
/// let feb = table.rates_for(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()).unwrap();
/// let jan = table.rates_for(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()).unwrap();
/// assert_eq!(feb.name, "NSSF Year 4");
/// assert_eq!(jan.name, "NSSF Year 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    /// Regimes sorted oldest first.
    regimes: Vec<RateRegime>,
}

impl RateTable {
    /// Builds a table from regimes in any order.
    ///
    /// # Returns
    ///
    /// Returns `InvalidRateTable` if the list is empty, two regimes share an
    /// effective date, or any snapshot breaks its ordering invariants.
    pub fn new(regimes: Vec<RateRegime>) -> EngineResult<Self> {
        if regimes.is_empty() {
            return Err(invalid("at least one rate regime is required"));
        }

        let mut seen = HashSet::new();
        for regime in &regimes {
            if !seen.insert(regime.effective_date) {
                return Err(invalid(format!(
                    "duplicate effective date {}",
                    regime.effective_date
                )));
            }
            validate_snapshot(&regime.rates)?;
        }

        let mut sorted = regimes;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self { regimes: sorted })
    }

    /// The built-in Kenyan table: NSSF Year 3 from 2025-02-01 and NSSF
    /// Year 4 from 2026-02-01.
    pub fn kenya() -> Self {
        Self {
            regimes: vec![
                RateRegime {
                    effective_date: ymd(2025, 2, 1),
                    rates: kenya_snapshot("NSSF Year 3", 7000, 72000),
                },
                RateRegime {
                    effective_date: ymd(2026, 2, 1),
                    rates: kenya_snapshot("NSSF Year 4", 9000, 108000),
                },
            ],
        }
    }

    /// Returns the rates in force on `date`.
    ///
    /// # Returns
    ///
    /// Returns `RateRegimeNotFound` if `date` precedes the earliest regime.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRateSnapshot> {
        self.regimes
            .iter()
            .rfind(|r| r.effective_date <= date)
            .map(|r| &r.rates)
            .ok_or(EngineError::RateRegimeNotFound { date })
    }

    /// Returns all regimes, oldest first.
    pub fn regimes(&self) -> &[RateRegime] {
        &self.regimes
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::kenya()
    }
}

fn kenya_snapshot(name: &str, lower: i64, upper: i64) -> StatutoryRateSnapshot {
    StatutoryRateSnapshot {
        name: name.to_string(),
        pension_lower_limit: Decimal::new(lower, 0),
        pension_upper_limit: Decimal::new(upper, 0),
        pension_rate: Decimal::new(6, 2),
        health_insurance_rate: Decimal::new(275, 4),
        health_insurance_floor: Decimal::new(300, 0),
        housing_levy_rate: Decimal::new(15, 3),
        personal_relief: Decimal::new(2400, 0),
        tax_bands: vec![
            TaxBand::bounded(Decimal::new(24000, 0), Decimal::new(10, 2)),
            TaxBand::bounded(Decimal::new(32333, 0), Decimal::new(25, 2)),
            TaxBand::bounded(Decimal::new(500000, 0), Decimal::new(30, 2)),
            TaxBand::bounded(Decimal::new(800000, 0), Decimal::new(325, 3)),
            TaxBand::unbounded(Decimal::new(35, 2)),
        ],
        minimum_monthly_wage: Decimal::new(1611375, 2),
    }
}

fn validate_snapshot(rates: &StatutoryRateSnapshot) -> EngineResult<()> {
    if rates.pension_lower_limit <= Decimal::ZERO {
        return Err(invalid(format!(
            "{}: pension lower limit must be positive",
            rates.name
        )));
    }
    if rates.pension_upper_limit <= rates.pension_lower_limit {
        return Err(invalid(format!(
            "{}: pension upper limit must exceed the lower limit",
            rates.name
        )));
    }

    let Some((last, bounded)) = rates.tax_bands.split_last() else {
        return Err(invalid(format!("{}: no tax bands", rates.name)));
    };
    if last.upper_bound.is_some() {
        return Err(invalid(format!(
            "{}: the final tax band must be unbounded",
            rates.name
        )));
    }

    let mut previous = Decimal::ZERO;
    for band in bounded {
        match band.upper_bound {
            Some(bound) if bound > previous => previous = bound,
            Some(bound) => {
                return Err(invalid(format!(
                    "{}: tax band bound {} does not exceed {}",
                    rates.name, bound, previous
                )));
            }
            None => {
                return Err(invalid(format!(
                    "{}: only the final tax band may be unbounded",
                    rates.name
                )));
            }
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidRateTable {
        message: message.into(),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// RT-001: the regime switches on its effective date
    #[test]
    fn test_regime_boundary_is_inclusive() {
        let table = RateTable::kenya();

        let year_3 = table.rates_for(date(2026, 1, 31)).unwrap();
        assert_eq!(year_3.pension_lower_limit, dec("7000"));
        assert_eq!(year_3.pension_upper_limit, dec("72000"));

        let year_4 = table.rates_for(date(2026, 2, 1)).unwrap();
        assert_eq!(year_4.pension_lower_limit, dec("9000"));
        assert_eq!(year_4.pension_upper_limit, dec("108000"));
    }

    /// RT-004: Year 3 caps tier 1 at 420 and tier 2 at 3,900
    #[test]
    fn test_year_3_contribution_caps() {
        let year_3 = RateTable::kenya().rates_for(date(2026, 1, 31)).unwrap().clone();

        assert_eq!(year_3.pension_lower_limit, dec("7000"));
        assert_eq!(year_3.pension_rate * year_3.pension_lower_limit, dec("420"));
        assert_eq!(
            year_3.pension_rate * (year_3.pension_upper_limit - year_3.pension_lower_limit),
            dec("3900")
        );
    }

    /// RT-002: dates before the earliest regime are rejected
    #[test]
    fn test_pre_regime_date_is_rejected() {
        let table = RateTable::kenya();
        match table.rates_for(date(2025, 1, 31)) {
            Err(EngineError::RateRegimeNotFound { date: d }) => assert_eq!(d, date(2025, 1, 31)),
            other => panic!("Expected RateRegimeNotFound, got {:?}", other),
        }
    }

    /// RT-003: the latest regime stays in force indefinitely
    #[test]
    fn test_latest_regime_applies_to_future_dates() {
        let table = RateTable::kenya();
        let rates = table.rates_for(date(2030, 6, 30)).unwrap();
        assert_eq!(rates.name, "NSSF Year 4");
    }

    #[test]
    fn test_common_rates() {
        let table = RateTable::kenya();
        let rates = table.rates_for(date(2026, 2, 28)).unwrap();

        assert_eq!(rates.pension_rate, dec("0.06"));
        assert_eq!(rates.health_insurance_rate, dec("0.0275"));
        assert_eq!(rates.health_insurance_floor, dec("300"));
        assert_eq!(rates.housing_levy_rate, dec("0.015"));
        assert_eq!(rates.personal_relief, dec("2400"));
        assert_eq!(rates.minimum_monthly_wage, dec("16113.75"));
        assert_eq!(rates.tax_bands.len(), 5);
        assert_eq!(rates.tax_bands[3].rate, dec("0.325"));
    }

    #[test]
    fn test_built_in_table_passes_validation() {
        let regimes = RateTable::kenya().regimes().to_vec();
        let rebuilt = RateTable::new(regimes).unwrap();
        assert_eq!(rebuilt, RateTable::kenya());
    }

    #[test]
    fn test_new_sorts_regimes() {
        let mut regimes = RateTable::kenya().regimes().to_vec();
        regimes.reverse();

        let table = RateTable::new(regimes).unwrap();
        assert_eq!(table.regimes()[0].effective_date, date(2025, 2, 1));
    }

    #[test]
    fn test_empty_table_is_invalid() {
        assert!(matches!(
            RateTable::new(vec![]),
            Err(EngineError::InvalidRateTable { .. })
        ));
    }

    #[test]
    fn test_duplicate_effective_date_is_invalid() {
        let regime = RateTable::kenya().regimes()[0].clone();
        let result = RateTable::new(vec![regime.clone(), regime]);

        match result {
            Err(EngineError::InvalidRateTable { message }) => {
                assert!(message.contains("duplicate effective date 2025-02-01"))
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_pension_limits_are_invalid() {
        let mut regime = RateTable::kenya().regimes()[1].clone();
        regime.rates.pension_upper_limit = dec("9000");

        assert!(RateTable::new(vec![regime]).is_err());
    }

    #[test]
    fn test_bounded_final_band_is_invalid() {
        let mut regime = RateTable::kenya().regimes()[1].clone();
        regime.rates.tax_bands.pop();

        match RateTable::new(vec![regime]) {
            Err(EngineError::InvalidRateTable { message }) => {
                assert!(message.contains("final tax band must be unbounded"))
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_increasing_band_bounds_are_invalid() {
        let mut regime = RateTable::kenya().regimes()[1].clone();
        regime.rates.tax_bands[1].upper_bound = Some(dec("24000"));

        assert!(RateTable::new(vec![regime]).is_err());
    }

    #[test]
    fn test_unbounded_middle_band_is_invalid() {
        let mut regime = RateTable::kenya().regimes()[1].clone();
        regime.rates.tax_bands[2].upper_bound = None;

        assert!(RateTable::new(vec![regime]).is_err());
    }
}
