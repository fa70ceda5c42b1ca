//! Contract model and the closed set of pay arrangements it can express.
//!
//! A contract is loaded once per payroll run and never mutated. Every enum
//! here is closed: the gross calculator matches on them exhaustively, so a
//! new arrangement cannot be added without the compiler pointing at every
//! place that has to price it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the stated salary on a contract is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ContractType {
    /// Paid per hour; the stated salary is a monthly figure divided down.
    Hourly,
    /// Paid a fixed monthly salary, prorated only for unpaid and half-pay days.
    FixedMonthly,
    /// Part-time worker paid the stated salary scaled by hours worked.
    ProratedMinimumWage,
}

impl ContractType {
    /// Returns the canonical snake_case name of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Hourly => "hourly",
            ContractType::FixedMonthly => "fixed_monthly",
            ContractType::ProratedMinimumWage => "prorated_minimum_wage",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = EngineError;

    /// Parses a contract type, rejecting anything outside the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kenya_payroll::models::ContractType;
    ///
    /// assert_eq!("hourly".parse::<ContractType>().unwrap(), ContractType::Hourly);
    /// assert_eq!(
    ///     "prorated_min_wage".parse::<ContractType>().unwrap(),
    ///     ContractType::ProratedMinimumWage
    /// );
    /// assert!("casual".parse::<ContractType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(ContractType::Hourly),
            "fixed_monthly" => Ok(ContractType::FixedMonthly),
            "prorated_minimum_wage" | "prorated_min_wage" => Ok(ContractType::ProratedMinimumWage),
            _ => Err(EngineError::UnknownContractType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ContractType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Whether the employer houses the employee or owes a cash allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingArrangement {
    /// Housing provided in kind; taxed as a non-cash benefit.
    #[serde(alias = "quarters")]
    EmployerProvided,
    /// No housing provided; a 15% cash allowance is mandatory.
    #[serde(alias = "none", alias = "cash_allowance")]
    CashAllowanceRequired,
}

/// The employee's pension tier election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PensionTier {
    /// Contributes to both tier 1 and tier 2.
    Standard,
    /// Contracted out of tier 2; tier 1 is still owed.
    #[serde(alias = "opt_out")]
    OptedOut,
}

/// How a stated salary is read when a housing allowance is owed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// The stated amount is base pay; the allowance is added on top.
    #[serde(alias = "base")]
    StatedAmountIsBase,
    /// The stated amount already includes the allowance.
    #[default]
    #[serde(alias = "gross")]
    StatedAmountIsGross,
}

/// Which monthly hour count an hourly contract's salary is divided by.
///
/// Serialized as text: `statutory` (or `225`), `monthly` (or `calendar`),
/// or any other string, which is kept verbatim and parsed as a number when
/// the rate is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HourlyDivisor {
    /// The statutory 52 weeks x 52 hours / 12 months constant.
    StatutoryFixed,
    /// Expected working hours in the payroll month from the holiday calendar.
    #[default]
    CalendarDerived,
    /// A caller-supplied divisor, validated only when it is used.
    ExplicitOverride(String),
}

impl From<String> for HourlyDivisor {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "statutory" | "statutory_fixed" | "225" => HourlyDivisor::StatutoryFixed,
            "monthly" | "calendar" | "calendar_derived" => HourlyDivisor::CalendarDerived,
            _ => HourlyDivisor::ExplicitOverride(value.trim().to_string()),
        }
    }
}

impl From<HourlyDivisor> for String {
    fn from(value: HourlyDivisor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HourlyDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourlyDivisor::StatutoryFixed => f.write_str("statutory"),
            HourlyDivisor::CalendarDerived => f.write_str("monthly"),
            HourlyDivisor::ExplicitOverride(raw) => f.write_str(raw),
        }
    }
}

/// Whether a contract is still in force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// The contract is in force.
    #[default]
    Active,
    /// The contract has been suspended or terminated.
    #[serde(alias = "terminated", alias = "suspended")]
    Inactive,
}

/// The pay terms of one employee for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// How the stated salary is earned.
    pub contract_type: ContractType,
    /// The stated monthly salary.
    pub base_salary: Decimal,
    /// Contracted hours per week; required for hourly and prorated contracts.
    #[serde(default)]
    pub weekly_hours: Option<u32>,
    /// Whether housing is provided in kind or paid as an allowance.
    pub housing: HousingArrangement,
    /// Market rental value of employer-provided housing.
    #[serde(default)]
    pub housing_market_value: Option<Decimal>,
    /// Pension tier election.
    pub pension_tier: PensionTier,
    /// Hourly divisor policy for hourly contracts.
    #[serde(default)]
    pub hourly_divisor: HourlyDivisor,
    /// Interpretation of the stated salary when an allowance is owed.
    #[serde(default)]
    pub salary_basis: SalaryBasis,
    /// First day the contract is in force.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day the contract is in force, if it has ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the contract is in force.
    #[serde(default)]
    pub status: ContractStatus,
}

impl Contract {
    /// Returns true if the employer must pay a cash housing allowance.
    pub fn requires_housing_allowance(&self) -> bool {
        self.housing == HousingArrangement::CashAllowanceRequired
    }

    /// Returns true if the contract is active at any point between
    /// `period_start` and `period_end` (inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use kenya_payroll::models::{
    ///     Contract, ContractStatus, ContractType, HourlyDivisor, HousingArrangement,
    ///     PensionTier, SalaryBasis,
    /// };
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let contract = Contract {
    ///     contract_type: ContractType::FixedMonthly,
    ///     base_salary: Decimal::new(50000, 0),
    ///     weekly_hours: None,
    ///     housing: HousingArrangement::EmployerProvided,
    ///     housing_market_value: None,
    ///     pension_tier: PensionTier::Standard,
    ///     hourly_divisor: HourlyDivisor::default(),
    ///     salary_basis: SalaryBasis::default(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 2, 10),
    ///     end_date: None,
    ///     status: ContractStatus::Active,
    /// };
    ///
    /// let feb_1 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    /// let feb_28 = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
    /// let jan_31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    /// assert!(contract.is_active_between(feb_1, feb_28));
    /// assert!(!contract.is_active_between(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), jan_31));
    /// ```
    pub fn is_active_between(&self, period_start: NaiveDate, period_end: NaiveDate) -> bool {
        if self.status != ContractStatus::Active {
            return false;
        }
        let started = self.start_date.is_none_or(|start| start <= period_end);
        let not_ended = self.end_date.is_none_or(|end| end >= period_start);
        started && not_ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_contract() -> Contract {
        Contract {
            contract_type: ContractType::FixedMonthly,
            base_salary: dec("50000"),
            weekly_hours: None,
            housing: HousingArrangement::CashAllowanceRequired,
            housing_market_value: None,
            pension_tier: PensionTier::Standard,
            hourly_divisor: HourlyDivisor::default(),
            salary_basis: SalaryBasis::default(),
            start_date: Some(date(2025, 1, 1)),
            end_date: None,
            status: ContractStatus::Active,
        }
    }

    #[test]
    fn test_contract_type_parses_canonical_names() {
        assert_eq!("hourly".parse::<ContractType>().unwrap(), ContractType::Hourly);
        assert_eq!(
            "fixed_monthly".parse::<ContractType>().unwrap(),
            ContractType::FixedMonthly
        );
        assert_eq!(
            "prorated_minimum_wage".parse::<ContractType>().unwrap(),
            ContractType::ProratedMinimumWage
        );
        assert_eq!(
            " Hourly ".parse::<ContractType>().unwrap(),
            ContractType::Hourly
        );
    }

    #[test]
    fn test_unknown_contract_type_is_rejected() {
        match "piecework".parse::<ContractType>() {
            Err(EngineError::UnknownContractType { value }) => assert_eq!(value, "piecework"),
            other => panic!("Expected UnknownContractType, got {:?}", other),
        }
    }

    #[test]
    fn test_contract_type_deserialization_rejects_unknown() {
        let result: Result<ContractType, _> = serde_json::from_str("\"casual\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown contract type: casual"));
    }

    #[test]
    fn test_contract_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ContractType::ProratedMinimumWage).unwrap(),
            "\"prorated_minimum_wage\""
        );
        assert_eq!(
            serde_json::to_string(&ContractType::FixedMonthly).unwrap(),
            "\"fixed_monthly\""
        );
    }

    #[test]
    fn test_hourly_divisor_from_text() {
        assert_eq!(
            HourlyDivisor::from("statutory".to_string()),
            HourlyDivisor::StatutoryFixed
        );
        assert_eq!(
            HourlyDivisor::from("225".to_string()),
            HourlyDivisor::StatutoryFixed
        );
        assert_eq!(
            HourlyDivisor::from("monthly".to_string()),
            HourlyDivisor::CalendarDerived
        );
        assert_eq!(
            HourlyDivisor::from("208".to_string()),
            HourlyDivisor::ExplicitOverride("208".to_string())
        );
        assert_eq!(
            HourlyDivisor::from("two hundred".to_string()),
            HourlyDivisor::ExplicitOverride("two hundred".to_string())
        );
    }

    #[test]
    fn test_hourly_divisor_serializes_as_text() {
        assert_eq!(
            serde_json::to_string(&HourlyDivisor::StatutoryFixed).unwrap(),
            "\"statutory\""
        );
        assert_eq!(
            serde_json::to_string(&HourlyDivisor::ExplicitOverride("195".to_string())).unwrap(),
            "\"195\""
        );
    }

    #[test]
    fn test_deserialize_contract_with_aliases_and_defaults() {
        let json = r#"{
            "contract_type": "prorated_min_wage",
            "base_salary": "16113.75",
            "weekly_hours": 20,
            "housing": "quarters",
            "housing_market_value": "8000",
            "pension_tier": "opt_out"
        }"#;

        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.contract_type, ContractType::ProratedMinimumWage);
        assert_eq!(contract.base_salary, dec("16113.75"));
        assert_eq!(contract.weekly_hours, Some(20));
        assert_eq!(contract.housing, HousingArrangement::EmployerProvided);
        assert_eq!(contract.housing_market_value, Some(dec("8000")));
        assert_eq!(contract.pension_tier, PensionTier::OptedOut);
        assert_eq!(contract.hourly_divisor, HourlyDivisor::CalendarDerived);
        assert_eq!(contract.salary_basis, SalaryBasis::StatedAmountIsGross);
        assert_eq!(contract.status, ContractStatus::Active);
    }

    #[test]
    fn test_housing_aliases() {
        let none: HousingArrangement = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(none, HousingArrangement::CashAllowanceRequired);
        let cash: HousingArrangement = serde_json::from_str("\"cash_allowance\"").unwrap();
        assert_eq!(cash, HousingArrangement::CashAllowanceRequired);
    }

    #[test]
    fn test_requires_housing_allowance() {
        let mut contract = create_test_contract();
        assert!(contract.requires_housing_allowance());

        contract.housing = HousingArrangement::EmployerProvided;
        assert!(!contract.requires_housing_allowance());
    }

    #[test]
    fn test_contract_ending_mid_period_is_active() {
        let mut contract = create_test_contract();
        contract.end_date = Some(date(2026, 2, 14));

        assert!(contract.is_active_between(date(2026, 2, 1), date(2026, 2, 28)));
        assert!(!contract.is_active_between(date(2026, 3, 1), date(2026, 3, 31)));
    }

    #[test]
    fn test_inactive_contract_is_never_active() {
        let mut contract = create_test_contract();
        contract.status = ContractStatus::Inactive;

        assert!(!contract.is_active_between(date(2026, 2, 1), date(2026, 2, 28)));
    }
}
