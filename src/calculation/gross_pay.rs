//! Gross pay calculation functionality.
//!
//! This module turns a contract and a period's attendance into a
//! [`GrossBreakdown`]: base pay, overtime at 1.5x and 2.0x, and the
//! mandatory 15% housing allowance where the employer does not house the
//! employee (Employment Act s.31).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::config::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceDay, AttendanceTotals, Contract, ContractType, GrossBreakdown, HourlyDivisor,
    HousingArrangement, SalaryBasis,
};
use crate::money::round_money;

use super::calendar::{DEFAULT_WEEKLY_HOURS, expected_hours};

/// The mandatory housing allowance rate (15%).
pub const HOUSING_ALLOWANCE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Multiplier for hours at time and a half.
pub const OVERTIME_1_5_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for hours at double time.
pub const OVERTIME_2_0_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Weeks counted per month when prorating a minimum-wage contract.
pub const PRORATION_WEEKS_PER_MONTH: u32 = 4;

/// Largest earned pay accepted for one employee and period (10^15).
///
/// Every later stage multiplies or adds to earned pay, so amounts above
/// this are rejected before they can overflow.
pub const MAX_EARNED_PAY: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// The statutory monthly hour divisor: 52 weeks x 52 hours / 12 months.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::statutory_divisor;
/// use rust_decimal::Decimal;
///
/// assert_eq!(statutory_divisor().round_dp(2), Decimal::new(22533, 2));
/// ```
pub fn statutory_divisor() -> Decimal {
    Decimal::from(52 * 52) / Decimal::from(12)
}

/// What to do when an explicit hourly divisor override is unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisorFallback {
    /// Log a warning and use the statutory divisor.
    #[default]
    Lenient,
    /// Reject the contract.
    Strict,
}

/// Pay earned before any housing treatment, unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarnedPay {
    /// Pay for normal hours (or the monthly salary).
    pub base: Decimal,
    /// Pay for hours at 1.5x.
    pub overtime_1_5: Decimal,
    /// Pay for hours at 2.0x.
    pub overtime_2_0: Decimal,
}

impl EarnedPay {
    /// Earned pay with no overtime.
    pub fn base_only(base: Decimal) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Sum of all earned components.
    pub fn total(&self) -> Decimal {
        self.base + self.overtime_1_5 + self.overtime_2_0
    }

    /// Returns `CalculationError` if the total exceeds [`MAX_EARNED_PAY`].
    fn within_range(self) -> EngineResult<Self> {
        let total = self
            .base
            .checked_add(self.overtime_1_5)
            .and_then(|t| t.checked_add(self.overtime_2_0));
        match total {
            Some(total) if total.abs() <= MAX_EARNED_PAY => Ok(self),
            _ => Err(out_of_range("earned pay")),
        }
    }
}

fn out_of_range(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} is out of range", what),
    }
}

fn checked_product(factors: &[Decimal], what: &str) -> EngineResult<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, f| acc.checked_mul(*f))
        .ok_or_else(|| out_of_range(what))
}

/// The result of a gross pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossPayResult {
    /// The gross breakdown, housing benefit still zero.
    pub gross: GrossBreakdown,
    /// The hourly rate applied, for hourly contracts.
    pub hourly_rate: Option<Decimal>,
    /// The monthly hour divisor the rate was derived from, for hourly contracts.
    pub divisor: Option<Decimal>,
}

/// Calculates gross pay for one employee and one period.
///
/// # Arguments
///
/// * `contract` - The employee's contract
/// * `attendance_days` - The period's attendance records
/// * `payroll_date` - The payroll date; its month drives calendar-derived divisors
/// * `calendar` - The public holiday calendar
/// * `fallback` - Policy for unusable divisor overrides
///
/// # Returns
///
/// Returns `InvalidContract` if a prorated contract has no weekly hours, or
/// if a divisor override is unusable under [`DivisorFallback::Strict`].
/// Returns `CalculationError` if earned pay overflows or exceeds
/// [`MAX_EARNED_PAY`].
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::{DivisorFallback, calculate_gross_pay};
/// use kenya_payroll::config::HolidayCalendar;
/// use kenya_payroll::models::{
///     Contract, ContractStatus, ContractType, HourlyDivisor, HousingArrangement,
///     PensionTier, SalaryBasis,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = Contract {
///     contract_type: ContractType::FixedMonthly,
///     base_salary: Decimal::from(30000),
///     weekly_hours: None,
///     housing: HousingArrangement::CashAllowanceRequired,
///     housing_market_value: None,
///     pension_tier: PensionTier::Standard,
///     hourly_divisor: HourlyDivisor::default(),
///     salary_basis: SalaryBasis::StatedAmountIsBase,
///     start_date: None,
///     end_date: None,
///     status: ContractStatus::Active,
/// };
///
/// let result = calculate_gross_pay(
///     &contract,
///     &[],
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     &HolidayCalendar::kenya(),
///     DivisorFallback::Lenient,
/// )
/// .unwrap();
///
/// assert_eq!(result.gross.housing_allowance, Decimal::from(4500));
/// assert_eq!(result.gross.total_gross, Decimal::from(34500));
/// ```
pub fn calculate_gross_pay(
    contract: &Contract,
    attendance_days: &[AttendanceDay],
    payroll_date: NaiveDate,
    calendar: &HolidayCalendar,
    fallback: DivisorFallback,
) -> EngineResult<GrossPayResult> {
    let totals = AttendanceTotals::from_days(attendance_days);

    match contract.contract_type {
        ContractType::Hourly => {
            let divisor = resolve_hourly_divisor(contract, payroll_date, calendar, fallback)?;
            let hourly_rate = contract
                .base_salary
                .checked_div(divisor)
                .ok_or_else(|| out_of_range("hourly rate"))?;
            let earned = EarnedPay {
                base: checked_product(&[hourly_rate, totals.hours_normal], "base pay")?,
                overtime_1_5: checked_product(
                    &[hourly_rate, OVERTIME_1_5_MULTIPLIER, totals.hours_ot_1_5],
                    "overtime pay",
                )?,
                overtime_2_0: checked_product(
                    &[hourly_rate, OVERTIME_2_0_MULTIPLIER, totals.hours_ot_2_0],
                    "overtime pay",
                )?,
            }
            .within_range()?;
            Ok(GrossPayResult {
                gross: apply_housing_treatment(contract, earned),
                hourly_rate: Some(hourly_rate),
                divisor: Some(divisor),
            })
        }
        ContractType::FixedMonthly => {
            let earned = EarnedPay::base_only(contract.base_salary).within_range()?;
            Ok(GrossPayResult {
                gross: apply_housing_treatment(contract, earned),
                hourly_rate: None,
                divisor: None,
            })
        }
        ContractType::ProratedMinimumWage => {
            let weekly_hours = contract
                .weekly_hours
                .filter(|h| *h > 0)
                .ok_or_else(|| EngineError::InvalidContract {
                    field: "weekly_hours".to_string(),
                    message: "required and positive for prorated_minimum_wage contracts"
                        .to_string(),
                })?;
            let standard_hours =
                Decimal::from(weekly_hours) * Decimal::from(PRORATION_WEEKS_PER_MONTH);
            let fraction = totals.hours_normal / standard_hours;
            let earned =
                EarnedPay::base_only(checked_product(&[contract.base_salary, fraction], "base pay")?)
                    .within_range()?;
            Ok(GrossPayResult {
                gross: apply_housing_treatment(contract, earned),
                hourly_rate: None,
                divisor: None,
            })
        }
    }
}

/// Resolves the monthly hour divisor for an hourly contract.
///
/// Calendar-derived divisors use the payroll month's expected hours at the
/// contract's weekly hours (45 when unstated). An override that does not
/// parse as a positive number is handled per `fallback`.
pub fn resolve_hourly_divisor(
    contract: &Contract,
    payroll_date: NaiveDate,
    calendar: &HolidayCalendar,
    fallback: DivisorFallback,
) -> EngineResult<Decimal> {
    let divisor = match &contract.hourly_divisor {
        HourlyDivisor::StatutoryFixed => statutory_divisor(),
        HourlyDivisor::CalendarDerived => {
            let weekly_hours = contract
                .weekly_hours
                .filter(|h| *h > 0)
                .unwrap_or(DEFAULT_WEEKLY_HOURS);
            expected_hours(
                calendar,
                payroll_date.year(),
                payroll_date.month(),
                Decimal::from(weekly_hours),
            )?
        }
        HourlyDivisor::ExplicitOverride(raw) => match Decimal::from_str(raw.trim()) {
            Ok(value) if value > Decimal::ZERO => value,
            _ => match fallback {
                DivisorFallback::Lenient => {
                    warn!(
                        divisor = %raw,
                        "Unusable hourly divisor override; falling back to statutory divisor"
                    );
                    statutory_divisor()
                }
                DivisorFallback::Strict => {
                    return Err(EngineError::InvalidContract {
                        field: "hourly_divisor".to_string(),
                        message: format!("'{}' is not a positive number", raw),
                    });
                }
            },
        },
    };

    if divisor <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("hourly divisor for {} is zero", payroll_date),
        });
    }
    Ok(divisor)
}

/// Applies the housing treatment to earned pay and rounds every component.
///
/// - Employer-provided housing: no allowance; total equals earned pay.
/// - Cash allowance, stated amount is base: allowance is 15% of earned pay
///   on top of it.
/// - Cash allowance, stated amount is gross: each earned component is
///   scaled down by 1.15 and the allowance is the remainder, so the total
///   equals the earned amount.
pub fn apply_housing_treatment(contract: &Contract, earned: EarnedPay) -> GrossBreakdown {
    match (contract.housing, contract.salary_basis) {
        (HousingArrangement::EmployerProvided, _) => {
            let base_pay = round_money(earned.base);
            let overtime_1_5 = round_money(earned.overtime_1_5);
            let overtime_2_0 = round_money(earned.overtime_2_0);
            GrossBreakdown {
                base_pay,
                overtime_1_5,
                overtime_2_0,
                housing_allowance: Decimal::ZERO,
                housing_benefit: Decimal::ZERO,
                total_gross: base_pay + overtime_1_5 + overtime_2_0,
            }
        }
        (HousingArrangement::CashAllowanceRequired, SalaryBasis::StatedAmountIsBase) => {
            let base_pay = round_money(earned.base);
            let overtime_1_5 = round_money(earned.overtime_1_5);
            let overtime_2_0 = round_money(earned.overtime_2_0);
            let housing_allowance = round_money(earned.total() * HOUSING_ALLOWANCE_RATE);
            GrossBreakdown {
                base_pay,
                overtime_1_5,
                overtime_2_0,
                housing_allowance,
                housing_benefit: Decimal::ZERO,
                total_gross: base_pay + overtime_1_5 + overtime_2_0 + housing_allowance,
            }
        }
        (HousingArrangement::CashAllowanceRequired, SalaryBasis::StatedAmountIsGross) => {
            let grossed_up = Decimal::ONE + HOUSING_ALLOWANCE_RATE;
            let total_gross = round_money(earned.total());
            let base_pay = round_money(earned.base / grossed_up);
            let overtime_1_5 = round_money(earned.overtime_1_5 / grossed_up);
            let overtime_2_0 = round_money(earned.overtime_2_0 / grossed_up);
            GrossBreakdown {
                base_pay,
                overtime_1_5,
                overtime_2_0,
                housing_allowance: total_gross - base_pay - overtime_1_5 - overtime_2_0,
                housing_benefit: Decimal::ZERO,
                total_gross,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractStatus, PensionTier};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn feb(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn payroll_date() -> NaiveDate {
        feb(28)
    }

    fn contract(contract_type: ContractType, salary: &str) -> Contract {
        Contract {
            contract_type,
            base_salary: dec(salary),
            weekly_hours: None,
            housing: HousingArrangement::EmployerProvided,
            housing_market_value: None,
            pension_tier: PensionTier::Standard,
            hourly_divisor: HourlyDivisor::StatutoryFixed,
            salary_basis: SalaryBasis::StatedAmountIsBase,
            start_date: None,
            end_date: None,
            status: ContractStatus::Active,
        }
    }

    fn worked_days(count: u32, hours: &str) -> Vec<AttendanceDay> {
        (1..=count)
            .map(|d| AttendanceDay::worked(feb(d), dec(hours)))
            .collect()
    }

    fn gross(contract: &Contract, days: &[AttendanceDay]) -> GrossPayResult {
        calculate_gross_pay(
            contract,
            days,
            payroll_date(),
            &HolidayCalendar::kenya(),
            DivisorFallback::Lenient,
        )
        .unwrap()
    }

    /// GP-001: hourly pay on the statutory divisor
    #[test]
    fn test_hourly_statutory_divisor() {
        let c = contract(ContractType::Hourly, "22533.33");
        let result = gross(&c, &worked_days(20, "9"));

        // 22533.33 / 225.333.. = 99.9999.. per hour, x 180 hours
        assert_eq!(result.divisor, Some(statutory_divisor()));
        assert_eq!(result.gross.base_pay, dec("18000.00"));
        assert_eq!(result.gross.housing_allowance, Decimal::ZERO);
        assert_eq!(result.gross.total_gross, dec("18000.00"));
    }

    /// GP-002: calendar-derived divisor uses the month's expected hours
    #[test]
    fn test_hourly_calendar_divisor() {
        let mut c = contract(ContractType::Hourly, "36000");
        c.hourly_divisor = HourlyDivisor::CalendarDerived;
        c.weekly_hours = Some(45);

        let result = gross(&c, &worked_days(10, "9"));

        // February 2026: 20 working days x 9 hours = 180 expected hours
        assert_eq!(result.divisor, Some(dec("180")));
        assert_eq!(result.hourly_rate, Some(dec("200")));
        assert_eq!(result.gross.base_pay, dec("18000.00"));
    }

    #[test]
    fn test_hourly_calendar_divisor_defaults_to_45_hours() {
        let mut c = contract(ContractType::Hourly, "36000");
        c.hourly_divisor = HourlyDivisor::CalendarDerived;

        let result = gross(&c, &[]);
        assert_eq!(result.divisor, Some(dec("180")));
    }

    /// GP-003: overtime at 1.5x and 2.0x the hourly rate
    #[test]
    fn test_hourly_overtime() {
        let mut c = contract(ContractType::Hourly, "20800");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("208".to_string());

        let mut day = AttendanceDay::worked(feb(2), dec("8"));
        day.hours_ot_1_5 = dec("2");
        day.hours_ot_2_0 = dec("3");

        let result = gross(&c, &[day]);
        assert_eq!(result.hourly_rate, Some(dec("100")));
        assert_eq!(result.gross.base_pay, dec("800.00"));
        assert_eq!(result.gross.overtime_1_5, dec("300.00"));
        assert_eq!(result.gross.overtime_2_0, dec("600.00"));
        assert_eq!(result.gross.total_gross, dec("1700.00"));
    }

    /// GP-004: housing allowance on base basis covers base plus overtime
    #[test]
    fn test_hourly_housing_allowance_on_base_basis() {
        let mut c = contract(ContractType::Hourly, "20800");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("208".to_string());
        c.housing = HousingArrangement::CashAllowanceRequired;

        let mut day = AttendanceDay::worked(feb(2), dec("8"));
        day.hours_ot_1_5 = dec("2");

        let result = gross(&c, &[day]);
        assert_eq!(result.gross.housing_allowance, dec("165.00"));
        assert_eq!(result.gross.total_gross, dec("1265.00"));
    }

    /// GP-005: gross basis back-scales every component
    #[test]
    fn test_hourly_housing_allowance_on_gross_basis() {
        let mut c = contract(ContractType::Hourly, "23920");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("208".to_string());
        c.housing = HousingArrangement::CashAllowanceRequired;
        c.salary_basis = SalaryBasis::StatedAmountIsGross;

        let mut day = AttendanceDay::worked(feb(2), dec("8"));
        day.hours_ot_1_5 = dec("2");

        // rate 115/h: earned 920 + 345 = 1265
        let result = gross(&c, &[day]);
        assert_eq!(result.gross.total_gross, dec("1265.00"));
        assert_eq!(result.gross.base_pay, dec("800.00"));
        assert_eq!(result.gross.overtime_1_5, dec("300.00"));
        assert_eq!(result.gross.housing_allowance, dec("165.00"));
    }

    #[test]
    fn test_unparsable_override_falls_back_when_lenient() {
        let mut c = contract(ContractType::Hourly, "22533.33");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("two hundred".to_string());

        let result = gross(&c, &worked_days(1, "9"));
        assert_eq!(result.divisor, Some(statutory_divisor()));
    }

    #[test]
    fn test_non_positive_override_falls_back_when_lenient() {
        let mut c = contract(ContractType::Hourly, "22533.33");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("0".to_string());

        let result = gross(&c, &[]);
        assert_eq!(result.divisor, Some(statutory_divisor()));

        c.hourly_divisor = HourlyDivisor::ExplicitOverride("-10".to_string());
        let result = gross(&c, &[]);
        assert_eq!(result.divisor, Some(statutory_divisor()));
    }

    #[test]
    fn test_unparsable_override_rejected_when_strict() {
        let mut c = contract(ContractType::Hourly, "22533.33");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("abc".to_string());

        let result = calculate_gross_pay(
            &c,
            &[],
            payroll_date(),
            &HolidayCalendar::kenya(),
            DivisorFallback::Strict,
        );

        match result {
            Err(EngineError::InvalidContract { field, message }) => {
                assert_eq!(field, "hourly_divisor");
                assert!(message.contains("abc"));
            }
            other => panic!("Expected InvalidContract, got {:?}", other),
        }
    }

    /// GP-006: fixed monthly pay ignores hours and overtime
    #[test]
    fn test_fixed_monthly_ignores_attendance() {
        let c = contract(ContractType::FixedMonthly, "30000");
        let mut day = AttendanceDay::worked(feb(2), dec("9"));
        day.hours_ot_1_5 = dec("4");

        let result = gross(&c, &[day]);
        assert_eq!(result.gross.base_pay, dec("30000.00"));
        assert_eq!(result.gross.overtime_1_5, Decimal::ZERO);
        assert_eq!(result.gross.total_gross, dec("30000.00"));
        assert_eq!(result.hourly_rate, None);
    }

    #[test]
    fn test_fixed_monthly_gross_basis_splits_stated_amount() {
        let mut c = contract(ContractType::FixedMonthly, "30000");
        c.housing = HousingArrangement::CashAllowanceRequired;
        c.salary_basis = SalaryBasis::StatedAmountIsGross;

        let result = gross(&c, &[]);
        assert_eq!(result.gross.base_pay, dec("26086.96"));
        assert_eq!(result.gross.housing_allowance, dec("3913.04"));
        assert_eq!(result.gross.total_gross, dec("30000.00"));
    }

    /// GP-007: prorated minimum wage scales by hours over weekly x 4
    #[test]
    fn test_prorated_minimum_wage() {
        let mut c = contract(ContractType::ProratedMinimumWage, "16113.75");
        c.weekly_hours = Some(20);

        // 40 of 80 standard hours
        let result = gross(&c, &worked_days(10, "4"));
        assert_eq!(result.gross.base_pay, dec("8056.88"));
        assert_eq!(result.gross.total_gross, dec("8056.88"));
    }

    #[test]
    fn test_prorated_minimum_wage_ignores_overtime() {
        let mut c = contract(ContractType::ProratedMinimumWage, "16000");
        c.weekly_hours = Some(20);
        let mut day = AttendanceDay::worked(feb(2), dec("8"));
        day.hours_ot_2_0 = dec("5");

        let result = gross(&c, &[day]);
        assert_eq!(result.gross.base_pay, dec("1600.00"));
        assert_eq!(result.gross.overtime_2_0, Decimal::ZERO);
    }

    #[test]
    fn test_prorated_without_weekly_hours_is_invalid() {
        for hours in [None, Some(0)] {
            let mut c = contract(ContractType::ProratedMinimumWage, "16113.75");
            c.weekly_hours = hours;

            let result = calculate_gross_pay(
                &c,
                &[],
                payroll_date(),
                &HolidayCalendar::kenya(),
                DivisorFallback::Lenient,
            );
            match result {
                Err(EngineError::InvalidContract { field, .. }) => assert_eq!(field, "weekly_hours"),
                other => panic!("Expected InvalidContract, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_base_and_gross_interpretations_agree() {
        let mut as_base = contract(ContractType::FixedMonthly, "40000");
        as_base.housing = HousingArrangement::CashAllowanceRequired;

        let mut as_gross = as_base.clone();
        as_gross.base_salary = dec("46000");
        as_gross.salary_basis = SalaryBasis::StatedAmountIsGross;

        let base_result = gross(&as_base, &[]);
        let gross_result = gross(&as_gross, &[]);
        assert_eq!(base_result.gross.total_gross, gross_result.gross.total_gross);
        assert_eq!(base_result.gross.base_pay, gross_result.gross.base_pay);
        assert_eq!(
            base_result.gross.housing_allowance,
            gross_result.gross.housing_allowance
        );
    }

    fn try_gross(contract: &Contract, days: &[AttendanceDay]) -> EngineResult<GrossPayResult> {
        calculate_gross_pay(
            contract,
            days,
            payroll_date(),
            &HolidayCalendar::kenya(),
            DivisorFallback::Lenient,
        )
    }

    /// GP-010: a tiny positive divisor override is an error, not a panic
    #[test]
    fn test_tiny_divisor_override_is_out_of_range() {
        let mut c = contract(ContractType::Hourly, "30000");
        c.hourly_divisor =
            HourlyDivisor::ExplicitOverride("0.0000000000000000000000001".to_string());

        match try_gross(&c, &worked_days(20, "8")) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("out of range"))
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    /// GP-011: hourly pay that overflows once multiplied by hours is rejected
    #[test]
    fn test_hourly_pay_overflow_is_rejected() {
        let mut c = contract(ContractType::Hourly, "30000");
        c.hourly_divisor = HourlyDivisor::ExplicitOverride("0.000000000000000000001".to_string());

        assert!(matches!(
            try_gross(&c, &worked_days(20, "8")),
            Err(EngineError::CalculationError { .. })
        ));
    }

    /// GP-012: salaries above the earned pay ceiling are rejected
    #[test]
    fn test_salary_above_ceiling_is_rejected() {
        let c = contract(ContractType::FixedMonthly, "1000000000000000.01");
        assert!(matches!(
            try_gross(&c, &[]),
            Err(EngineError::CalculationError { .. })
        ));

        let at_ceiling = contract(ContractType::FixedMonthly, "1000000000000000");
        assert_eq!(gross(&at_ceiling, &[]).gross.total_gross, MAX_EARNED_PAY);
    }

    /// GP-013: very large weekly hours do not overflow the standard month
    #[test]
    fn test_prorated_huge_weekly_hours() {
        let mut c = contract(ContractType::ProratedMinimumWage, "16113.75");
        c.weekly_hours = Some(u32::MAX);

        let result = gross(&c, &worked_days(1, "8"));
        assert!(result.gross.base_pay >= Decimal::ZERO);
        assert!(result.gross.base_pay < dec("0.01"));
    }

    #[test]
    fn test_statutory_divisor_value() {
        assert_eq!(statutory_divisor().round_dp(4), dec("225.3333"));
    }
}
