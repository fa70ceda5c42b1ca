//! Housing benefit calculation functionality.
//!
//! Employer-provided housing is a non-cash benefit taxed at the higher of
//! its market rental value and 15% of cash gross (Income Tax Act s.5(3)).
//! The benefit enters chargeable pay only; it is never paid out.

use rust_decimal::Decimal;

use crate::models::{Contract, HousingArrangement};
use crate::money::round_money;

use super::gross_pay::HOUSING_ALLOWANCE_RATE;

/// Calculates the taxable value of employer-provided housing.
///
/// # Arguments
///
/// * `contract` - The employee's contract
/// * `total_cash_gross` - Cash gross for the period
///
/// # Returns
///
/// `max(market value, 15% of cash gross)` for employer-provided housing
/// (a missing market value counts as zero), otherwise zero.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_housing_benefit;
/// use kenya_payroll::models::{
///     Contract, ContractStatus, ContractType, HourlyDivisor, HousingArrangement,
///     PensionTier, SalaryBasis,
/// };
/// use rust_decimal::Decimal;
///
/// let contract = Contract {
///     contract_type: ContractType::FixedMonthly,
///     base_salary: Decimal::from(60000),
///     weekly_hours: None,
///     housing: HousingArrangement::EmployerProvided,
///     housing_market_value: Some(Decimal::from(8000)),
///     pension_tier: PensionTier::Standard,
///     hourly_divisor: HourlyDivisor::default(),
///     salary_basis: SalaryBasis::default(),
///     start_date: None,
///     end_date: None,
///     status: ContractStatus::Active,
/// };
///
/// let benefit = calculate_housing_benefit(&contract, Decimal::from(60000));
/// assert_eq!(benefit, Decimal::from(9000));
/// ```
pub fn calculate_housing_benefit(contract: &Contract, total_cash_gross: Decimal) -> Decimal {
    match contract.housing {
        HousingArrangement::EmployerProvided => {
            let market_value = contract.housing_market_value.unwrap_or(Decimal::ZERO);
            let statutory_value = total_cash_gross * HOUSING_ALLOWANCE_RATE;
            round_money(market_value.max(statutory_value))
        }
        HousingArrangement::CashAllowanceRequired => Decimal::ZERO,
    }
}
