//! Statutory deduction calculation functionality.
//!
//! Computes the four percentage-of-gross employee deductions: pension
//! tiers 1 and 2 (NSSF Act 2013), health insurance (SHIF) and the housing
//! levy (AHL). Income tax is left at zero for the tax calculator to fill.

use rust_decimal::Decimal;

use crate::config::StatutoryRateSnapshot;
use crate::models::{Contract, Deductions, PensionTier};
use crate::money::round_money;

/// Calculates the statutory deductions on cash gross.
///
/// - Tier 1: rate x min(gross, lower limit).
/// - Tier 2: rate x max(0, min(gross, upper limit) - lower limit), only for
///   the standard pension tier.
/// - Health insurance: max(rate x gross, floor). The floor applies even
///   when gross is zero.
/// - Housing levy: rate x gross.
///
/// `income_tax` is zero and `total` covers the four amounts above.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_deductions;
/// use kenya_payroll::config::RateTable;
/// use kenya_payroll::models::{
///     Contract, ContractStatus, ContractType, HourlyDivisor, HousingArrangement,
///     PensionTier, SalaryBasis,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::kenya();
/// let rates = table.rates_for(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()).unwrap();
/// let contract = Contract {
///     contract_type: ContractType::FixedMonthly,
///     base_salary: Decimal::from(30000),
///     weekly_hours: None,
///     housing: HousingArrangement::EmployerProvided,
///     housing_market_value: None,
///     pension_tier: PensionTier::Standard,
///     hourly_divisor: HourlyDivisor::default(),
///     salary_basis: SalaryBasis::default(),
///     start_date: None,
///     end_date: None,
///     status: ContractStatus::Active,
/// };
///
/// let deductions = calculate_deductions(Decimal::from(30000), rates, &contract);
/// assert_eq!(deductions.pension_tier_1, Decimal::from(540));
/// assert_eq!(deductions.pension_tier_2, Decimal::from(1260));
/// assert_eq!(deductions.health_insurance, Decimal::from(825));
/// assert_eq!(deductions.housing_levy, Decimal::from(450));
/// ```
pub fn calculate_deductions(
    total_cash_gross: Decimal,
    rates: &StatutoryRateSnapshot,
    contract: &Contract,
) -> Deductions {
    let pension_tier_1 =
        round_money(rates.pension_rate * total_cash_gross.min(rates.pension_lower_limit));

    let pension_tier_2 = match contract.pension_tier {
        PensionTier::Standard => {
            let tier_2_earnings = (total_cash_gross.min(rates.pension_upper_limit)
                - rates.pension_lower_limit)
                .max(Decimal::ZERO);
            round_money(rates.pension_rate * tier_2_earnings)
        }
        PensionTier::OptedOut => Decimal::ZERO,
    };

    let health_insurance = round_money(
        (rates.health_insurance_rate * total_cash_gross).max(rates.health_insurance_floor),
    );
    let housing_levy = round_money(rates.housing_levy_rate * total_cash_gross);

    Deductions {
        pension_tier_1,
        pension_tier_2,
        health_insurance,
        housing_levy,
        income_tax: Decimal::ZERO,
        total: pension_tier_1 + pension_tier_2 + health_insurance + housing_levy,
    }
}
