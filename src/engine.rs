//! Payroll orchestration.
//!
//! The [`PayrollEngine`] sequences the calculators into one reconciled
//! [`PaySlip`] per employee per period, in a fixed order:
//!
//! 1. leave allocation
//! 2. gross pay
//! 3. leave proration (fixed monthly contracts)
//! 4. housing benefit
//! 5. statutory deductions
//! 6. chargeable pay
//! 7. income tax
//! 8. deductions total
//! 9. net pay
//! 10. minimum wage check
//! 11. payslip assembly
//!
//! The engine holds only immutable data, so one instance can be shared
//! across threads; [`PayrollEngine::process_batch`] uses `rayon` to run
//! employees in parallel.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::calculation::{
    DivisorFallback, allocate_leave, apply_leave_proration, calculate_deductions,
    calculate_gross_pay, calculate_housing_benefit, calculate_income_tax, period_label,
    validate_minimum_wage,
};
use crate::config::{PayrollConfig, StatutoryRateSnapshot};
use crate::error::EngineResult;
use crate::models::{
    AttendanceDay, AttendanceTotals, AuditStep, AuditTrace, Contract, ContractType, Deductions,
    Employee, GrossBreakdown, LeaveBalance, PaySlip,
};

/// Options that change how the engine treats questionable input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Policy for hourly divisor overrides that are not positive numbers.
    #[serde(default)]
    pub divisor_fallback: DivisorFallback,
}

/// Everything the engine needs to compute one employee's payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee to pay.
    pub employee: Employee,
    /// The employee's contract.
    pub contract: Contract,
    /// The period's attendance records.
    pub attendance: Vec<AttendanceDay>,
    /// The leave balance brought forward.
    pub leave_balance: LeaveBalance,
}

/// Computes payslips for a single payroll date.
///
/// # Example
///
/// ```
/// use kenya_payroll::engine::PayrollEngine;
/// use chrono::NaiveDate;
///
/// let engine = PayrollEngine::new(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()).unwrap();
/// assert_eq!(engine.period(), "February 2026");
/// assert_eq!(engine.rates().name, "NSSF Year 4");
///
/// // No regime was in force before February 2025.
/// assert!(PayrollEngine::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    payroll_date: NaiveDate,
    rates: StatutoryRateSnapshot,
    config: Arc<PayrollConfig>,
    options: EngineOptions,
}

impl PayrollEngine {
    /// Creates an engine for `payroll_date` with the built-in Kenyan
    /// configuration and default options.
    ///
    /// # Returns
    ///
    /// Returns `RateRegimeNotFound` if no rate regime covers the date.
    pub fn new(payroll_date: NaiveDate) -> EngineResult<Self> {
        Self::with_config(
            payroll_date,
            Arc::new(PayrollConfig::kenya()),
            EngineOptions::default(),
        )
    }

    /// Creates an engine for `payroll_date` with an explicit configuration.
    ///
    /// The rate snapshot is resolved once, here.
    pub fn with_config(
        payroll_date: NaiveDate,
        config: Arc<PayrollConfig>,
        options: EngineOptions,
    ) -> EngineResult<Self> {
        let rates = config.rates.rates_for(payroll_date)?.clone();
        debug!(
            payroll_date = %payroll_date,
            regime = %rates.name,
            "Resolved statutory rates"
        );
        Ok(Self {
            payroll_date,
            rates,
            config,
            options,
        })
    }

    /// The payroll date the engine was built for.
    pub fn payroll_date(&self) -> NaiveDate {
        self.payroll_date
    }

    /// The rates in force on the payroll date.
    pub fn rates(&self) -> &StatutoryRateSnapshot {
        &self.rates
    }

    /// The period label printed on payslips, e.g. "February 2026".
    pub fn period(&self) -> String {
        period_label(self.payroll_date)
    }

    /// Computes one employee's payslip.
    ///
    /// # Returns
    ///
    /// Returns an error only for contracts the calculators cannot price:
    /// a prorated contract without weekly hours, or an unusable divisor
    /// override under [`DivisorFallback::Strict`].
    pub fn process(
        &self,
        employee: &Employee,
        contract: &Contract,
        attendance_days: &[AttendanceDay],
        leave_balance: &LeaveBalance,
    ) -> EngineResult<PaySlip> {
        let start_time = Instant::now();
        let mut audit = AuditRecorder::default();
        let totals = AttendanceTotals::from_days(attendance_days);

        // 1. Leave
        let leave = allocate_leave(attendance_days, leave_balance);
        audit.record(
            "leave_allocation",
            "Leave allocation",
            "Employment Act 2007 s.28, s.30",
            json!({
                "absent_days": totals.days_absent,
                "balance": leave_balance,
            }),
            json!({
                "sick_full_pay_used": leave.sick_full_pay_used,
                "sick_half_pay_used": leave.sick_half_pay_used,
                "annual_leave_used": leave.annual_leave_used,
                "unpaid_days": leave.unpaid_days,
            }),
            format!(
                "{} absent day(s): {} full-pay sick, {} half-pay sick, {} annual, {} unpaid",
                totals.days_absent,
                leave.sick_full_pay_used,
                leave.sick_half_pay_used,
                leave.annual_leave_used,
                leave.unpaid_days
            ),
        );

        // 2. Gross
        let gross_result = calculate_gross_pay(
            contract,
            attendance_days,
            self.payroll_date,
            &self.config.holidays,
            self.options.divisor_fallback,
        )?;
        audit.record(
            "gross_pay",
            "Gross pay",
            "Employment Act 2007 s.31",
            json!({
                "contract_type": contract.contract_type,
                "base_salary": contract.base_salary,
                "housing": contract.housing,
                "salary_basis": contract.salary_basis,
                "hours_normal": totals.hours_normal,
                "hours_ot_1_5": totals.hours_ot_1_5,
                "hours_ot_2_0": totals.hours_ot_2_0,
                "divisor": gross_result.divisor,
                "hourly_rate": gross_result.hourly_rate,
            }),
            gross_json(&gross_result.gross),
            format!(
                "{} contract: cash gross {}",
                contract.contract_type, gross_result.gross.total_gross
            ),
        );

        // 3. Proration
        let gross = match contract.contract_type {
            ContractType::FixedMonthly => {
                let prorated = apply_leave_proration(&gross_result.gross, &leave);
                audit.record(
                    "leave_proration",
                    "Leave proration",
                    "Employment Act 2007 s.30",
                    json!({
                        "base_pay": gross_result.gross.base_pay,
                        "sick_half_pay_days": leave.sick_half_pay_used,
                        "unpaid_days": leave.unpaid_days,
                    }),
                    gross_json(&prorated),
                    format!(
                        "Base reduced from {} to {} at a daily rate of base / 22",
                        gross_result.gross.base_pay, prorated.base_pay
                    ),
                );
                prorated
            }
            ContractType::Hourly | ContractType::ProratedMinimumWage => gross_result.gross,
        };

        // 4. Housing benefit
        let housing_benefit = calculate_housing_benefit(contract, gross.total_gross);
        let gross = GrossBreakdown {
            housing_benefit,
            ..gross
        };
        audit.record(
            "housing_benefit",
            "Housing benefit",
            "Income Tax Act s.5(3)",
            json!({
                "housing": contract.housing,
                "market_value": contract.housing_market_value,
                "total_gross": gross.total_gross,
            }),
            json!({ "housing_benefit": housing_benefit }),
            "Employer-provided housing is valued at the higher of market rent and 15% of cash gross"
                .to_string(),
        );

        // 5. Statutory deductions
        let statutory = calculate_deductions(gross.total_gross, &self.rates, contract);
        audit.record(
            "statutory_deductions",
            "Pension, health insurance and housing levy",
            "NSSF Act 2013; Social Health Insurance Act 2023; Affordable Housing Act 2024",
            json!({
                "total_gross": gross.total_gross,
                "pension_tier": contract.pension_tier,
                "regime": self.rates.name,
            }),
            json!({
                "pension_tier_1": statutory.pension_tier_1,
                "pension_tier_2": statutory.pension_tier_2,
                "health_insurance": statutory.health_insurance,
                "housing_levy": statutory.housing_levy,
            }),
            format!(
                "Pension on earnings up to {} ({}), health insurance floor {}",
                self.rates.pension_upper_limit, self.rates.name, self.rates.health_insurance_floor
            ),
        );

        // 6. Chargeable pay
        let chargeable_pay = gross.total_gross + gross.housing_benefit - statutory.allowable();
        audit.record(
            "chargeable_pay",
            "Chargeable pay",
            "Income Tax Act s.5",
            json!({
                "total_gross": gross.total_gross,
                "housing_benefit": gross.housing_benefit,
                "allowable_deductions": statutory.allowable(),
            }),
            json!({ "chargeable_pay": chargeable_pay }),
            "Cash gross plus housing benefit less pension, health insurance and housing levy"
                .to_string(),
        );

        // 7. Income tax
        let tax = calculate_income_tax(chargeable_pay, &self.rates);
        audit.record(
            "income_tax",
            "Income tax (PAYE)",
            "Income Tax Act Third Schedule",
            json!({ "chargeable_pay": chargeable_pay }),
            json!({
                "tax_before_relief": tax.tax_before_relief,
                "personal_relief": tax.personal_relief,
                "tax_payable": tax.tax_payable,
            }),
            format!(
                "Band tax {} less relief {}",
                tax.tax_before_relief, tax.personal_relief
            ),
        );

        // 8. Deductions total
        let deductions = Deductions {
            income_tax: tax.tax_payable,
            total: statutory.total + tax.tax_payable,
            ..statutory
        };
        audit.record(
            "deductions_total",
            "Total deductions",
            "",
            json!({
                "statutory": statutory.total,
                "income_tax": tax.tax_payable,
            }),
            json!({ "total": deductions.total }),
            "Sum of pension, health insurance, housing levy and income tax".to_string(),
        );

        // 9. Net pay
        let net_pay = gross.total_gross - deductions.total;
        audit.record(
            "net_pay",
            "Net pay",
            "Employment Act 2007 s.19",
            json!({
                "total_gross": gross.total_gross,
                "total_deductions": deductions.total,
            }),
            json!({ "net_pay": net_pay }),
            "Cash gross less total deductions; the housing benefit is not paid out".to_string(),
        );

        // 10. Minimum wage
        let check = validate_minimum_wage(
            gross.base_pay,
            contract,
            totals.hours_normal,
            self.payroll_date,
            &self.rates,
            &self.config.holidays,
        )?;
        audit.record(
            "minimum_wage",
            "Minimum wage check",
            "Regulation of Wages (General) (Amendment) Order",
            json!({
                "base_pay": gross.base_pay,
                "hours_worked": totals.hours_normal,
                "minimum_monthly_wage": self.rates.minimum_monthly_wage,
            }),
            json!({ "is_valid": check.is_valid }),
            check
                .warning
                .clone()
                .unwrap_or_else(|| "Pay meets the statutory minimum".to_string()),
        );
        let warnings: Vec<String> = check.warning.into_iter().collect();
        if !warnings.is_empty() {
            warn!(
                employee_id = %employee.id,
                base_pay = %gross.base_pay,
                "Minimum wage shortfall"
            );
        }

        // 11. Assemble
        let duration_us = start_time.elapsed().as_micros() as u64;
        debug!(
            employee_id = %employee.id,
            gross = %gross.total_gross,
            net_pay = %net_pay,
            duration_us,
            "Payslip computed"
        );

        Ok(PaySlip {
            employee: employee.clone(),
            contract: contract.clone(),
            period: self.period(),
            payroll_date: self.payroll_date,
            gross,
            deductions,
            tax,
            leave,
            net_pay,
            attendance: attendance_days.to_vec(),
            warnings,
            audit_trace: AuditTrace {
                steps: audit.into_steps(),
                duration_us,
            },
        })
    }

    /// Computes one employee's payslip from a [`PayrollInput`].
    pub fn process_input(&self, input: &PayrollInput) -> EngineResult<PaySlip> {
        self.process(
            &input.employee,
            &input.contract,
            &input.attendance,
            &input.leave_balance,
        )
    }

    /// Computes payslips for many employees in parallel.
    ///
    /// Results come back in input order. One employee's failure never
    /// affects another's result.
    pub fn process_batch(&self, inputs: &[PayrollInput]) -> Vec<EngineResult<PaySlip>> {
        let start_time = Instant::now();

        let results: Vec<EngineResult<PaySlip>> = inputs
            .par_iter()
            .map(|input| {
                self.process_input(input).inspect_err(|err| {
                    warn!(
                        employee_id = %input.employee.id,
                        error = %err,
                        "Payslip computation failed"
                    );
                })
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            period = %self.period(),
            employees = inputs.len(),
            failed,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Payroll batch completed"
        );

        results
    }
}

fn gross_json(gross: &GrossBreakdown) -> serde_json::Value {
    json!({
        "base_pay": gross.base_pay,
        "overtime_1_5": gross.overtime_1_5,
        "overtime_2_0": gross.overtime_2_0,
        "housing_allowance": gross.housing_allowance,
        "total_gross": gross.total_gross,
    })
}

/// Collects audit steps with sequential step numbers.
#[derive(Debug, Default)]
struct AuditRecorder {
    steps: Vec<AuditStep>,
}

impl AuditRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        legal_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_ref: legal_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}

/// Total net pay across a run's payslips.
pub fn total_net_pay(payslips: &[PaySlip]) -> Decimal {
    payslips.iter().map(|p| p.net_pay).sum()
}
