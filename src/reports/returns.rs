//! CSV files for the bank, the tax authority, the pension fund and the
//! health insurance fund.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::PaySlip;
use crate::money::format_amount;

/// Header of the bank transfer file.
pub const BANK_FILE_HEADER: [&str; 4] = ["Account Number", "Beneficiary Name", "Amount", "Reference"];

/// Header of the monthly PAYE return (P10).
pub const TAX_RETURN_HEADER: [&str; 12] = [
    "KRA PIN",
    "Employee Name",
    "National ID",
    "Gross Pay",
    "NSSF Employee",
    "SHIF",
    "AHL",
    "Housing Benefit",
    "Chargeable Pay",
    "PAYE Tax",
    "Personal Relief",
    "PAYE Payable",
];

/// Header of the pension fund return.
pub const PENSION_RETURN_HEADER: [&str; 11] = [
    "National ID",
    "KRA PIN",
    "Employee Name",
    "Gross Salary",
    "NSSF Tier 1 Employee",
    "NSSF Tier 1 Employer",
    "NSSF Tier 2 Employee",
    "NSSF Tier 2 Employer",
    "Total Employee",
    "Total Employer",
    "Total Contribution",
];

/// Header of the health insurance fund return.
pub const HEALTH_RETURN_HEADER: [&str; 4] =
    ["National ID", "Employee Name", "Gross Salary", "SHIF Contribution"];

/// Bank transfer file: one net-pay row per payslip, referenced
/// `Salary <period>`.
///
/// # Examples
///
/// ```
/// use kenya_payroll::reports::bank_transfer_csv;
///
/// assert_eq!(
///     bank_transfer_csv(&[]).unwrap(),
///     "Account Number,Beneficiary Name,Amount,Reference\r\n"
/// );
/// ```
pub fn bank_transfer_csv(payslips: &[PaySlip]) -> EngineResult<String> {
    write_csv("bank transfer file", &BANK_FILE_HEADER, payslips, |ps| {
        vec![
            ps.employee.bank_account.clone(),
            ps.employee.name.clone(),
            format_amount(ps.net_pay),
            format!("Salary {}", ps.period),
        ]
    })
}

/// PAYE return (P10), taken from each payslip's tax computation.
pub fn tax_return_csv(payslips: &[PaySlip]) -> EngineResult<String> {
    write_csv("tax return", &TAX_RETURN_HEADER, payslips, |ps| {
        vec![
            ps.employee.kra_pin.clone(),
            ps.employee.name.clone(),
            ps.employee.national_id.clone(),
            format_amount(ps.gross.total_gross),
            format_amount(ps.deductions.pension_total()),
            format_amount(ps.deductions.health_insurance),
            format_amount(ps.deductions.housing_levy),
            format_amount(ps.gross.housing_benefit),
            format_amount(ps.tax.chargeable_pay),
            format_amount(ps.tax.tax_before_relief),
            format_amount(ps.tax.personal_relief),
            format_amount(ps.tax.tax_payable),
        ]
    })
}

/// Pension fund return. The employer contribution mirrors the employee's
/// in both tiers.
pub fn pension_return_csv(payslips: &[PaySlip]) -> EngineResult<String> {
    write_csv("pension return", &PENSION_RETURN_HEADER, payslips, |ps| {
        let tier_1 = ps.deductions.pension_tier_1;
        let tier_2 = ps.deductions.pension_tier_2;
        let employee_total = tier_1 + tier_2;
        let employer_total = tier_1 + tier_2;
        vec![
            ps.employee.national_id.clone(),
            ps.employee.kra_pin.clone(),
            ps.employee.name.clone(),
            format_amount(ps.gross.total_gross),
            format_amount(tier_1),
            format_amount(tier_1),
            format_amount(tier_2),
            format_amount(tier_2),
            format_amount(employee_total),
            format_amount(employer_total),
            format_amount(employee_total + employer_total),
        ]
    })
}

/// Health insurance fund return.
pub fn health_return_csv(payslips: &[PaySlip]) -> EngineResult<String> {
    write_csv("health return", &HEALTH_RETURN_HEADER, payslips, |ps| {
        vec![
            ps.employee.national_id.clone(),
            ps.employee.name.clone(),
            format_amount(ps.gross.total_gross),
            format_amount(ps.deductions.health_insurance),
        ]
    })
}

fn write_csv<F>(report: &str, header: &[&str], payslips: &[PaySlip], row: F) -> EngineResult<String>
where
    F: Fn(&PaySlip) -> Vec<String>,
{
    let render_error = |message: String| EngineError::Render {
        report: report.to_string(),
        message,
    };

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(header)
        .map_err(|e| render_error(e.to_string()))?;
    for payslip in payslips {
        writer
            .write_record(row(payslip))
            .map_err(|e| render_error(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| render_error(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| render_error(e.to_string()))
}
