//! Plain-text payslip statement.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::models::PaySlip;
use crate::money::format_grouped;

const WIDTH: usize = 60;

/// Renders a fixed-layout, human-readable payslip.
///
/// Sections: header, employee, work summary, leave used (only when leave
/// was drawn), earnings, deductions, net pay and warnings (only when there
/// are any). Optional earnings lines are printed only when non-zero.
pub fn render_payslip(payslip: &PaySlip) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(WIDTH);

    line(&mut out, &heavy);
    line(&mut out, &format!("PAYSLIP - {}", payslip.period));
    line(&mut out, &heavy);
    line(&mut out, "");

    let employee = &payslip.employee;
    line(&mut out, &format!("Employee:    {}", employee.name));
    line(&mut out, &format!("ID:          {}", employee.id));
    line(&mut out, &format!("KRA PIN:     {}", employee.kra_pin));
    line(&mut out, &format!("Bank A/C:    {}", employee.bank_account));
    line(&mut out, "");

    section(&mut out, "WORK SUMMARY");
    let total_normal: Decimal = payslip.attendance.iter().map(|d| d.hours_normal).sum();
    let total_ot_1_5: Decimal = payslip.attendance.iter().map(|d| d.hours_ot_1_5).sum();
    let total_ot_2_0: Decimal = payslip.attendance.iter().map(|d| d.hours_ot_2_0).sum();
    line(&mut out, &format!("Days worked:     {}", payslip.days_worked()));
    line(&mut out, &format!("Normal hours:    {}", total_normal.normalize()));
    if total_ot_1_5 > Decimal::ZERO {
        line(&mut out, &format!("Overtime @1.5x:  {}", total_ot_1_5.normalize()));
    }
    if total_ot_2_0 > Decimal::ZERO {
        line(&mut out, &format!("Overtime @2.0x:  {}", total_ot_2_0.normalize()));
    }
    line(&mut out, "");

    let leave = &payslip.leave;
    if leave.has_leave() {
        section(&mut out, "LEAVE USED");
        for (label, days) in [
            ("Sick (full pay):", leave.sick_full_pay_used),
            ("Sick (half pay):", leave.sick_half_pay_used),
            ("Annual leave:", leave.annual_leave_used),
            ("Unpaid:", leave.unpaid_days),
        ] {
            if days > 0 {
                line(&mut out, &format!("{:<19}{} days", label, days));
            }
        }
        line(&mut out, "");
    }

    let gross = &payslip.gross;
    section(&mut out, "EARNINGS");
    amount(&mut out, "Base pay:", gross.base_pay);
    if gross.overtime_1_5 > Decimal::ZERO {
        amount(&mut out, "Overtime @1.5x:", gross.overtime_1_5);
    }
    if gross.overtime_2_0 > Decimal::ZERO {
        amount(&mut out, "Overtime @2.0x:", gross.overtime_2_0);
    }
    if gross.housing_allowance > Decimal::ZERO {
        amount(&mut out, "Housing allowance:", gross.housing_allowance);
    }
    if gross.housing_benefit > Decimal::ZERO {
        line(
            &mut out,
            &format!(
                "{:<21}{:>12} (non-cash)",
                "Housing benefit:",
                format_grouped(gross.housing_benefit)
            ),
        );
    }
    rule(&mut out);
    amount(&mut out, "GROSS PAY:", gross.total_gross);
    line(&mut out, "");

    let d = &payslip.deductions;
    section(&mut out, "DEDUCTIONS");
    amount(&mut out, "NSSF Tier 1:", d.pension_tier_1);
    amount(&mut out, "NSSF Tier 2:", d.pension_tier_2);
    amount(&mut out, "SHIF:", d.health_insurance);
    amount(&mut out, "AHL:", d.housing_levy);
    amount(&mut out, "PAYE:", d.income_tax);
    rule(&mut out);
    amount(&mut out, "TOTAL DEDUCTIONS:", d.total);
    line(&mut out, "");

    line(&mut out, &heavy);
    amount(&mut out, "NET PAY:", payslip.net_pay);
    out.push_str(&heavy);

    if !payslip.warnings.is_empty() {
        out.push('\n');
        line(&mut out, "");
        out.push_str("WARNINGS:");
        for warning in &payslip.warnings {
            let _ = write!(out, "\n  * {}", warning);
        }
    }

    out
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn section(out: &mut String, title: &str) {
    let light = "-".repeat(WIDTH);
    line(out, &light);
    line(out, title);
    line(out, &light);
}

fn amount(out: &mut String, label: &str, value: Decimal) {
    line(out, &format!("{:<21}{:>12}", label, format_grouped(value)));
}

fn rule(out: &mut String) {
    line(out, &format!("{:<21}{}", "", "-".repeat(12)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PayrollEngine;
    use crate::models::{
        AttendanceDay, Contract, ContractStatus, ContractType, Employee, HourlyDivisor,
        HousingArrangement, LeaveBalance, PensionTier, SalaryBasis,
    };
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn feb(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn payslip(salary: &str, attendance: Vec<AttendanceDay>) -> PaySlip {
        let employee = Employee {
            id: "1".to_string(),
            name: "Alice Wanjiku".to_string(),
            national_id: "12345678".to_string(),
            kra_pin: "A001234567B".to_string(),
            phone: String::new(),
            bank_account: "0123456789012".to_string(),
        };
        let contract = Contract {
            contract_type: ContractType::FixedMonthly,
            base_salary: dec(salary),
            weekly_hours: None,
            housing: HousingArrangement::CashAllowanceRequired,
            housing_market_value: None,
            pension_tier: PensionTier::Standard,
            hourly_divisor: HourlyDivisor::default(),
            salary_basis: SalaryBasis::StatedAmountIsGross,
            start_date: None,
            end_date: None,
            status: ContractStatus::Active,
        };
        let balance = LeaveBalance {
            employee_id: "1".to_string(),
            sick_full_pay: 7,
            sick_half_pay: 7,
            annual_leave: 21,
            as_of_date: feb(1),
        };
        PayrollEngine::new(feb(28))
            .unwrap()
            .process(&employee, &contract, &attendance, &balance)
            .unwrap()
    }

    #[test]
    fn test_payslip_layout() {
        let text = render_payslip(&payslip(
            "30000",
            vec![
                AttendanceDay::worked(feb(2), dec("8")),
                AttendanceDay::worked(feb(3), dec("8")),
            ],
        ));

        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("PAYSLIP - February 2026"));
        assert!(text.contains("Employee:    Alice Wanjiku"));
        assert!(text.contains("Days worked:     2"));
        assert!(text.contains("Normal hours:    16"));
        assert!(text.contains("Housing allowance:       3,913.04"));
        assert!(text.contains("GROSS PAY:              30,000.00"));
        assert!(text.contains("PAYE:                      731.25"));
        assert!(text.contains("NET PAY:                26,193.75"));
        assert!(!text.contains("LEAVE USED"));
        assert!(!text.contains("Overtime"));
        assert!(!text.contains("WARNINGS"));
        assert!(text.ends_with(&"=".repeat(60)));
    }

    #[test]
    fn test_leave_section_only_lists_drawn_categories() {
        let text = render_payslip(&payslip(
            "30000",
            vec![
                AttendanceDay::absent(feb(2), true),
                AttendanceDay::absent(feb(3), false),
            ],
        ));

        assert!(text.contains("LEAVE USED"));
        assert!(text.contains("Sick (full pay):   1 days"));
        assert!(text.contains("Annual leave:      1 days"));
        assert!(!text.contains("Unpaid:"));
    }

    #[test]
    fn test_warnings_are_listed_last() {
        let text = render_payslip(&payslip("12000", vec![]));

        let warnings_at = text.find("WARNINGS:").unwrap();
        assert!(warnings_at > text.find("NET PAY:").unwrap());
        assert!(text.contains("  * Base pay KES"));
    }
}
