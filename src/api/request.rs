//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/payroll` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    AttendanceDay, Contract, ContractStatus, Employee, HourlyDivisor, HousingArrangement,
    LeaveBalance, PensionTier, SalaryBasis,
};

/// Request body for the `/payroll` endpoint.
///
/// Runs one month's payroll for every listed employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The payroll date; selects the rate regime and the period.
    pub payroll_date: NaiveDate,
    /// The employees to pay.
    pub employees: Vec<EmployeePayrollRequest>,
}

/// One employee's input in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayrollRequest {
    /// The employee's identity.
    pub employee: Employee,
    /// The employee's contract.
    pub contract: ContractRequest,
    /// The leave balance brought forward.
    pub leave_balance: LeaveBalance,
    /// The period's attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceDay>,
}

/// Contract information in a payroll request.
///
/// The contract type is accepted as free text so that an unknown type fails
/// only its own employee rather than the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// The contract type, e.g. "fixed_monthly".
    pub contract_type: String,
    /// The stated monthly salary.
    pub base_salary: Decimal,
    /// Contracted hours per week.
    #[serde(default)]
    pub weekly_hours: Option<u32>,
    /// Housing arrangement.
    pub housing: HousingArrangement,
    /// Market rental value of employer-provided housing.
    #[serde(default)]
    pub housing_market_value: Option<Decimal>,
    /// Pension tier election.
    pub pension_tier: PensionTier,
    /// Hourly divisor policy.
    #[serde(default)]
    pub hourly_divisor: HourlyDivisor,
    /// Interpretation of the stated salary.
    #[serde(default)]
    pub salary_basis: SalaryBasis,
    /// First day the contract is in force.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day the contract is in force.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the contract is in force.
    #[serde(default)]
    pub status: ContractStatus,
}

impl TryFrom<ContractRequest> for Contract {
    type Error = EngineError;

    fn try_from(req: ContractRequest) -> Result<Self, Self::Error> {
        Ok(Contract {
            contract_type: req.contract_type.parse()?,
            base_salary: req.base_salary,
            weekly_hours: req.weekly_hours,
            housing: req.housing,
            housing_market_value: req.housing_market_value,
            pension_tier: req.pension_tier,
            hourly_divisor: req.hourly_divisor,
            salary_basis: req.salary_basis,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
        })
    }
}

impl From<Contract> for ContractRequest {
    fn from(contract: Contract) -> Self {
        ContractRequest {
            contract_type: contract.contract_type.to_string(),
            base_salary: contract.base_salary,
            weekly_hours: contract.weekly_hours,
            housing: contract.housing,
            housing_market_value: contract.housing_market_value,
            pension_tier: contract.pension_tier,
            hourly_divisor: contract.hourly_divisor,
            salary_basis: contract.salary_basis,
            start_date: contract.start_date,
            end_date: contract.end_date,
            status: contract.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContractType;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "payroll_date": "2026-02-28",
            "employees": [{
                "employee": {
                    "employee_id": "1",
                    "name": "Alice Wanjiku",
                    "national_id": "12345678",
                    "kra_pin": "A001234567B",
                    "bank_account": "0123456789012"
                },
                "contract": {
                    "contract_type": "fixed_monthly",
                    "base_salary": "30000",
                    "housing": "none",
                    "pension_tier": "standard"
                },
                "leave_balance": {
                    "employee_id": "1",
                    "sick_full_pay": 7,
                    "sick_half_pay": 7,
                    "annual_leave": 21,
                    "as_of_date": "2026-01-31"
                }
            }]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employees.len(), 1);
        assert!(request.employees[0].attendance.is_empty());

        let contract = Contract::try_from(request.employees[0].contract.clone()).unwrap();
        assert_eq!(contract.contract_type, ContractType::FixedMonthly);
        assert_eq!(contract.salary_basis, SalaryBasis::StatedAmountIsGross);
    }

    #[test]
    fn test_unknown_contract_type_fails_conversion() {
        let request = ContractRequest {
            contract_type: "casual".to_string(),
            base_salary: Decimal::from(30000),
            weekly_hours: None,
            housing: HousingArrangement::CashAllowanceRequired,
            housing_market_value: None,
            pension_tier: PensionTier::Standard,
            hourly_divisor: HourlyDivisor::default(),
            salary_basis: SalaryBasis::default(),
            start_date: None,
            end_date: None,
            status: ContractStatus::Active,
        };

        assert!(matches!(
            Contract::try_from(request),
            Err(EngineError::UnknownContractType { .. })
        ));
    }
}
