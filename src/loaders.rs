//! Tab-separated input loading.
//!
//! A payroll data directory holds three files with a header row each:
//! `employees.tsv`, `contracts.tsv` and `leave_balances.tsv`. Timesheets
//! live in their own directory, one file per month named `YYYY_MM.tsv`.
//!
//! Rows are read as raw text and converted field by field, so an empty
//! cell reads as "absent" and every parse failure names the file it came
//! from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::calculation::month_bounds;
use crate::engine::PayrollInput;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceDay, Contract, ContractStatus, ContractType, Employee, HourlyDivisor,
    HousingArrangement, LeaveBalance, PensionTier, SalaryBasis,
};

/// File name of the employee register.
pub const EMPLOYEES_FILE: &str = "employees.tsv";

/// File name of the contract register.
pub const CONTRACTS_FILE: &str = "contracts.tsv";

/// File name of the leave balance register.
pub const LEAVE_BALANCES_FILE: &str = "leave_balances.tsv";

/// Path of the timesheet for a month: `<dir>/YYYY_MM.tsv`.
pub fn timesheet_path(timesheet_dir: impl AsRef<Path>, year: i32, month: u32) -> PathBuf {
    timesheet_dir
        .as_ref()
        .join(format!("{:04}_{:02}.tsv", year, month))
}

#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    employee_id: String,
    name: String,
    national_id: String,
    kra_pin: String,
    #[serde(default)]
    phone: String,
    bank_account: String,
}

/// One row of `contracts.tsv`, before validation.
///
/// Kept as text so an unknown contract type or a bad number fails only the
/// employee it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractRecord {
    /// The employee the contract belongs to.
    pub employee_id: String,
    contract_type: String,
    base_salary: String,
    #[serde(default)]
    weekly_hours: String,
    housing_type: String,
    #[serde(default)]
    housing_market_value: String,
    nssf_tier: String,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    salary_basis: String,
    #[serde(default)]
    hourly_divisor: String,
}

impl ContractRecord {
    /// Converts the row into a [`Contract`].
    ///
    /// Empty optional cells are absent. An empty salary basis reads as
    /// `gross` and an empty divisor as `monthly`.
    pub fn to_contract(&self) -> EngineResult<Contract> {
        let contract_type: ContractType = self.contract_type.parse()?;

        let housing = match self.housing_type.trim().to_lowercase().as_str() {
            "employer_provided" | "quarters" => HousingArrangement::EmployerProvided,
            "cash_allowance_required" | "cash_allowance" | "none" | "" => {
                HousingArrangement::CashAllowanceRequired
            }
            other => return Err(invalid_field("housing_type", other)),
        };

        let pension_tier = match self.nssf_tier.trim().to_lowercase().as_str() {
            "standard" | "" => PensionTier::Standard,
            "opted_out" | "opt_out" => PensionTier::OptedOut,
            other => return Err(invalid_field("nssf_tier", other)),
        };

        let salary_basis = match self.salary_basis.trim().to_lowercase().as_str() {
            "gross" | "stated_amount_is_gross" | "" => SalaryBasis::StatedAmountIsGross,
            "base" | "stated_amount_is_base" => SalaryBasis::StatedAmountIsBase,
            other => return Err(invalid_field("salary_basis", other)),
        };

        let status = match self.status.trim().to_lowercase().as_str() {
            "active" | "" => ContractStatus::Active,
            "inactive" | "terminated" | "suspended" => ContractStatus::Inactive,
            other => return Err(invalid_field("status", other)),
        };

        let hourly_divisor = if self.hourly_divisor.trim().is_empty() {
            HourlyDivisor::CalendarDerived
        } else {
            HourlyDivisor::from(self.hourly_divisor.clone())
        };

        Ok(Contract {
            contract_type,
            base_salary: parse_decimal("base_salary", &self.base_salary)?,
            weekly_hours: optional(&self.weekly_hours)
                .map(|raw| {
                    raw.parse::<u32>()
                        .map_err(|_| invalid_field("weekly_hours", raw))
                })
                .transpose()?,
            housing,
            housing_market_value: optional(&self.housing_market_value)
                .map(|raw| parse_decimal("housing_market_value", raw))
                .transpose()?,
            pension_tier,
            hourly_divisor,
            salary_basis,
            start_date: optional(&self.start_date)
                .map(|raw| parse_date("start_date", raw))
                .transpose()?,
            end_date: optional(&self.end_date)
                .map(|raw| parse_date("end_date", raw))
                .transpose()?,
            status,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LeaveBalanceRecord {
    employee_id: String,
    sick_full_pay: u32,
    sick_half_pay: u32,
    annual_leave: u32,
    as_of_date: String,
}

#[derive(Debug, Deserialize)]
struct TimesheetRecord {
    employee_id: String,
    date: String,
    hours_normal: String,
    #[serde(default)]
    hours_ot_1_5: String,
    #[serde(default)]
    hours_ot_2_0: String,
    #[serde(default)]
    absent: String,
    #[serde(default)]
    sick: String,
}

/// One timesheet row tagged with its employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetEntry {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The attendance record.
    pub day: AttendanceDay,
}

/// Loads the employee register.
pub fn load_employees(path: impl AsRef<Path>) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    read_records::<EmployeeRecord>(path).map(|records| {
        records
            .into_iter()
            .map(|r| Employee {
                id: r.employee_id,
                name: r.name,
                national_id: r.national_id,
                kra_pin: r.kra_pin,
                phone: r.phone,
                bank_account: r.bank_account,
            })
            .collect()
    })
}

/// Loads the contract register as unvalidated rows.
pub fn load_contracts(path: impl AsRef<Path>) -> EngineResult<Vec<ContractRecord>> {
    read_records(path.as_ref())
}

/// Loads the leave balance register.
pub fn load_leave_balances(path: impl AsRef<Path>) -> EngineResult<Vec<LeaveBalance>> {
    let path = path.as_ref();
    read_records::<LeaveBalanceRecord>(path)?
        .into_iter()
        .map(|r| {
            Ok(LeaveBalance {
                employee_id: r.employee_id,
                sick_full_pay: r.sick_full_pay,
                sick_half_pay: r.sick_half_pay,
                annual_leave: r.annual_leave,
                as_of_date: parse_date("as_of_date", &r.as_of_date)
                    .map_err(|e| data_load(path, e))?,
            })
        })
        .collect()
}

/// Loads a monthly timesheet. `absent` and `sick` are true only for `1`.
pub fn load_timesheet(path: impl AsRef<Path>) -> EngineResult<Vec<TimesheetEntry>> {
    let path = path.as_ref();
    read_records::<TimesheetRecord>(path)?
        .into_iter()
        .map(|r| {
            let day = AttendanceDay {
                date: parse_date("date", &r.date).map_err(|e| data_load(path, e))?,
                hours_normal: parse_hours("hours_normal", &r.hours_normal)
                    .map_err(|e| data_load(path, e))?,
                hours_ot_1_5: parse_hours("hours_ot_1_5", &r.hours_ot_1_5)
                    .map_err(|e| data_load(path, e))?,
                hours_ot_2_0: parse_hours("hours_ot_2_0", &r.hours_ot_2_0)
                    .map_err(|e| data_load(path, e))?,
                absent: r.absent.trim() == "1",
                sick: r.sick.trim() == "1",
            };
            Ok(TimesheetEntry {
                employee_id: r.employee_id,
                day,
            })
        })
        .collect()
}

/// An employee whose input could not be assembled.
#[derive(Debug)]
pub struct RejectedEmployee {
    /// The employee's id.
    pub employee_id: String,
    /// Why the employee was rejected.
    pub error: EngineError,
}

/// Everything needed to run payroll for one month from a data directory.
#[derive(Debug, Default)]
pub struct PayrollDataSet {
    /// Ready-to-process inputs, ordered by employee id.
    pub inputs: Vec<PayrollInput>,
    /// Employees whose contract or balance could not be used.
    pub rejected: Vec<RejectedEmployee>,
}

impl PayrollDataSet {
    /// Loads the registers and the month's timesheet.
    ///
    /// Only employees with timesheet rows for the month are included.
    /// Contracts not active during the month are skipped.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the month's timesheet file does not exist: there is
    /// no payroll for that period. Missing or unreadable registers are
    /// `DataLoad` errors. An unknown contract type or missing leave balance
    /// rejects only that employee.
    pub fn load(
        data_dir: impl AsRef<Path>,
        timesheet_dir: impl AsRef<Path>,
        year: i32,
        month: u32,
    ) -> EngineResult<Option<Self>> {
        let (period_start, period_end) = month_bounds(year, month)?;
        let ts_path = timesheet_path(timesheet_dir, year, month);
        if !ts_path.exists() {
            info!(path = %ts_path.display(), "No timesheet for period");
            return Ok(None);
        }

        let data_dir = data_dir.as_ref();
        let employees = load_employees(data_dir.join(EMPLOYEES_FILE))?;
        let contracts: BTreeMap<String, ContractRecord> =
            load_contracts(data_dir.join(CONTRACTS_FILE))?
                .into_iter()
                .map(|r| (r.employee_id.clone(), r))
                .collect();
        let balances: BTreeMap<String, LeaveBalance> =
            load_leave_balances(data_dir.join(LEAVE_BALANCES_FILE))?
                .into_iter()
                .map(|b| (b.employee_id.clone(), b))
                .collect();

        let mut timesheets: BTreeMap<String, Vec<AttendanceDay>> = BTreeMap::new();
        for entry in load_timesheet(&ts_path)? {
            timesheets.entry(entry.employee_id).or_default().push(entry.day);
        }

        let mut data_set = PayrollDataSet::default();
        for employee in employees {
            let Some(attendance) = timesheets.remove(&employee.id) else {
                debug!(employee_id = %employee.id, "No timesheet rows; skipping");
                continue;
            };

            let contract = match contracts.get(&employee.id) {
                Some(record) => record.to_contract(),
                None => Err(EngineError::InvalidContract {
                    field: "employee_id".to_string(),
                    message: format!("no contract for employee {}", employee.id),
                }),
            };
            let contract = match contract {
                Ok(contract) => contract,
                Err(error) => {
                    warn!(employee_id = %employee.id, error = %error, "Rejected contract");
                    data_set.rejected.push(RejectedEmployee {
                        employee_id: employee.id,
                        error,
                    });
                    continue;
                }
            };

            if !contract.is_active_between(period_start, period_end) {
                debug!(employee_id = %employee.id, "Contract not active; skipping");
                continue;
            }

            let Some(leave_balance) = balances.get(&employee.id).cloned() else {
                warn!(employee_id = %employee.id, "No leave balance");
                data_set.rejected.push(RejectedEmployee {
                    error: EngineError::DataLoad {
                        path: data_dir.join(LEAVE_BALANCES_FILE).display().to_string(),
                        message: format!("no leave balance for employee {}", employee.id),
                    },
                    employee_id: employee.id,
                });
                continue;
            };

            data_set.inputs.push(PayrollInput {
                employee,
                contract,
                attendance,
                leave_balance,
            });
        }

        data_set.inputs.sort_by(|a, b| compare_ids(&a.employee.id, &b.employee.id));

        info!(
            period = %format!("{:04}-{:02}", year, month),
            employees = data_set.inputs.len(),
            rejected = data_set.rejected.len(),
            "Loaded payroll data"
        );

        Ok(Some(data_set))
    }
}

/// Numeric ids sort numerically, anything else lexically after them.
fn compare_ids(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> EngineResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| EngineError::DataLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| EngineError::DataLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn optional(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn invalid_field(field: &str, raw: &str) -> EngineError {
    EngineError::InvalidContract {
        field: field.to_string(),
        message: format!("unrecognised value '{}'", raw),
    }
}

fn parse_decimal(field: &str, raw: &str) -> EngineResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| invalid_field(field, raw))
}

fn parse_hours(field: &str, raw: &str) -> EngineResult<Decimal> {
    optional(raw).map_or(Ok(Decimal::ZERO), |r| parse_decimal(field, r))
}

fn parse_date(field: &str, raw: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| invalid_field(field, raw))
}

fn data_load(path: &Path, error: EngineError) -> EngineError {
    EngineError::DataLoad {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
