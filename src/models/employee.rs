//! Employee identity model.
//!
//! Only the fields the statements and regulator returns print are kept here;
//! everything that affects pay lives on the [`Contract`](super::Contract).

use serde::{Deserialize, Serialize};

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(alias = "employee_id")]
    pub id: String,
    /// Full name as it appears on bank transfers and returns.
    pub name: String,
    /// National identity card number.
    pub national_id: String,
    /// Tax authority personal identification number.
    pub kra_pin: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Bank account the net pay is transferred to.
    pub bank_account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Alice Wanjiku".to_string(),
            national_id: "12345678".to_string(),
            kra_pin: "A001234567B".to_string(),
            phone: "0712345678".to_string(),
            bank_account: "0123456789012".to_string(),
        }
    }

    #[test]
    fn test_deserialize_employee_with_employee_id_alias() {
        let json = r#"{
            "employee_id": "7",
            "name": "Grace Muthoni",
            "national_id": "23456789",
            "kra_pin": "A007654321C",
            "bank_account": "0987654321098"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "7");
        assert_eq!(employee.name, "Grace Muthoni");
        assert_eq!(employee.phone, "");
    }

    #[test]
    fn test_serialize_employee() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("\"kra_pin\":\"A001234567B\""));

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
