//! Employee entity.

use serde::{Deserialize, Serialize};

use super::Entity;

/// An employee as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    /// Masked CPF, `###.###.###-##`
    pub cpf: String,
    /// 18..=100
    pub age: u8,
    pub job_title: String,
}

/// An employee without its server-assigned id, sent on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub cpf: String,
    pub age: u8,
    pub job_title: String,
}

impl Entity for Employee {
    type Draft = EmployeeDraft;

    const COLLECTION_PATH: &'static str = "/api/employees";
    const LABEL: &'static str = "Funcionário";

    fn id(&self) -> &str {
        &self.employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_wire_format() {
        let json = r#"{
            "employeeId": "e1",
            "name": "Maria Souza",
            "cpf": "123.456.789-01",
            "age": 29,
            "jobTitle": "Caixa"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, "e1");
        assert_eq!(employee.job_title, "Caixa");
    }
}
