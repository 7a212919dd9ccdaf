//! Employee create/edit form.

use crate::controller::form::EntityForm;
use crate::error::ValidationError;
use crate::format::{format_cpf, is_complete_cpf};
use crate::models::{Employee, EmployeeDraft};

/// Age bounds accepted for an employee.
const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 100;

/// Raw input state for the employee form.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    cpf_input: String,
    pub age_input: String,
    pub job_title: String,
    touched: bool,
}

impl EmployeeForm {
    /// The CPF as currently masked.
    pub fn cpf(&self) -> &str {
        &self.cpf_input
    }

    /// Accept raw CPF input, re-masking it as the user types.
    pub fn set_cpf(&mut self, raw: &str) {
        self.cpf_input = format_cpf(raw);
    }

    fn age(&self) -> Option<u8> {
        self.age_input.trim().parse().ok()
    }
}

impl EntityForm for EmployeeForm {
    type Entity = Employee;

    fn load(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.cpf_input = format_cpf(&employee.cpf);
        self.age_input = employee.age.to_string();
        self.job_title = employee.job_title.clone();
        self.touched = false;
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Informe o nome do funcionário"));
        }

        if !is_complete_cpf(&self.cpf_input) {
            errors.push(ValidationError::new("cpf", "Informe um CPF completo"));
        }

        match self.age() {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
            Some(_) => errors.push(ValidationError::new(
                "age",
                format!("A idade deve estar entre {MIN_AGE} e {MAX_AGE}"),
            )),
            None => errors.push(ValidationError::new("age", "Informe uma idade válida")),
        }

        if self.job_title.trim().is_empty() {
            errors.push(ValidationError::new("jobTitle", "Informe o cargo"));
        }

        errors
    }

    fn mark_all_touched(&mut self) {
        self.touched = true;
    }

    fn is_touched(&self) -> bool {
        self.touched
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.trim().to_string(),
            cpf: self.cpf_input.clone(),
            age: self.age().unwrap_or(MIN_AGE),
            job_title: self.job_title.trim().to_string(),
        }
    }
}
