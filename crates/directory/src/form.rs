//! Text-valued form state mirroring an employee before type coercion.

use chrono::NaiveDate;
use shared::{
    domain::{Department, Employee, EmployeeField, EmployeeId},
    error::ValidationError,
};

const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
}

/// Typed values of a form that passed validation; lacks only the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub job_title: String,
    pub department: Department,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            email: self.email,
            job_title: self.job_title,
            department: self.department,
            salary: self.salary,
            hire_date: self.hire_date,
        }
    }
}

impl FormFields {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            department: employee.department.label().to_string(),
            salary: employee.salary.to_string(),
            hire_date: employee.hire_date.format(HIRE_DATE_FORMAT).to_string(),
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::LastName => &self.last_name,
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::Email => &self.email,
            EmployeeField::JobTitle => &self.job_title,
            EmployeeField::Department => &self.department,
            EmployeeField::Salary => &self.salary,
            EmployeeField::HireDate => &self.hire_date,
        }
    }

    pub fn get_mut(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::JobTitle => &mut self.job_title,
            EmployeeField::Department => &mut self.department,
            EmployeeField::Salary => &mut self.salary,
            EmployeeField::HireDate => &mut self.hire_date,
        }
    }

    pub fn missing_fields(&self) -> Vec<EmployeeField> {
        EmployeeField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Every field must be non-blank before any value is parsed.
    pub fn validate(&self) -> Result<EmployeeDraft, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let department = self.department.parse::<Department>()?;
        let salary = parse_salary(&self.salary)?;
        let hire_date = NaiveDate::parse_from_str(self.hire_date.trim(), HIRE_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidHireDate(self.hire_date.clone()))?;

        Ok(EmployeeDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            job_title: self.job_title.clone(),
            department,
            salary,
            hire_date,
        })
    }
}

fn parse_salary(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidSalary(raw.to_string())),
    }
}

/// Open/closed × adding/editing, plus the text being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(crate) is_open: bool,
    pub(crate) editing: Option<EmployeeId>,
    pub fields: FormFields,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn editing(&self) -> Option<EmployeeId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit employee"
        } else {
            "Add employee"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.is_editing() {
            "Update the employee's details below."
        } else {
            "Fill in the new employee's details below."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Add"
        }
    }

    pub(crate) fn reset(&mut self) {
        self.fields = FormFields::default();
        self.editing = None;
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
