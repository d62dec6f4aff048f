use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::EmployeeField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingFields,
    InvalidSalary,
    InvalidHireDate,
    UnknownDepartment,
}

/// Rejection of a form submission. The form stays open and nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields(Vec<EmployeeField>),
    #[error("Salary '{0}' is not a number")]
    InvalidSalary(String),
    #[error("Hire date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidHireDate(String),
    #[error("Unknown department '{0}'")]
    UnknownDepartment(String),
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingFields(_) => ErrorCode::MissingFields,
            ValidationError::InvalidSalary(_) => ErrorCode::InvalidSalary,
            ValidationError::InvalidHireDate(_) => ErrorCode::InvalidHireDate,
            ValidationError::UnknownDepartment(_) => ErrorCode::UnknownDepartment,
        }
    }

    /// Fields the UI should highlight.
    pub fn fields(&self) -> Vec<EmployeeField> {
        match self {
            ValidationError::MissingFields(fields) => fields.clone(),
            ValidationError::InvalidSalary(_) => vec![EmployeeField::Salary],
            ValidationError::InvalidHireDate(_) => vec![EmployeeField::HireDate],
            ValidationError::UnknownDepartment(_) => vec![EmployeeField::Department],
        }
    }
}
