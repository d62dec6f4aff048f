//! Initial collection contents: the built-in sample records or a read-only JSON file.

use std::{collections::HashSet, fs, path::Path};

use chrono::NaiveDate;
use shared::{
    domain::{Department, Employee, EmployeeId},
    error::ValidationError,
};
use thiserror::Error;

use crate::form::FormFields;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("seed contains duplicate employee id {0}")]
    DuplicateId(EmployeeId),
    #[error("seed employee id {0} leaves no room for a new id")]
    IdOutOfRange(EmployeeId),
    #[error("seed employee {id} is invalid: {source}")]
    InvalidRecord {
        id: EmployeeId,
        source: ValidationError,
    },
}

pub fn default_seed() -> Vec<Employee> {
    vec![
        seed_employee(
            1,
            "Dupont",
            "Jean",
            "jean.dupont@entreprise.com",
            "Frontend Developer",
            Department::It,
            45000.0,
            (2023, 1, 15),
        ),
        seed_employee(
            2,
            "Martin",
            "Marie",
            "marie.martin@entreprise.com",
            "UX/UI Designer",
            Department::Design,
            42000.0,
            (2023, 3, 20),
        ),
        seed_employee(
            3,
            "Bernard",
            "Pierre",
            "pierre.bernard@entreprise.com",
            "Project Manager",
            Department::Management,
            55000.0,
            (2022, 11, 10),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_employee(
    id: i64,
    last_name: &str,
    first_name: &str,
    email: &str,
    job_title: &str,
    department: Department,
    salary: f64,
    (year, month, day): (i32, u32, u32),
) -> Employee {
    Employee {
        id: EmployeeId(id),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        email: email.to_string(),
        job_title: job_title.to_string(),
        department,
        salary,
        hire_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

pub fn parse_seed(raw: &str, origin: &str) -> Result<Vec<Employee>, SeedError> {
    let employees: Vec<Employee> =
        serde_json::from_str(raw).map_err(|source| SeedError::Parse {
            path: origin.to_string(),
            source,
        })?;
    ensure_unique_ids(&employees)?;
    ensure_complete_records(&employees)?;
    Ok(employees)
}

pub fn load_seed(path: &Path) -> Result<Vec<Employee>, SeedError> {
    let origin = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: origin.clone(),
        source,
    })?;
    let employees = parse_seed(&raw, &origin)?;
    tracing::info!(path = %origin, count = employees.len(), "loaded employee seed");
    Ok(employees)
}

/// Also rejects `i64::MAX`, which would leave the next add without an id.
pub fn ensure_unique_ids(employees: &[Employee]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if employee.id.0.checked_add(1).is_none() {
            return Err(SeedError::IdOutOfRange(employee.id));
        }
        if !seen.insert(employee.id) {
            return Err(SeedError::DuplicateId(employee.id));
        }
    }
    Ok(())
}

/// Holds seed records to the same rules as the add/edit form.
pub fn ensure_complete_records(employees: &[Employee]) -> Result<(), SeedError> {
    for employee in employees {
        FormFields::from_employee(employee)
            .validate()
            .map_err(|source| SeedError::InvalidRecord {
                id: employee.id,
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
