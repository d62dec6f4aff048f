use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EmployeeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "IT")]
    It,
    Design,
    Management,
    #[serde(rename = "HR")]
    Hr,
    Marketing,
    Sales,
}

impl Department {
    /// Display order used by every department picker.
    pub const ALL: [Department; 6] = [
        Department::It,
        Department::Design,
        Department::Management,
        Department::Hr,
        Department::Marketing,
        Department::Sales,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Design => "Design",
            Department::Management => "Management",
            Department::Hr => "HR",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Department::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownDepartment(raw.to_string()))
    }
}

/// Department selector of the list view; `All` is the "every department" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn admits(self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(selected) => selected == department,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DepartmentFilter::All => "All departments",
            DepartmentFilter::Only(department) => department.label(),
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            Ok(DepartmentFilter::All)
        } else {
            raw.parse().map(DepartmentFilter::Only)
        }
    }
}

/// The seven user-editable fields of an employee, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    LastName,
    FirstName,
    Email,
    JobTitle,
    Department,
    Salary,
    HireDate,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 7] = [
        EmployeeField::LastName,
        EmployeeField::FirstName,
        EmployeeField::Email,
        EmployeeField::JobTitle,
        EmployeeField::Department,
        EmployeeField::Salary,
        EmployeeField::HireDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::LastName => "Last name",
            EmployeeField::FirstName => "First name",
            EmployeeField::Email => "Email",
            EmployeeField::JobTitle => "Job title",
            EmployeeField::Department => "Department",
            EmployeeField::Salary => "Salary",
            EmployeeField::HireDate => "Hire date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub job_title: String,
    pub department: Department,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match over the searchable text fields.
    /// `needle_lower` must already be lowercased.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        [
            &self.last_name,
            &self.first_name,
            &self.email,
            &self.job_title,
        ]
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle_lower))
    }
}
