//! In-memory employee directory: the collection, the list filter, and the
//! add/edit form, driven only through [`DirectoryController`] operations.

use std::collections::VecDeque;

use shared::{
    domain::{DepartmentFilter, Employee, EmployeeId},
    error::ValidationError,
    notification::Notification,
};
use tracing::{info, warn};

pub mod filter;
pub mod form;
pub mod seed;

pub use filter::filter_employees;
pub use form::{EmployeeDraft, FormFields, FormState};
pub use seed::{default_seed, load_seed, SeedError};

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EmployeeId),
    Updated(EmployeeId),
    /// The edited record was deleted while the form was open; nothing changed.
    Vanished(EmployeeId),
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryController {
    employees: Vec<Employee>,
    search_term: String,
    selected_department: DepartmentFilter,
    form: FormState,
    notifications: VecDeque<Notification>,
}

impl DirectoryController {
    /// Callers are responsible for id uniqueness; see [`seed::ensure_unique_ids`].
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            ..Self::default()
        }
    }

    pub fn with_default_seed() -> Self {
        Self::new(default_seed())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    // ---------- list view ----------

    pub fn list(&self, search_term: &str, department: DepartmentFilter) -> Vec<&Employee> {
        filter_employees(&self.employees, search_term, department)
    }

    /// The list as the user currently sees it.
    pub fn visible(&self) -> Vec<&Employee> {
        self.list(&self.search_term, self.selected_department)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selected_department(&self) -> DepartmentFilter {
        self.selected_department
    }

    pub fn set_selected_department(&mut self, department: DepartmentFilter) {
        self.selected_department = department;
    }

    // ---------- form ----------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_fields_mut(&mut self) -> &mut FormFields {
        &mut self.form.fields
    }

    pub fn set_form_fields(&mut self, fields: FormFields) {
        self.form.fields = fields;
    }

    pub fn open_add_form(&mut self) {
        self.form.reset();
        self.form.is_open = true;
    }

    /// Returns `false` and leaves the form untouched when `id` is unknown.
    pub fn open_edit_form(&mut self, id: EmployeeId) -> bool {
        let Some(fields) = self.get(id).map(FormFields::from_employee) else {
            warn!(employee_id = %id, "edit requested for unknown employee");
            return false;
        };
        self.form.fields = fields;
        self.form.editing = Some(id);
        self.form.is_open = true;
        true
    }

    /// Closes the form; fields and edit target survive until the next open.
    pub fn cancel_form(&mut self) {
        self.form.is_open = false;
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        let draft = match self.form.fields.validate() {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    code = ?err.code(),
                    error = %err,
                    fields = ?err.fields(),
                    "employee form rejected"
                );
                self.notifications.push_back(Notification::from(&err));
                return Err(err);
            }
        };

        let outcome = match self.form.editing {
            Some(id) => match self.employees.iter_mut().find(|employee| employee.id == id) {
                Some(slot) => {
                    *slot = draft.into_employee(id);
                    info!(employee_id = %id, "employee updated");
                    self.notifications
                        .push_back(Notification::success("Employee updated successfully"));
                    SubmitOutcome::Updated(id)
                }
                None => {
                    warn!(employee_id = %id, "edited employee no longer exists");
                    self.notifications
                        .push_back(Notification::error("This employee no longer exists"));
                    SubmitOutcome::Vanished(id)
                }
            },
            None => {
                let id = self.next_id();
                self.employees.push(draft.into_employee(id));
                info!(employee_id = %id, "employee added");
                self.notifications
                    .push_back(Notification::success("Employee added successfully"));
                SubmitOutcome::Added(id)
            }
        };

        self.form.reset();
        self.form.is_open = false;
        Ok(outcome)
    }

    // ---------- collection ----------

    /// Deleting an unknown id changes nothing but still confirms to the user.
    pub fn delete(&mut self, id: EmployeeId) -> Option<Employee> {
        let removed = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
            .map(|index| self.employees.remove(index));
        match &removed {
            Some(_) => info!(employee_id = %id, "employee deleted"),
            None => warn!(employee_id = %id, "delete requested for unknown employee"),
        }
        self.notifications
            .push_back(Notification::success("Employee deleted successfully"));
        removed
    }

    /// Current max id plus one; ids freed by deleting the highest record are reused.
    ///
    /// Seeds holding `i64::MAX` are rejected by [`seed::ensure_unique_ids`], so the
    /// saturating add only matters for collections built by hand.
    pub fn next_id(&self) -> EmployeeId {
        let max = self
            .employees
            .iter()
            .map(|employee| employee.id.0)
            .max()
            .unwrap_or(0);
        EmployeeId(max.saturating_add(1))
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
