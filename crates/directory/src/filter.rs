use shared::domain::{DepartmentFilter, Employee};

/// Employees matching both the search term and the department selector, in
/// collection order. An empty term matches everyone.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    search_term: &str,
    department: DepartmentFilter,
) -> Vec<&'a Employee> {
    let needle = search_term.to_lowercase();
    employees
        .iter()
        .filter(|employee| department.admits(employee.department))
        .filter(|employee| employee.matches_search(&needle))
        .collect()
}
