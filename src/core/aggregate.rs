//! In-memory views over a fetched employee set.
//!
//! Everything here is pure so the query service only has to fetch and
//! delegate.

use crate::domain::model::Employee;

pub const TOP_EARNER_LIMIT: usize = 10;

/// Employees whose name contains `fragment`, ignoring case. Upstream order is
/// kept and nameless records never match.
pub fn filter_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    let needle = fragment.to_lowercase();
    employees
        .into_iter()
        .filter(|e| {
            e.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn find_by_id(employees: Vec<Employee>, id: &str) -> Option<Employee> {
    employees
        .into_iter()
        .find(|e| e.id.as_deref() == Some(id))
}

/// Highest salary, or 0 for an empty set.
///
/// NOTE: 0 is also what a set of unpaid employees yields; callers cannot
/// tell the two apart.
pub fn max_salary(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best-paid employees, highest first.
///
/// `sort_by` is stable, so equal salaries keep upstream order. A nameless
/// record keeps its rank as `None`.
pub fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<Option<String>> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees.into_iter().take(limit).map(|e| e.name).collect()
}
