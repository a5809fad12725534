use serde::Serialize;

use crate::modules::employees::core::employee::Employee;

pub const RECENT_EMPLOYEES_LIMIT: usize = 5;

/// Figures shown on the dashboard, derived from one full fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub average_salary: f64,
    pub recent_employees: Vec<Employee>,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            total_employees: employees.len(),
            average_salary: average_salary(employees),
            recent_employees: recent_employees(employees),
        }
    }
}

/// Mean salary with a missing salary counted as 0. Zero for an empty set.
pub fn average_salary(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    let total: f64 = employees.iter().map(Employee::salary_or_zero).sum();
    total / employees.len() as f64
}

/// The last records in fetch order, newest first.
pub fn recent_employees(employees: &[Employee]) -> Vec<Employee> {
    let start = employees.len().saturating_sub(RECENT_EMPLOYEES_LIMIT);
    employees[start..].iter().rev().cloned().collect()
}
