// Shared test fixture for Employee records.
// The canonical record lives in json/employee.json so HTTP tests and unit
// tests start from the same wire shape.

use crate::modules::employees::core::employee::Employee;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeDto {
    pub name: String,
    pub position: String,
    pub salary: f64,
}

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        let dto: EmployeeDto = serde_json::from_str(include_str!("json/employee.json")).unwrap();
        Self {
            inner: Employee::new(dto.name, dto.position, dto.salary),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn position(mut self, v: impl Into<String>) -> Self {
        self.inner.position = Some(v.into());
        self
    }

    pub fn salary(mut self, v: f64) -> Self {
        self.inner.salary = Some(v);
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

/// `count` records with ids 1..=count and salaries 1000, 2000, ...
pub fn numbered_employees(count: usize) -> Vec<Employee> {
    (1..=count as i64)
        .map(|i| {
            EmployeeBuilder::new()
                .id(i)
                .name(format!("Employee {i}"))
                .salary(i as f64 * 1000.0)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod employee_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EmployeeBuilder::default().build();
        assert_eq!(built.id, None);
        assert_eq!(built.name, "Juan Pérez");
        assert_eq!(built.position.as_deref(), Some("Desarrollador Frontend"));
        assert_eq!(built.salary, Some(50_000.0));
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = EmployeeBuilder::new()
            .id(3)
            .name("Eva")
            .position("QA")
            .salary(1.5)
            .build();
        assert_eq!(built, Employee::new("Eva", "QA", 1.5).with_id(3));
    }
}
