// Field state and validation rules of the create/edit employee form.
//
// Rules are evaluated on every read; an error is only surfaced for a field
// the user has touched.

use std::collections::HashSet;

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::errors::EmployeeError;

pub const NAME_MIN_LENGTH: usize = 2;
pub const SALARY_MIN: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Position,
    Salary,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Position, Field::Salary];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Position => "position",
            Field::Salary => "salary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    Required,
    MinLength { required: usize },
    Min { min: f64 },
}

impl FieldError {
    pub fn message(&self, field: Field) -> String {
        let key = field.key();
        match self {
            FieldError::Required => format!("{key} es requerido"),
            FieldError::MinLength { required } => {
                format!("{key} debe tener al menos {required} caracteres")
            }
            FieldError::Min { min } => format!("{key} debe ser mayor o igual a {min}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
    pub salary: Option<f64>,
    touched: HashSet<Field>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.touch(Field::Name);
    }

    pub fn set_position(&mut self, value: impl Into<String>) {
        self.position = value.into();
        self.touch(Field::Position);
    }

    pub fn set_salary(&mut self, value: Option<f64>) {
        self.salary = value;
        self.touch(Field::Salary);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Fills every field from a fetched record without touching any of them.
    pub fn patch(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.position = employee.position.clone().unwrap_or_default();
        self.salary = employee.salary;
    }

    /// The rule currently broken by `field`, whether or not it is touched.
    pub fn check(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some(FieldError::Required)
                } else if name.chars().count() < NAME_MIN_LENGTH {
                    Some(FieldError::MinLength {
                        required: NAME_MIN_LENGTH,
                    })
                } else {
                    None
                }
            }
            Field::Position => None,
            Field::Salary => match self.salary {
                Some(salary) if salary < SALARY_MIN => Some(FieldError::Min { min: SALARY_MIN }),
                _ => None,
            },
        }
    }

    /// Message to display next to `field`; hidden until the field is touched.
    pub fn error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.check(field).map(|error| error.message(field))
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.check(*field).is_none())
    }

    /// Builds the submission payload: trimmed text, missing salary as 0.
    pub fn validate(&self) -> Result<Employee, EmployeeError> {
        if let Some((field, error)) = Field::ALL
            .iter()
            .find_map(|field| self.check(*field).map(|error| (*field, error)))
        {
            return Err(EmployeeError::Validation(error.message(field)));
        }
        Ok(Employee::new(
            self.name.trim(),
            self.position.trim(),
            self.salary.unwrap_or(0.0),
        ))
    }
}
