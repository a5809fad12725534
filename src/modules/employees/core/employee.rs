use serde::{Deserialize, Serialize};

/// One employee record as it travels over the wire and lives in the store.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// Stored records always carry `position` and `salary`; the options only
/// exist because callers may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl Employee {
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: Some(position.into()),
            salary: Some(salary),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn salary_or_zero(&self) -> f64 {
        self.salary.unwrap_or(0.0)
    }
}

pub const DELETED_MESSAGE: &str = "Empleado eliminado correctamente";

/// Response body of a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedEmployee {
    pub message: String,
    pub employee: Employee,
}

impl DeletedEmployee {
    pub fn new(employee: Employee) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            employee,
        }
    }
}
