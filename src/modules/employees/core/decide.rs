// Turns an incoming create/update body into the record to store.
//
// Responsibilities
// - Reject a missing or empty name.
// - Default position to "" and salary to 0 when absent.
// - Never perform input or output.

use serde::Deserialize;

use crate::modules::employees::core::employee::Employee;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("El nombre es requerido")]
    NameRequired,
}

/// Body accepted by POST and PUT. Every field may be missing or null; a body
/// `id` is accepted and ignored since ids come from the store or the path.
/// Malformed JSON or a field of the wrong type never reaches this type: the
/// handlers answer 400 `Cuerpo de la petición inválido` instead of a 500.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
}

pub fn decide_employee(draft: EmployeeDraft) -> Result<Employee, DecideError> {
    let name = match draft.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(DecideError::NameRequired),
    };
    Ok(Employee {
        id: None,
        name,
        position: Some(draft.position.unwrap_or_default()),
        salary: Some(draft.salary.unwrap_or(0.0)),
    })
}
