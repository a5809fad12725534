// Client-side port for the employees REST API.
//
// Purpose
// - Let the form flow and the views run against the HTTP client or an in-memory double.
//
// Boundaries
// - One call is one HTTP request. No retries, no caching between calls.

use async_trait::async_trait;

use crate::modules::employees::core::employee::{DeletedEmployee, Employee};
use crate::modules::employees::core::errors::EmployeeError;

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;
    async fn get_employee(&self, id: i64) -> Result<Employee, EmployeeError>;
    /// Any `id` on `employee` is stripped before sending.
    async fn create_employee(&self, employee: Employee) -> Result<Employee, EmployeeError>;
    /// The outgoing body's `id` is forced to `id`.
    async fn update_employee(&self, id: i64, employee: Employee)
    -> Result<Employee, EmployeeError>;
    async fn delete_employee(&self, id: i64) -> Result<DeletedEmployee, EmployeeError>;
}
