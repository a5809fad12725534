// Port for the authoritative employee record collection.
//
// Purpose
// - Let the HTTP boundary work against any storage backend.
//
// Responsibilities
// - Keep records in insertion order and hand out monotonic ids.
// - Report absent ids as NotFound. Field validation happens at the boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::employees::core::employee::Employee;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("employee {id} not found")]
    NotFound { id: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;
    async fn get(&self, id: i64) -> Result<Employee, StoreError>;
    /// Appends the record under the next unused id. Any id on `employee` is ignored.
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError>;
    /// Replaces the whole record at `id`; the stored id always stays `id`.
    async fn update(&self, id: i64, employee: Employee) -> Result<Employee, StoreError>;
    async fn delete(&self, id: i64) -> Result<Employee, StoreError>;
}

pub mod in_memory;
