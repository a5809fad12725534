// In memory implementation of the EmployeeStore port.
//
// Purpose
// - Back the mock REST server and the tests without a database.
//
// Responsibilities
// - Keep records in insertion order.
// - Hand out ids from a counter that never goes backwards, so deleted ids are never reused.
// - Guard the records and the counter with one lock so create/update/delete are atomic.

use crate::modules::employees::core::employee::Employee;
use crate::shared::infrastructure::employee_store::{EmployeeStore, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    employees: Vec<Employee>,
    last_id: i64,
}

impl Records {
    fn position_of(&self, id: i64) -> Result<usize, StoreError> {
        self.employees
            .iter()
            .position(|e| e.id == Some(id))
            .ok_or(StoreError::NotFound { id })
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    inner: RwLock<Records>,
    is_offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing records. Records without an id get the next free one;
    /// the counter resumes after the highest id seen.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let mut records = Records::default();
        for mut employee in employees {
            match employee.id {
                Some(id) => records.last_id = records.last_id.max(id),
                None => employee.id = Some(records.next_id()),
            }
            records.employees.push(employee);
        }
        Self {
            inner: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.employees.clone())
    }

    async fn get(&self, id: i64) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let index = guard.position_of(id)?;
        Ok(guard.employees[index].clone())
    }

    async fn create(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let created = employee.with_id(guard.next_id());
        guard.employees.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let index = guard.position_of(id)?;
        let updated = employee.with_id(id);
        guard.employees[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let index = guard.position_of(id)?;
        Ok(guard.employees.remove(index))
    }
}
