use crate::shared::infrastructure::employee_store::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}
