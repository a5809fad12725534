use crate::shared::infrastructure::employee_store::in_memory::InMemoryEmployeeStore;
use crate::shell::seed::seed_employees;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn state_with(store: InMemoryEmployeeStore) -> AppState {
    AppState::new(Arc::new(store))
}

/// Five sample records, ids 1..=5.
pub fn seeded_state() -> AppState {
    state_with(InMemoryEmployeeStore::with_employees(seed_employees()))
}

pub fn offline_state() -> AppState {
    let mut store = InMemoryEmployeeStore::new();
    store.toggle_offline();
    state_with(store)
}
