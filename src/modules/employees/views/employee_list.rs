use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeApi;
use crate::modules::employees::views::load_state::LoadState;

pub const LIST_ERROR: &str = "Error al cargar los empleados";
pub const DELETE_ERROR: &str = "Error al eliminar el empleado";

/// Collection screen. Deletion is confirmed by the caller before `delete` is
/// invoked; the list is never mutated locally, only re-fetched.
#[derive(Debug, Clone, Default)]
pub struct EmployeeListView {
    state: LoadState<Vec<Employee>>,
    delete_error: Option<String>,
}

impl EmployeeListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<Employee>> {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    /// Fetches the collection; also the retry action after a failure.
    /// Any banner from an earlier delete is cleared.
    pub async fn load(&mut self, api: &dyn EmployeeApi) {
        self.delete_error = None;
        self.state = LoadState::Loading;
        self.state = match api.list_employees().await {
            Ok(employees) => LoadState::Loaded(employees),
            Err(err) => {
                tracing::warn!(%err, "could not load employees");
                LoadState::Failed(LIST_ERROR.to_string())
            }
        };
    }

    pub async fn delete(&mut self, api: &dyn EmployeeApi, id: i64) {
        match api.delete_employee(id).await {
            Ok(_) => self.load(api).await,
            Err(err) => {
                tracing::warn!(id, %err, "could not delete employee");
                self.delete_error = Some(DELETE_ERROR.to_string());
            }
        }
    }
}
