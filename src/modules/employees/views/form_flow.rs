// Create/edit employee screen.
//
// Idle -> Submitting -> NavigatedAway   (success)
//                    -> Idle + banner    (failure, entered values kept)
//
// In edit mode the record is fetched first; a failed fetch leaves the flow in
// LoadFailed where submitting does nothing.

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::errors::EmployeeError;
use crate::modules::employees::core::ports::EmployeeApi;
use crate::modules::employees::views::employee_form::EmployeeForm;

pub const EMPLOYEES_ROUTE: &str = "/employees";
pub const LOAD_ERROR: &str = "Error al cargar el empleado";
pub const CREATE_ERROR: &str = "Error al crear el empleado";
pub const UPDATE_ERROR: &str = "Error al actualizar el empleado";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Loading,
    LoadFailed(String),
    Idle { error: Option<String> },
    Submitting,
    NavigatedAway,
}

#[derive(Debug, Clone)]
pub struct EmployeeFormFlow {
    mode: FormMode,
    status: FormStatus,
    pub form: EmployeeForm,
}

impl EmployeeFormFlow {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            status: FormStatus::Idle { error: None },
            form: EmployeeForm::new(),
        }
    }

    /// Opens the form; with an id the record is fetched and pre-populated.
    pub async fn open(api: &dyn EmployeeApi, id: Option<i64>) -> Self {
        let Some(id) = id else {
            return Self::create();
        };
        let mut flow = Self::begin_edit(id);
        let result = api.get_employee(id).await;
        flow.complete_load(result);
        flow
    }

    /// Edit form waiting for its record; submitting does nothing until
    /// `complete_load` succeeds.
    pub fn begin_edit(id: i64) -> Self {
        Self {
            mode: FormMode::Edit { id },
            status: FormStatus::Loading,
            form: EmployeeForm::new(),
        }
    }

    pub fn complete_load(&mut self, result: Result<Employee, EmployeeError>) {
        if self.status != FormStatus::Loading {
            return;
        }
        self.status = match result {
            Ok(employee) => {
                self.form.patch(&employee);
                FormStatus::Idle { error: None }
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, %err, "could not load employee for editing");
                FormStatus::LoadFailed(LOAD_ERROR.to_string())
            }
        };
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::LoadFailed(message) => Some(message),
            _ => None,
        }
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Moves to Submitting and hands back the payload to send.
    ///
    /// Returns `None` when the form is not idle or is invalid; an invalid
    /// form gets every field marked touched.
    pub fn begin_submit(&mut self) -> Option<Employee> {
        if !matches!(self.status, FormStatus::Idle { .. }) {
            return None;
        }
        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(_) => {
                self.form.mark_all_touched();
                return None;
            }
        };
        self.status = FormStatus::Submitting;
        Some(match self.mode {
            FormMode::Create => payload,
            FormMode::Edit { id } => payload.with_id(id),
        })
    }

    pub fn complete(&mut self, result: Result<Employee, EmployeeError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match result {
            Ok(_) => FormStatus::NavigatedAway,
            Err(err) => {
                tracing::warn!(%err, "employee submission failed");
                let banner = match self.mode {
                    FormMode::Create => CREATE_ERROR,
                    FormMode::Edit { .. } => UPDATE_ERROR,
                };
                FormStatus::Idle {
                    error: Some(banner.to_string()),
                }
            }
        };
    }

    pub async fn submit(&mut self, api: &dyn EmployeeApi) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = match self.mode {
            FormMode::Create => api.create_employee(payload).await,
            FormMode::Edit { id } => api.update_employee(id, payload).await,
        };
        self.complete(result);
    }

    pub fn cancel(&mut self) {
        self.status = FormStatus::NavigatedAway;
    }

    /// Where the screen should go next, once it is done.
    pub fn redirect(&self) -> Option<&'static str> {
        (self.status == FormStatus::NavigatedAway).then_some(EMPLOYEES_ROUTE)
    }
}
