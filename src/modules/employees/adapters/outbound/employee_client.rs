// HTTP implementation of the EmployeeApi port.
//
// Responsibilities
// - Issue exactly one request per operation, no retries, no timeouts.
// - Strip the id on create, force the path id on update.
// - Normalize every failure into EmployeeError.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::modules::employees::core::employee::{DeletedEmployee, Employee};
use crate::modules::employees::core::errors::{EmployeeError, ServerFailure};
use crate::modules::employees::core::ports::EmployeeApi;

pub const DEFAULT_API_URL: &str = "http://localhost:5160";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `EMPLOYEES_API_URL`, falling back to the local mock server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("EMPLOYEES_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeClient {
    http: Client,
    employees_url: String,
}

impl EmployeeClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        let base = config.base_url.trim_end_matches('/');
        Self {
            http,
            employees_url: format!("{base}/employees"),
        }
    }

    fn employee_url(&self, id: i64) -> String {
        format!("{}/{id}", self.employees_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, EmployeeError> {
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let error = EmployeeError::from(ServerFailure::new(status.as_u16(), status_text, &text));
            tracing::warn!(%error, "employee request failed");
            return Err(error);
        }

        serde_json::from_str(&text).map_err(|err| {
            tracing::warn!(%err, "undecodable employee response");
            EmployeeError::ServerFault(ServerFailure::new(status.as_u16(), status_text, ""))
        })
    }
}

fn transport_error(err: reqwest::Error) -> EmployeeError {
    let error = EmployeeError::Transport(err.to_string());
    tracing::warn!(%error, "employee request did not complete");
    error
}

#[async_trait]
impl EmployeeApi for EmployeeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        tracing::debug!(url = %self.employees_url, "list employees");
        self.send(self.http.get(&self.employees_url)).await
    }

    async fn get_employee(&self, id: i64) -> Result<Employee, EmployeeError> {
        tracing::debug!(id, "get employee");
        self.send(self.http.get(self.employee_url(id))).await
    }

    async fn create_employee(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let body = employee.without_id();
        tracing::debug!(name = %body.name, "create employee");
        self.send(self.http.post(&self.employees_url).json(&body)).await
    }

    async fn update_employee(
        &self,
        id: i64,
        employee: Employee,
    ) -> Result<Employee, EmployeeError> {
        let body = employee.with_id(id);
        tracing::debug!(id, name = %body.name, "update employee");
        self.send(self.http.put(self.employee_url(id)).json(&body)).await
    }

    async fn delete_employee(&self, id: i64) -> Result<DeletedEmployee, EmployeeError> {
        tracing::debug!(id, "delete employee");
        self.send(self.http.delete(self.employee_url(id))).await
    }
}
