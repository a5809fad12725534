use std::fmt;
use thiserror::Error;

/// Non-success HTTP response as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerFailure {
    pub status: u16,
    pub status_text: String,
    /// Raw body text, kept only when the server answered with plain text.
    pub body: Option<String>,
}

impl ServerFailure {
    pub fn new(status: u16, status_text: impl Into<String>, raw_body: &str) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: plain_text(raw_body),
        }
    }
}

impl fmt::Display for ServerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error del servidor: {}", self.status)?;
        if !self.status_text.is_empty() {
            write!(f, " - {}", self.status_text)?;
        }
        if let Some(body) = &self.body {
            write!(f, " - {body}")?;
        }
        Ok(())
    }
}

// JSON objects and arrays are structured error bodies and are not echoed;
// a JSON string literal counts as plain text.
fn plain_text(raw_body: &str) -> Option<String> {
    let trimmed = raw_body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Every way an employee operation can fail, as observed by the client side.
///
/// `Display` yields the normalized, human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// Client-side field validation; never reaches the network.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(ServerFailure),

    #[error("{0}")]
    BadRequest(ServerFailure),

    /// 500 and any other non-success status.
    #[error("{0}")]
    ServerFault(ServerFailure),

    /// The request never reached the server or no response came back.
    #[error("Error del cliente: {0}")]
    Transport(String),
}

impl From<ServerFailure> for EmployeeError {
    fn from(failure: ServerFailure) -> Self {
        match failure.status {
            404 => EmployeeError::NotFound(failure),
            400 => EmployeeError::BadRequest(failure),
            _ => EmployeeError::ServerFault(failure),
        }
    }
}
