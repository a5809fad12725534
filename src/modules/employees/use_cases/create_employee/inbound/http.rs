use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::core::decide::{EmployeeDraft, decide_employee};
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = body.map_err(|_| ApiError::InvalidBody)?;
    let employee = decide_employee(draft)?;
    let created = state.store.create(employee).await?;
    tracing::info!(id = created.id, name = %created.name, "POST /employees");
    Ok((StatusCode::CREATED, Json(created)))
}
