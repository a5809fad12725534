use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::employees::core::decide::{EmployeeDraft, decide_employee};
use crate::shared::http::api_error::ApiError;
use crate::shared::http::path_id::parse_id;
use crate::shell::state::AppState;

/// Full replacement of the record at `:id`. An unknown id wins over a
/// missing name: 404 is reported before 400.
pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = body.map_err(|_| ApiError::InvalidBody)?;
    let id = parse_id(&raw_id)?;
    state.store.get(id).await?;
    let employee = decide_employee(draft)?;
    let updated = state.store.update(id, employee).await?;
    tracing::info!(id, name = %updated.name, "PUT /employees/:id");
    Ok(Json(updated))
}
