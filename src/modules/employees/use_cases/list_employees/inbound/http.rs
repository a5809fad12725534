use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let employees = state.store.list().await?;
    tracing::debug!(count = employees.len(), "GET /employees");
    Ok(Json(employees))
}
