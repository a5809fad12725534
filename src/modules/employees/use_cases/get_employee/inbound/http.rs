use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::http::api_error::ApiError;
use crate::shared::http::path_id::parse_id;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id)?;
    let employee = state.store.get(id).await?;
    tracing::debug!(id, "GET /employees/:id");
    Ok(Json(employee))
}
