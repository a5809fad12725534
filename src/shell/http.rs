use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::modules::employees::use_cases::create_employee::inbound::http as create_http;
use crate::modules::employees::use_cases::delete_employee::inbound::http as delete_http;
use crate::modules::employees::use_cases::get_employee::inbound::http as get_http;
use crate::modules::employees::use_cases::list_employees::inbound::http as list_http;
use crate::modules::employees::use_cases::update_employee::inbound::http as update_http;
use crate::shared::http::api_error::ApiError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/employees/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(internal_error_on_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn internal_error_on_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}
