// The HTTP client against the real router served on an ephemeral port.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use crate::modules::employees::adapters::outbound::employee_client::{ClientConfig, EmployeeClient};
use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::errors::EmployeeError;
use crate::modules::employees::core::ports::EmployeeApi;
use crate::shared::infrastructure::employee_store::in_memory::InMemoryEmployeeStore;
use crate::shell::http::router;
use crate::shell::seed::seed_employees;
use crate::shell::state::AppState;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client_for(app: Router) -> EmployeeClient {
    let addr = serve(app).await;
    EmployeeClient::new(ClientConfig::new(format!("http://{addr}")))
}

async fn seeded_client() -> EmployeeClient {
    let store = InMemoryEmployeeStore::with_employees(seed_employees());
    client_for(router(AppState::new(Arc::new(store)))).await
}

#[tokio::test]
async fn lists_the_seeded_employees() {
    let client = seeded_client().await;
    assert_eq!(client.list_employees().await.unwrap(), seed_employees());
}

#[tokio::test]
async fn created_employee_round_trips_through_get() {
    let client = seeded_client().await;

    let created = client
        .create_employee(Employee::new("X", "P", 100.0).with_id(99))
        .await
        .unwrap();
    assert_eq!(created.id, Some(6));

    let fetched = client.get_employee(6).await.unwrap();
    assert_eq!(fetched, Employee::new("X", "P", 100.0).with_id(6));
}

#[tokio::test]
async fn update_replaces_the_record_at_the_path_id() {
    let client = seeded_client().await;

    let updated = client
        .update_employee(3, Employee::new("Carlos L.", "SRE", 61_000.0).with_id(42))
        .await
        .unwrap();

    assert_eq!(updated, Employee::new("Carlos L.", "SRE", 61_000.0).with_id(3));
    assert_eq!(client.get_employee(3).await.unwrap(), updated);
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let client = seeded_client().await;

    let deleted = client.delete_employee(1).await.unwrap();

    assert_eq!(deleted.message, "Empleado eliminado correctamente");
    assert_eq!(deleted.employee, seed_employees()[0]);
    assert_eq!(client.list_employees().await.unwrap().len(), 4);

    let again = client.delete_employee(1).await.unwrap_err();
    assert!(matches!(again, EmployeeError::NotFound(_)));
}

#[tokio::test]
async fn unknown_id_is_normalized_without_the_json_body() {
    let client = seeded_client().await;

    let err = client.get_employee(999).await.unwrap_err();

    assert!(matches!(err, EmployeeError::NotFound(_)));
    assert_eq!(err.to_string(), "Error del servidor: 404 - Not Found");
}

#[tokio::test]
async fn missing_name_is_a_bad_request() {
    let client = seeded_client().await;

    let err = client
        .create_employee(Employee::new("", "QA", 1.0))
        .await
        .unwrap_err();

    assert!(matches!(err, EmployeeError::BadRequest(_)));
    assert_eq!(err.to_string(), "Error del servidor: 400 - Bad Request");
}

#[tokio::test]
async fn plain_text_error_body_is_appended() {
    async fn maintenance() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "mantenimiento")
    }
    let client = client_for(Router::new().route("/employees", get(maintenance))).await;

    let err = client.list_employees().await.unwrap_err();

    assert!(matches!(err, EmployeeError::ServerFault(_)));
    assert_eq!(
        err.to_string(),
        "Error del servidor: 503 - Service Unavailable - mantenimiento"
    );
}

#[tokio::test]
async fn undecodable_success_body_is_a_server_fault() {
    async fn garbage() -> &'static str {
        "ok"
    }
    let client = client_for(Router::new().route("/employees", get(garbage))).await;

    let err = client.list_employees().await.unwrap_err();

    assert_eq!(err.to_string(), "Error del servidor: 200 - OK");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = EmployeeClient::new(ClientConfig::new(format!("http://{addr}")));

    let err = client.list_employees().await.unwrap_err();

    assert!(matches!(err, EmployeeError::Transport(_)));
    assert!(err.to_string().starts_with("Error del cliente: "));
}

type Received = Arc<Mutex<Vec<Value>>>;

async fn echo(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.lock().unwrap().push(body.clone());
    Json(body)
}

fn echo_router(received: Received) -> Router {
    Router::new()
        .route("/employees", post(echo))
        .route("/employees/{id}", put(echo))
        .with_state(received)
}

#[tokio::test]
async fn create_sends_no_id_and_update_sends_the_path_id() {
    let received = Received::default();
    let client = client_for(echo_router(received.clone())).await;

    client
        .create_employee(Employee::new("Ana", "QA", 1.0).with_id(99))
        .await
        .unwrap();
    client
        .update_employee(7, Employee::new("Ana", "QA", 2.0).with_id(99))
        .await
        .unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].get("id").is_none());
    assert_eq!(bodies[0]["name"], "Ana");
    assert_eq!(bodies[1]["id"], 7);
    assert_eq!(bodies[1]["salary"], 2.0);
}

#[tokio::test]
async fn status_without_a_reason_has_no_trailing_separator() {
    async fn unknown() -> StatusCode {
        StatusCode::from_u16(599).unwrap()
    }
    let client = client_for(Router::new().route("/employees", get(unknown))).await;

    let err = client.list_employees().await.unwrap_err();

    assert_eq!(err.to_string(), "Error del servidor: 599");
}
