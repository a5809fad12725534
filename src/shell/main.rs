use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use employees::shared::infrastructure::employee_store::in_memory::InMemoryEmployeeStore;
use employees::shell::config::ServerConfig;
use employees::shell::http::router;
use employees::shell::seed::seed_employees;
use employees::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "employees=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store = if config.seed {
        InMemoryEmployeeStore::with_employees(seed_employees())
    } else {
        InMemoryEmployeeStore::new()
    };
    let app = router(AppState::new(Arc::new(store)));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    tracing::info!(seed = config.seed, "Employees API: http://{}/employees", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
