use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use expenses::modules::expenses::adapters::outbound::expenses_in_memory::InMemoryExpenses;
use expenses::shell::config::{DEFAULT_LOG_FILTER, ServerConfig};
use expenses::shell::http::router;
use expenses::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(Arc::new(InMemoryExpenses::new()));
    let app = router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Expenses API: http://{}/api/expenses", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
