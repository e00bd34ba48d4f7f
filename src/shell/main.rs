use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use driver_hours::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use driver_hours::shell::config::AppConfig;
use driver_hours::shell::http::router;
use driver_hours::shell::state::{AppState, Stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory adapters until a hosted store is wired in
    let state = AppState::new(
        Arc::new(InMemoryIdentityProvider::new()),
        Stores::in_memory(),
        config.break_policy,
        config.audit_required,
    );

    let app = router(state);

    tracing::info!(
        addr = %config.addr,
        audit_required = config.audit_required,
        "driver hours API listening, GraphQL at /graphql"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
