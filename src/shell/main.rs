use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use studio_bookings::modules::accounts::adapters::outbound::session_storage_file::JsonFileSessionStorage;
use studio_bookings::shell::config::Config;
use studio_bookings::shell::http::router;
use studio_bookings::shell::state::{AppState, Backends};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory stores for now; sessions alone survive restarts when SESSION_FILE is set.
    let mut backends = Backends::in_memory();
    if let Some(path) = &config.session_file {
        tracing::info!(path = %path.display(), "persisting sessions to disk");
        backends.sessions = Arc::new(JsonFileSessionStorage::new(path));
    }
    if let Some(admin) = &config.admin {
        backends.seed_admin(&admin.email, &admin.password).await?;
    }

    let state = AppState::new(config.slot_template, &backends);
    state.gate.rehydrate().await;

    let app = router(state);

    tracing::info!("listening on http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
