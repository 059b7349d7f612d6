use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::config::Config;
use events_api::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let state = AppState {
        events: Arc::new(InMemoryEventStore::new()),
    };
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("events API listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
