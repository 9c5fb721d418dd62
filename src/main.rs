// whalehub-home/src/main.rs
mod config;
mod handlers;
mod home;
mod middleware;
mod models;
mod routes;
mod services;
mod templates;

use crate::config::Config;
use crate::routes::create_router;
use crate::services::backend::{BackendClient, HomeApi};
use crate::services::clock::{Clock, SystemClock};
use crate::services::store::VisitorStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn HomeApi>,
    pub visitors: VisitorStore,
    pub clock: Arc<dyn Clock>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting WhaleHub home server...");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    tracing::info!("🔌 Backend API: {}", config.backend_url);
    let backend = BackendClient::new(config.backend_url.clone(), config.backend_timeout())?;

    let visitors = VisitorStore::new(config.visitor_ttl(), config.visitor_store_max_bytes);

    let state = Arc::new(AppState {
        config: config.clone(),
        backend: Arc::new(backend),
        visitors,
        clock: Arc::new(SystemClock),
    });

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_addr()?;
    tracing::info!("✅ Listening on {}", addr);
    tracing::info!("🌐 Home page: http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
