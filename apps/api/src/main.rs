mod config;
mod errors;
mod intake;
mod llm_client;
mod models;
mod optimization;
mod routes;
mod state;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::optimization::client::GeminiOptimizer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workflow::sessions::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Optimizer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let optimizer = Arc::new(GeminiOptimizer::new(llm));
    info!(
        "Accepting PDF uploads up to {} bytes",
        config.max_upload_bytes
    );

    // Idle sessions are swept once a minute
    let sessions = SessionStore::new(config.session_idle_ttl);
    sessions.spawn_sweeper(Duration::from_secs(60));
    info!(
        "Sessions expire after {}s idle",
        config.session_idle_ttl.as_secs()
    );

    // Build app state
    let state = AppState {
        sessions,
        optimizer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the front-end origin once it has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
