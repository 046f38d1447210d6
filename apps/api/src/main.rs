mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod strive;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::VertexAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Strive flow server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model backend (ADC tokens unless GOOGLE_ACCESS_TOKEN overrides)
    let tokens = llm_client::auth::token_source(&config).await?;
    let model = VertexAiClient::new(&config, tokens)?;
    info!(
        "Vertex AI client initialized (model: {}, location: {}, project: {})",
        llm_client::MODEL,
        config.gcloud_location,
        config.gcloud_project
    );

    let state = AppState {
        model: Arc::new(model),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Serving flow /{} on {addr}", strive::FLOW_NAME);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
