mod analysis;
mod assistant;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::fetcher::PageFetcher;
use crate::analysis::tagger::load_tagger;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Optimizer API v{}", env!("CARGO_PKG_VERSION"));

    // Load the part-of-speech model before accepting any traffic.
    // Without it the process does not serve at all.
    let workers = config.tagger_workers;
    let tagger = tokio::task::spawn_blocking(move || load_tagger(workers))
        .await
        .context("tagger loader panicked")?
        .context("failed to initialize part-of-speech tagger")?;

    let fetcher =
        PageFetcher::new(config.max_page_bytes).context("failed to build page fetcher")?;

    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url)
        .context("failed to build completion client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        fetcher,
        tagger,
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // CORS is open to any origin, matching the browser front end's needs.
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
