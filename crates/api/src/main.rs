//! BidCraft API Server

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api=debug".parse()?)
                .add_directive("processor=debug".parse()?)
                .add_directive("ai=info".parse()?)
                .add_directive("db=info".parse()?),
        )
        .init();

    info!("🚀 Starting BidCraft API");

    // Load configuration
    let config = common::Config::from_env();

    // In-memory data, reset on every restart
    let store = processor::seed::store(config.simulated_latency());
    info!(
        "Simulated backend latency: {}ms",
        config.simulated_latency_ms
    );

    if config.openai_api_key.is_some() {
        info!("🤖 AI features enabled (model {})", config.openai_model);
    } else {
        warn!("🤖 AI features disabled (OPENAI_API_KEY not set)");
    }

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), store));

    let app = routes::api_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
