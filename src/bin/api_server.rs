// Farm Advisor API Server Binary Entry Point
//
// Usage: cargo run --features api --bin api_server

use farm_advisor::{AppState, ServerConfig, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "farm_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    match config.diagnosis_seed {
        Some(seed) => tracing::info!("  DIAGNOSIS_SEED: {}", seed),
        None => tracing::info!("  DIAGNOSIS_SEED: (entropy)"),
    }

    let addr = config.socket_addr();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
