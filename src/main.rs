use anyhow::Result;
use tokio::net::TcpListener;

use upvc_proposal::{app, config::AppConfig, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Loads .env first, so RUST_LOG from it reaches the subscriber
    let config = AppConfig::from_env()?;
    init_tracing();

    let addr = config.bind_addr();
    tracing::info!(
        currency = %config.currency,
        default_gst_rate = %config.default_gst_rate,
        cache_capacity = config.proposal_cache_capacity,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
