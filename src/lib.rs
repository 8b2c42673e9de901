//! UPVC window price proposal generator.
//!
//! A decimal pricing engine (`pricing`) wrapped in a small Axum site that
//! collects the proposal form, renders the priced proposal and exports it
//! as CSV.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod proposal;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::ProposalCache;
use crate::config::AppConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub cache: ProposalCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            cache: ProposalCache::from_config(&config),
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::proposals::new_form))
        .route("/proposals", post(routes::proposals::create))
        .route("/proposals/:id", get(routes::proposals::show))
        .route("/proposals/:id/csv", get(routes::proposals::export_csv))
        .route("/health", get(routes::health::health))
        .merge(pricing::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize tracing subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("upvc_proposal=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
