//! JSON pricing API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    routing::post,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::{PricingErrorResponse, QuoteResponse};
use super::services::{generate_quotation, PricingError};

/// Pricing API routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/pricing/quote", post(quote))
        .layer(cors)
}

type ApiError = (StatusCode, Json<PricingErrorResponse>);

/// Price a single window line
async fn quote(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::info!("Quote request unreadable: {}", rejection.body_text());
        (
            rejection.status(),
            Json(PricingErrorResponse::invalid_request(rejection.body_text())),
        )
    })?;

    let input = QuoteRequest::from_json(&body)
        .map_err(invalid_input)?
        .into_input(state.config.default_gst_rate);
    let result = generate_quotation(&input).map_err(invalid_input)?;

    Ok(Json(QuoteResponse::new(&input, &result, &state.config.currency)))
}

fn invalid_input(e: PricingError) -> ApiError {
    tracing::info!("Quote rejected: {}", e);
    (StatusCode::UNPROCESSABLE_ENTITY, Json(PricingErrorResponse::from(&e)))
}
