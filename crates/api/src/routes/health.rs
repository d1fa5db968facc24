use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the primary store is configured but
    /// unreachable (requests are then served from the JSON file).
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Store tried first for every request.
    pub primary_store: &'static str,
    /// Whether the primary store answered; `null` when none is configured.
    pub primary_healthy: Option<bool>,
    /// Whether quote-request emails can be sent.
    pub quote_email_enabled: bool,
    /// Whether images are served through the CDN.
    pub cdn_images_enabled: bool,
}

/// GET /health -- returns service and primary store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let primary_healthy = match &state.pool {
        Some(pool) => Some(portfolio_db::health_check(pool).await.is_ok()),
        None => None,
    };

    let status = if primary_healthy == Some(false) {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        primary_store: state.projects.primary_name(),
        primary_healthy,
        quote_email_enabled: state.config.quote_email_enabled,
        cdn_images_enabled: state.config.cdn_images_enabled,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
