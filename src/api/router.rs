// src/api/router.rs
// Router composition: advice endpoint, pickers, health, plus the CORS and
// version headers the Expo web client relies on.

use axum::{
    Json, Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::PROTOCOL_VERSION;
use super::advice::{ask_coach, preflight};
use super::coaching::{daily_challenge_handler, expand_skill_handler};
use crate::state::AppState;

/// Builds the full application router.
///
/// CORS headers are stamped on every response with plain header layers
/// rather than a CORS middleware; a middleware would answer OPTIONS itself
/// and the explicit preflight route must stay reachable to return its 204.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    let allow_origin = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    let allow_methods = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    let allow_headers = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    // Protocol version header on all responses
    let version_header = SetResponseHeaderLayer::if_not_present(
        header::HeaderName::from_static("x-api-version"),
        HeaderValue::from_static(PROTOCOL_VERSION),
    );

    Router::new()
        .route("/health", get(health_handler))
        .route("/advice", post(ask_coach).options(preflight))
        .route("/skill/expand", post(expand_skill_handler))
        .route("/challenge", post(daily_challenge_handler))
        .layer(allow_origin)
        .layer(allow_methods)
        .layer(allow_headers)
        .layer(version_header)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": PROTOCOL_VERSION }))
}
