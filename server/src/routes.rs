//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two JSON status endpoints consumed by the home page client. CORS is scoped
//! to the configured frontend origin so a browser-hosted frontend served from
//! another port can reach the API during development.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use api::{HEALTH_PATH, HealthInfo, IntegrationMessage, MESSAGE_PATH};

/// Build the API router. `frontend_origin` becomes the allowed CORS origin.
pub fn app(frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(MESSAGE_PATH, get(message))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// `GET /api/health` — liveness payload for the home page connectivity check.
async fn health() -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "healthy".to_owned(),
        message: "Backend is running successfully".to_owned(),
    })
}

/// `GET /api/message` — the greeting shown once the frontend is wired up.
async fn message() -> Json<IntegrationMessage> {
    Json(IntegrationMessage {
        message: "You've successfully integrated the backend!".to_owned(),
    })
}
