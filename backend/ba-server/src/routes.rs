use crate::{AppState, health, sync_user};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

pub const SYNC_USER_PATH: &str = "/better-auth/v1/sync-user";

/// Sync payloads are three short strings
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Sync endpoint
        .route(SYNC_USER_PATH, post(sync_user))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
