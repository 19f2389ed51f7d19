use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - component status with a database ping
pub async fn health(State(state): State<AppState>) -> Response {
    let database_ok = ping(&state.pool).await;

    let (status, label) = if database_ok {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = json!({
        "status": label,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
            "auth": if state.verifier.is_configured() { "configured" } else { "not_configured" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body)).into_response()
}

/// GET /live - the process answers
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - the database accepts queries
pub async fn readiness(State(state): State<AppState>) -> Response {
    if ping(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}

async fn ping(pool: &SqlitePool) -> bool {
    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            error!("Database ping failed: {}", e);
            false
        }
    }
}
