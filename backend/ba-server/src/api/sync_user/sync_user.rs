//! Sync endpoint handler
//!
//! The gate runs in the [`SyncAuthorization`] extractor before the body is
//! buffered; everything after it is content-type, JSON and field checks,
//! then the sync service.

use crate::{
    ApiError, ApiResult, AppState, SyncAuthorization, SyncUserRequest, SyncUserResponse,
    is_json_content_type,
};

use ba_core::SyncAction;

use std::time::Instant;

use axum::{Json, body::Bytes, extract::State};
use http::HeaderMap;
use log::info;

/// POST /better-auth/v1/sync-user
pub async fn sync_user(
    State(state): State<AppState>,
    _authorized: SyncAuthorization,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SyncUserResponse>> {
    let started = Instant::now();

    let result = handle(&state, &headers, &body).await;

    match &result {
        Ok((response, action)) => {
            state.metrics.sync_completed(*action, started.elapsed());
            info!(
                "Synced identity to account {} ({}): {}",
                response.wp_user_id,
                response.user_login,
                action.as_str()
            );
        }
        Err(e) => state.metrics.sync_failed(e.error_code()),
    }

    result.map(|(response, _)| Json(response))
}

async fn handle(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiResult<(SyncUserResponse, SyncAction)> {
    if !is_json_content_type(headers) {
        return Err(ApiError::unsupported_media_type());
    }

    let request: SyncUserRequest = serde_json::from_slice(body).map_err(ApiError::invalid_json)?;
    let validated = request.validate()?;

    let outcome = state.sync_service.sync(&validated).await?;

    Ok((SyncUserResponse::from(&outcome.account), outcome.action))
}
