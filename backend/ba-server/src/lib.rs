pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::sync_authorization::SyncAuthorization,
    sync_user::{
        sync_user::sync_user,
        sync_user_request::{SyncUserRequest, is_json_content_type},
        sync_user_response::SyncUserResponse,
    },
};
pub use app_state::AppState;
pub use metrics::SyncMetrics;

pub use crate::routes::{SYNC_USER_PATH, build_router};
