use ba_auth::AuthError;
use ba_core::{SyncError, SyncErrorKind};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{debug, error, warn};
use serde::Serialize;
use thiserror::Error;

const KIND_AUTHORIZATION: &str = "authorization";
const KIND_RATE_LIMITED: &str = "rate_limited";
const KIND_VALIDATION: &str = "validation";

/// API error response format
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub kind: String,
    pub message: String,
    pub field: Option<String>,
}

/// Errors surfaced by the HTTP layer.
///
/// Every variant renders as an `ApiErrorResponse`; source locations and raw
/// store errors are logged, never sent to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authorization failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Sync failed: {0}")]
    Sync(#[from] SyncError),

    #[error("Unsupported media type: {message} {location}")]
    UnsupportedMediaType {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid JSON body: {message} {location}")]
    InvalidJson {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unsupported_media_type() -> Self {
        Self::UnsupportedMediaType {
            message: "Content-Type must be application/json.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_json(source: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::RateLimitExceeded { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Self::Auth(_) => StatusCode::FORBIDDEN,
            Self::Sync(e) => match e.kind() {
                SyncErrorKind::Validation => StatusCode::BAD_REQUEST,
                SyncErrorKind::NotFound => StatusCode::NOT_FOUND,
                SyncErrorKind::Precondition => StatusCode::UNPROCESSABLE_ENTITY,
                SyncErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.error_code(),
            Self::Sync(e) => e.error_code(),
            Self::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            Self::InvalidJson { .. } => "INVALID_JSON",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(AuthError::RateLimitExceeded { .. }) => KIND_RATE_LIMITED,
            Self::Auth(_) => KIND_AUTHORIZATION,
            Self::Sync(e) => e.kind().as_str(),
            Self::UnsupportedMediaType { .. } | Self::InvalidJson { .. } => KIND_VALIDATION,
        }
    }

    fn body(&self) -> ApiErrorBody {
        let (message, field) = match self {
            Self::Auth(e) => (e.public_message(), None),
            Self::Sync(e) => (e.public_message(), e.field()),
            Self::UnsupportedMediaType { message, .. } => (message.clone(), None),
            Self::InvalidJson { message, .. } => {
                (format!("Request body is not valid JSON: {}", message), None)
            }
        };

        ApiErrorBody {
            code: self.error_code().to_string(),
            kind: self.kind().to_string(),
            message,
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{}", self);
        } else if matches!(self, Self::Auth(AuthError::RateLimitExceeded { .. })) {
            warn!("{}", self);
        } else {
            debug!("{}", self);
        }

        (
            status,
            Json(ApiErrorResponse {
                error: self.body(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
