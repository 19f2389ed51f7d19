use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Sync requests must be sent over HTTPS {location}")]
    TransportInsecure { location: ErrorLocation },

    #[error("Shared API secret is not configured {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("Invalid or missing API secret {location}")]
    InvalidOrMissing { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn transport_insecure() -> Self {
        Self::TransportInsecure {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured() -> Self {
        Self::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_or_missing() -> Self {
        Self::InvalidOrMissing {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TransportInsecure { .. } => "TRANSPORT_INSECURE",
            Self::NotConfigured { .. } => "SECRET_NOT_CONFIGURED",
            Self::InvalidOrMissing { .. } => "INVALID_SECRET",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        }
    }

    /// Client-facing message without the source location
    pub fn public_message(&self) -> String {
        match self {
            Self::TransportInsecure { .. } => "Sync requests must be sent over HTTPS.".to_string(),
            Self::NotConfigured { .. } => "API secret is not configured.".to_string(),
            Self::InvalidOrMissing { .. } => "Invalid or missing API secret.".to_string(),
            Self::RateLimitExceeded {
                limit, window_secs, ..
            } => format!(
                "Rate limit exceeded: {} requests per {}s.",
                limit, window_secs
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
