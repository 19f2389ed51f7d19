use crate::{ApiError, AppState};

use ba_auth::Transport;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Proof that a request passed the shared-secret gate and the rate limiter.
///
/// Extracted from request parts only, so a rejected request never has its
/// body read and never reaches the stores.
#[derive(Debug, Clone, Copy)]
pub struct SyncAuthorization;

impl FromRequestParts<AppState> for SyncAuthorization {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        // The URI scheme is client-supplied and ignored
        let transport = Transport::classify(
            parts
                .headers
                .get(FORWARDED_PROTO_HEADER)
                .and_then(|v| v.to_str().ok()),
            state.trust_forwarded_proto,
        );

        // Non-visible-ASCII header values are treated as absent
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let verdict = state
            .verifier
            .verify(transport, authorization)
            .and_then(|_| state.rate_limiter.check());

        if let Err(ref e) = verdict {
            state.metrics.request_denied(e.error_code());
        }

        async move { verdict.map(|_| SyncAuthorization).map_err(ApiError::from) }
    }
}
