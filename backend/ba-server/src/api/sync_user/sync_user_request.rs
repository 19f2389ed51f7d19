use ba_core::{Result as SyncErrorResult, SyncRequest};

use http::{HeaderMap, header::CONTENT_TYPE};
use serde::Deserialize;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Raw body of `POST /better-auth/v1/sync-user`.
///
/// Every field is optional at this stage; presence and shape are checked by
/// [`SyncUserRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncUserRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SyncUserRequest {
    #[track_caller]
    pub fn validate(&self) -> SyncErrorResult<SyncRequest> {
        SyncRequest::validate(
            self.id.as_deref(),
            self.email.as_deref(),
            self.name.as_deref(),
        )
    }
}

/// True when the media type is `application/json`, ignoring parameters
/// such as `charset` and letter case.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}
