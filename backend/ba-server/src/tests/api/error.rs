use crate::ApiError;

use ba_auth::{AuthError, RateLimitConfig, SyncRateLimiter};
use ba_core::SyncError;

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_bad_secret_when_rendered_then_403_authorization() {
    // Given
    let error = ApiError::from(AuthError::invalid_or_missing());

    // When
    let (status, json) = render(error).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"]["code"].as_str(), some(eq("INVALID_SECRET")));
    assert_that!(json["error"]["kind"].as_str(), some(eq("authorization")));
    assert_that!(json["error"]["field"].is_null(), eq(true));
}

#[tokio::test]
async fn given_insecure_transport_when_rendered_then_403_without_location() {
    let (status, json) = render(ApiError::from(AuthError::transport_insecure())).await;

    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"]["code"].as_str(), some(eq("TRANSPORT_INSECURE")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(not(contains_substring(".rs")))
    );
}

#[tokio::test]
async fn given_exhausted_limiter_when_rendered_then_429() {
    // Given
    let limiter = SyncRateLimiter::new(RateLimitConfig {
        max_requests: 1,
        window_secs: 60,
    });
    limiter.check().unwrap();
    let error = ApiError::from(limiter.check().unwrap_err());

    // When
    let (status, json) = render(error).await;

    // Then
    assert_that!(status, eq(StatusCode::TOO_MANY_REQUESTS));
    assert_that!(json["error"]["code"].as_str(), some(eq("RATE_LIMIT_EXCEEDED")));
    assert_that!(json["error"]["kind"].as_str(), some(eq("rate_limited")));
}

#[tokio::test]
async fn given_invalid_email_when_rendered_then_400_with_field() {
    let error = ApiError::from(SyncError::validation("'x@' is not a valid email address", Some("email")));

    let (status, json) = render(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"].as_str(), some(eq("email")));
}

#[tokio::test]
async fn given_missing_identity_when_rendered_then_404() {
    let (status, json) = render(ApiError::from(SyncError::identity_not_found("ba-x"))).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["kind"].as_str(), some(eq("not_found")));
}

#[tokio::test]
async fn given_identity_without_provider_account_when_rendered_then_422() {
    let (status, json) =
        render(ApiError::from(SyncError::no_linked_account("ba-no-acct"))).await;

    assert_that!(status, eq(StatusCode::UNPROCESSABLE_ENTITY));
    assert_that!(json["error"]["code"].as_str(), some(eq("NO_LINKED_ACCOUNT")));
    assert_that!(json["error"]["kind"].as_str(), some(eq("precondition")));
}

#[tokio::test]
async fn given_store_failure_when_rendered_then_500_with_sanitized_message() {
    // Given
    let error = ApiError::from(SyncError::store("error returned from database: disk I/O error"));

    // When
    let (status, json) = render(error).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(
        json["error"]["message"].as_str(),
        some(not(contains_substring("disk I/O")))
    );
}

#[tokio::test]
async fn given_wrong_content_type_when_rendered_then_415() {
    let (status, json) = render(ApiError::unsupported_media_type()).await;

    assert_that!(status, eq(StatusCode::UNSUPPORTED_MEDIA_TYPE));
    assert_that!(
        json["error"]["code"].as_str(),
        some(eq("UNSUPPORTED_MEDIA_TYPE"))
    );
}

#[tokio::test]
async fn given_malformed_json_when_rendered_then_400_invalid_json() {
    let parse_error = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();

    let (status, json) = render(ApiError::invalid_json(parse_error)).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("INVALID_JSON")));
}
