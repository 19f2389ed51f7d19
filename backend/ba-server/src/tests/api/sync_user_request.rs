use crate::{SyncUserRequest, is_json_content_type};

use ba_core::SyncError;

use googletest::prelude::*;
use http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};

fn headers_with(content_type: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
    headers
}

#[test]
fn given_json_with_charset_when_checked_then_accepted() {
    assert_that!(
        is_json_content_type(&headers_with("application/json; charset=utf-8")),
        eq(true)
    );
    assert_that!(is_json_content_type(&headers_with("Application/JSON")), eq(true));
}

#[test]
fn given_other_media_type_when_checked_then_rejected() {
    assert_that!(is_json_content_type(&headers_with("text/plain")), eq(false));
    assert_that!(
        is_json_content_type(&headers_with("application/x-www-form-urlencoded")),
        eq(false)
    );
    assert_that!(is_json_content_type(&HeaderMap::new()), eq(false));
}

#[test]
fn given_body_without_email_when_validated_then_missing_parameters() {
    let request: SyncUserRequest = serde_json::from_str(r#"{"id":"ba-1"}"#).unwrap();

    let result = request.validate();

    assert!(matches!(result, Err(SyncError::MissingParameters { .. })));
}

#[test]
fn given_full_body_when_validated_then_name_is_sanitized() {
    let request: SyncUserRequest =
        serde_json::from_str(r#"{"id":"ba-123","name":" Jane  Doe ","email":"jane@example.com"}"#)
            .unwrap();

    let validated = request.validate().unwrap();

    assert_that!(validated.id(), eq("ba-123"));
    assert_that!(validated.name(), eq("Jane Doe"));
}
