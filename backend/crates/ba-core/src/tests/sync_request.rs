use crate::{ExternalIdentity, SyncError, SyncRequest};

use googletest::prelude::*;

fn identity(name: Option<&str>) -> ExternalIdentity {
    ExternalIdentity {
        id: "ba-1".to_string(),
        name: name.map(String::from),
        email: "stored@example.com".to_string(),
    }
}

#[test]
fn given_valid_fields_when_validated_then_fields_are_sanitized() {
    let request = SyncRequest::validate(
        Some("  ba-123 "),
        Some(" jane@Example.COM "),
        Some("<b>Jane</b>   Doe"),
    )
    .unwrap();

    assert_that!(request.id(), eq("ba-123"));
    assert_that!(request.email(), eq("jane@example.com"));
    assert_that!(request.name(), eq("Jane Doe"));
}

#[test]
fn given_missing_id_when_validated_then_missing_parameters() {
    let result = SyncRequest::validate(None, Some("jane@example.com"), None);

    assert!(matches!(result, Err(SyncError::MissingParameters { .. })));
}

#[test]
fn given_blank_email_when_validated_then_missing_parameters() {
    let result = SyncRequest::validate(Some("ba-1"), Some("   "), None);

    assert!(matches!(result, Err(SyncError::MissingParameters { .. })));
}

#[test]
fn given_id_made_only_of_markup_when_validated_then_missing_parameters() {
    let result = SyncRequest::validate(Some("<script></script>"), Some("a@example.com"), None);

    assert!(matches!(result, Err(SyncError::MissingParameters { .. })));
}

#[test]
fn given_malformed_email_when_validated_then_validation_error_on_email() {
    let err = SyncRequest::validate(Some("ba-1"), Some("jane@"), None).unwrap_err();

    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
    assert_that!(err.field(), some(eq("email")));
}

#[test]
fn given_request_without_name_when_converted_then_stored_name_is_used() {
    let request = SyncRequest::validate(Some("ba-1"), Some("jane@example.com"), None).unwrap();

    let candidate = request.to_candidate(&identity(Some("Stored Name")));

    assert_that!(candidate.name, eq("Stored Name"));
    assert_that!(candidate.email, eq("jane@example.com"));
}

#[test]
fn given_request_with_name_when_converted_then_request_name_wins() {
    let request =
        SyncRequest::validate(Some("ba-1"), Some("jane@example.com"), Some("Given")).unwrap();

    let candidate = request.to_candidate(&identity(Some("Stored Name")));

    assert_that!(candidate.name, eq("Given"));
}

#[test]
fn given_no_name_anywhere_when_converted_then_name_is_empty() {
    let request = SyncRequest::validate(Some("ba-1"), Some("jane@example.com"), None).unwrap();

    let candidate = request.to_candidate(&identity(None));

    assert_that!(candidate.name, eq(""));
}
