pub mod backfill;
pub mod offboarding;
pub mod password_setup;
pub mod reconciler;
pub mod sync_request;
pub mod sync_service;
