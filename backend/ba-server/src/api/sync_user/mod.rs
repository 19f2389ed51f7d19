#[allow(clippy::module_inception)]
pub mod sync_user;
pub mod sync_user_request;
pub mod sync_user_response;
