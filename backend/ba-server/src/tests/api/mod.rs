mod error;
mod sync_user_request;
