pub mod error;
pub mod extractors;
pub mod sync_user;
