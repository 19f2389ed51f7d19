pub mod identity_repository;
pub mod local_account_repository;
pub mod outbox_notifier;
pub mod schema_inspector;
