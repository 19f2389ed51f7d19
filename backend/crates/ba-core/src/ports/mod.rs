pub mod account_directory;
pub mod identity_store;
pub mod password_setup_notifier;
pub mod token_generator;
