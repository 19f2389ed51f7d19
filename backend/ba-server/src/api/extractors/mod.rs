pub mod sync_authorization;
