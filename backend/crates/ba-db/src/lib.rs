pub mod connection;
pub mod error;
pub mod password_hash;
pub mod repositories;

pub use connection::pool::{MIGRATOR, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use password_hash::{hash_secret, verify_secret};
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::local_account_repository::LocalAccountRepository;
pub use repositories::outbox_notifier::{OutboxNotifier, OutboxMessage};
pub use repositories::schema_inspector::{IDENTITY_TABLES, SchemaInspector};
