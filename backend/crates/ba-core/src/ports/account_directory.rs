use crate::{LocalAccount, NewLocalAccount, Result as SyncErrorResult};

use async_trait::async_trait;

/// Capability interface over the host user store.
///
/// Email and login uniqueness are enforced by the implementation, and
/// `create_account` is atomic: on error nothing was written.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> SyncErrorResult<Option<LocalAccount>>;

    async fn find_by_id(&self, id: i64) -> SyncErrorResult<Option<LocalAccount>>;

    async fn login_exists(&self, login: &str) -> SyncErrorResult<bool>;

    /// Returns the new account id
    async fn create_account(&self, account: NewLocalAccount) -> SyncErrorResult<i64>;

    async fn get_link(&self, id: i64) -> SyncErrorResult<Option<String>>;

    async fn set_link(&self, id: i64, identity_id: &str) -> SyncErrorResult<()>;

    async fn clear_link(&self, id: i64) -> SyncErrorResult<()>;

    async fn delete_account(&self, id: i64) -> SyncErrorResult<()>;

    /// All accounts carrying a non-empty link, ordered by id
    async fn list_linked(&self) -> SyncErrorResult<Vec<LocalAccount>>;
}
