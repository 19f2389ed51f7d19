use crate::{LocalAccount, Result as SyncErrorResult};

use async_trait::async_trait;

/// Delivers a "set your password" message to a synced account whose
/// credential was never disclosed.
#[async_trait]
pub trait PasswordSetupNotifier: Send + Sync {
    async fn send_password_setup(&self, account: &LocalAccount) -> SyncErrorResult<()>;
}
