use crate::{ExternalIdentity, Result as SyncErrorResult};

use async_trait::async_trait;

/// Read-only access to the external identity tables.
///
/// Implementations must not cache; every call reflects current storage.
/// Storage failures surface as `SyncError::StoreUnavailable`, never as an
/// empty result.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_identity(&self, id: &str) -> SyncErrorResult<Option<ExternalIdentity>>;

    /// Number of provider accounts attached to the identity
    async fn count_linked_accounts(&self, id: &str) -> SyncErrorResult<u64>;

    async fn list_identities(&self) -> SyncErrorResult<Vec<ExternalIdentity>>;

    async fn count_identities(&self) -> SyncErrorResult<u64>;
}
