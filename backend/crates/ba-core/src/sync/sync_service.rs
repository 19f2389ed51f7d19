use crate::{
    IdentityStore, Result as SyncErrorResult, SyncError, SyncOutcome, SyncReconciler, SyncRequest,
};

use std::sync::Arc;

use log::debug;

/// Eligibility checks in front of the reconciler.
///
/// An identity must exist in the identity store and have at least one
/// provider account before a local account may be produced for it.
#[derive(Clone)]
pub struct SyncService {
    identities: Arc<dyn IdentityStore>,
    reconciler: SyncReconciler,
}

impl SyncService {
    pub fn new(identities: Arc<dyn IdentityStore>, reconciler: SyncReconciler) -> Self {
        Self {
            identities,
            reconciler,
        }
    }

    pub fn identities(&self) -> &Arc<dyn IdentityStore> {
        &self.identities
    }

    pub fn reconciler(&self) -> &SyncReconciler {
        &self.reconciler
    }

    pub async fn sync(&self, request: &SyncRequest) -> SyncErrorResult<SyncOutcome> {
        let identity = self
            .identities
            .find_identity(request.id())
            .await?
            .ok_or_else(|| SyncError::identity_not_found(request.id()))?;

        let linked_accounts = self.identities.count_linked_accounts(request.id()).await?;
        if linked_accounts == 0 {
            return Err(SyncError::no_linked_account(request.id()));
        }

        debug!(
            "Identity {} eligible for sync ({} provider accounts)",
            identity.id, linked_accounts
        );

        let candidate = request.to_candidate(&identity);
        self.reconciler.reconcile(&candidate).await
    }
}
