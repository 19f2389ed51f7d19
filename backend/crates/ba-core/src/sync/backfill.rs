//! One-shot pass that reconciles every stored external identity.
//!
//! Used when the bridge is installed after the provider already has users.
//! Identities are processed sequentially; a failure is recorded and the pass
//! continues.

use crate::{IdentityStore, Result as SyncErrorResult, SyncAction, SyncCandidate, SyncReconciler};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackfillFailure {
    pub identity_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    pub scanned: usize,
    pub created: usize,
    pub linked: usize,
    pub already_linked: usize,
    pub failures: Vec<BackfillFailure>,
}

impl BackfillReport {
    fn record(&mut self, action: SyncAction) {
        match action {
            SyncAction::Created => self.created += 1,
            SyncAction::Linked => self.linked += 1,
            SyncAction::AlreadyLinked => self.already_linked += 1,
        }
    }
}

pub async fn backfill(
    identities: &dyn IdentityStore,
    reconciler: &SyncReconciler,
) -> SyncErrorResult<BackfillReport> {
    let rows = identities.list_identities().await?;
    let mut report = BackfillReport::default();

    for identity in &rows {
        report.scanned += 1;

        match reconciler.reconcile(&SyncCandidate::from(identity)).await {
            Ok(outcome) => report.record(outcome.action),
            Err(e) => {
                warn!("Backfill of identity {} failed: {}", identity.id, e);
                report.failures.push(BackfillFailure {
                    identity_id: identity.id.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Backfill complete: scanned={}, created={}, linked={}, already_linked={}, failed={}",
        report.scanned,
        report.created,
        report.linked,
        report.already_linked,
        report.failures.len()
    );

    Ok(report)
}
