//! Local lifecycle commands run directly against the bridge database.
//!
//! These are the operator-side counterparts of the sync endpoint: bulk
//! backfill after install, password-setup mail for a synced account,
//! teardown on uninstall, and a status report before deactivation.

use crate::error::Result as CommandResult;

use ba_config::Config;
use ba_core::{
    BackfillReport, IdentityStore, OffboardMode, OffboardingReport, SyncReconciler, backfill,
    offboard, send_password_setup,
};
use ba_db::{IdentityRepository, LocalAccountRepository, OutboxNotifier, SchemaInspector};

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use sqlx::SqlitePool;

const IDENTITY_USER_TABLE: &str = "ba_user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordSetupSummary {
    pub account_id: i64,
    pub email: String,
    pub queued: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffboardSummary {
    #[serde(flatten)]
    pub report: OffboardingReport,
    pub mode: &'static str,
    pub dropped_tables: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub identities: u64,
    pub linked_accounts: u64,
    pub missing_tables: Vec<&'static str>,
    /// Present when deactivating would leave provider users unsynced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub struct Lifecycle {
    pool: SqlitePool,
    config: Config,
}

impl Lifecycle {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }

    fn accounts(&self) -> LocalAccountRepository {
        LocalAccountRepository::new(self.pool.clone())
    }

    fn notifier(&self) -> CommandResult<OutboxNotifier> {
        Ok(OutboxNotifier::new(
            self.pool.clone(),
            &self.config.lifecycle.password_reset_url,
        )?)
    }

    /// Reconcile every stored provider identity
    pub async fn backfill(&self) -> CommandResult<BackfillReport> {
        let identities = IdentityRepository::new(self.pool.clone());
        let reconciler = SyncReconciler::new(
            Arc::new(self.accounts()),
            self.config.sync.reconciler_settings(),
        );

        let report = backfill(&identities, &reconciler).await?;
        if !report.failures.is_empty() {
            warn!("Backfill finished with {} failures", report.failures.len());
        }

        Ok(report)
    }

    pub async fn password_setup(&self, account_id: i64) -> CommandResult<PasswordSetupSummary> {
        let account =
            send_password_setup(&self.accounts(), &self.notifier()?, account_id).await?;

        Ok(PasswordSetupSummary {
            account_id: account.id,
            email: account.email,
            queued: true,
        })
    }

    /// Release every linked account, then optionally drop the provider tables.
    ///
    /// Accounts are deleted when `delete_users` is passed or
    /// `lifecycle.delete_users_on_uninstall` is set; otherwise only unlinked.
    pub async fn offboard(
        &self,
        delete_users: bool,
        drop_tables: bool,
    ) -> CommandResult<OffboardSummary> {
        let mode = if delete_users || self.config.lifecycle.delete_users_on_uninstall {
            OffboardMode::DeleteAccounts
        } else {
            OffboardMode::UnlinkAccounts
        };

        let report = offboard(&self.accounts(), &self.notifier()?, mode).await?;

        if drop_tables {
            SchemaInspector::new(self.pool.clone())
                .drop_identity_tables()
                .await?;
        }

        info!(
            "Offboarding complete: {} notified, {} unlinked, {} deleted",
            report.notified, report.unlinked, report.deleted
        );

        Ok(OffboardSummary {
            report,
            mode: match mode {
                OffboardMode::DeleteAccounts => "delete_accounts",
                OffboardMode::UnlinkAccounts => "unlink_accounts",
            },
            dropped_tables: drop_tables,
        })
    }

    pub async fn status(&self) -> CommandResult<StatusReport> {
        let missing_tables = SchemaInspector::new(self.pool.clone())
            .missing_identity_tables()
            .await?;

        let identities = if missing_tables.contains(&IDENTITY_USER_TABLE) {
            0
        } else {
            IdentityRepository::new(self.pool.clone())
                .count_identities()
                .await?
        };

        let linked_accounts = self.accounts().count_linked().await?;

        let warning = (identities > 0).then(|| {
            format!(
                "{} provider users are stored; while the bridge is deactivated \
                 none of them will be synced to local accounts",
                identities
            )
        });

        Ok(StatusReport {
            identities,
            linked_accounts,
            missing_tables,
            warning,
        })
    }
}
