//! Teardown of the bridge's footprint in the user store.
//!
//! Every linked account is first sent a password-setup message, since its
//! credential was never disclosed and external login is going away. The
//! account is then either unlinked (kept as an ordinary account) or deleted.

use crate::{AccountDirectory, PasswordSetupNotifier, Result as SyncErrorResult};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffboardMode {
    UnlinkAccounts,
    DeleteAccounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffboardingFailure {
    pub account_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OffboardingReport {
    pub notified: usize,
    pub unlinked: usize,
    pub deleted: usize,
    pub failures: Vec<OffboardingFailure>,
}

pub async fn offboard(
    directory: &dyn AccountDirectory,
    notifier: &dyn PasswordSetupNotifier,
    mode: OffboardMode,
) -> SyncErrorResult<OffboardingReport> {
    let accounts = directory.list_linked().await?;
    let mut report = OffboardingReport::default();

    for account in &accounts {
        // A failed notification does not keep the account from being released.
        match notifier.send_password_setup(account).await {
            Ok(()) => report.notified += 1,
            Err(e) => {
                warn!("Password setup for account {} failed: {}", account.id, e);
                report.failures.push(OffboardingFailure {
                    account_id: account.id,
                    message: e.to_string(),
                });
            }
        }

        let released = match mode {
            OffboardMode::UnlinkAccounts => directory.clear_link(account.id).await,
            OffboardMode::DeleteAccounts => directory.delete_account(account.id).await,
        };

        match (released, mode) {
            (Ok(()), OffboardMode::UnlinkAccounts) => report.unlinked += 1,
            (Ok(()), OffboardMode::DeleteAccounts) => report.deleted += 1,
            (Err(e), _) => {
                warn!("Releasing account {} failed: {}", account.id, e);
                report.failures.push(OffboardingFailure {
                    account_id: account.id,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Offboarding complete: notified={}, unlinked={}, deleted={}, failed={}",
        report.notified,
        report.unlinked,
        report.deleted,
        report.failures.len()
    );

    Ok(report)
}
