use crate::{
    AccountDirectory, LocalAccount, PasswordSetupNotifier, Result as SyncErrorResult, SyncError,
};

use log::info;

/// Send a password-setup message to a synced account.
///
/// Only accounts that carry a link qualify; their stored credential was
/// generated at sync time and never disclosed.
pub async fn send_password_setup(
    directory: &dyn AccountDirectory,
    notifier: &dyn PasswordSetupNotifier,
    account_id: i64,
) -> SyncErrorResult<LocalAccount> {
    let account = directory
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| SyncError::account_not_found(account_id))?;

    if !account.is_linked() {
        return Err(SyncError::not_linked(account_id));
    }

    notifier.send_password_setup(&account).await?;
    info!("Password setup sent for account {} ({})", account.id, account.login);

    Ok(account)
}
