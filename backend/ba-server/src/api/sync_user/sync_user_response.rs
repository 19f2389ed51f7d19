use ba_core::LocalAccount;

use serde::Serialize;

/// Success body: the linked local account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncUserResponse {
    pub wp_user_id: i64,
    pub user_login: String,
    pub user_email: String,
    pub linked: bool,
}

impl From<&LocalAccount> for SyncUserResponse {
    fn from(account: &LocalAccount) -> Self {
        Self {
            wp_user_id: account.id,
            user_login: account.login.clone(),
            user_email: account.email.clone(),
            linked: true,
        }
    }
}
