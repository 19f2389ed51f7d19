use crate::AccountRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record in the host user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAccount {
    pub id: i64,
    /// Unique login name
    pub login: String,
    /// Unique email, the join key against external identities
    pub email: String,
    pub display_name: String,
    pub role: AccountRole,
    /// External identity id that produced or claimed this account
    pub link: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl LocalAccount {
    /// Any non-empty link counts, even one naming a different identity.
    pub fn is_linked(&self) -> bool {
        self.link.as_deref().is_some_and(|link| !link.is_empty())
    }
}
