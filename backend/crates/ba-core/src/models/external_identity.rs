use serde::{Deserialize, Serialize};

/// Row of the `ba_user` table, owned by the upstream identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Opaque identifier issued by the provider
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}
