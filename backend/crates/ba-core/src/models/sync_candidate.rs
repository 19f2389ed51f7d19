use crate::ExternalIdentity;

/// Input to reconciliation: an external identity with any caller overrides
/// already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCandidate {
    pub id: String,
    /// Display name, may be empty
    pub name: String,
    pub email: String,
}

impl From<&ExternalIdentity> for SyncCandidate {
    fn from(identity: &ExternalIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone().unwrap_or_default(),
            email: identity.email.clone(),
        }
    }
}
