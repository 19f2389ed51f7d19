use crate::LocalAccount;

/// What reconciliation did to reach the linked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// No account had the email; one was created and linked
    Created,
    /// An existing account with the email had no link; the link was set
    Linked,
    /// An existing account already carried a link; nothing changed
    AlreadyLinked,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Linked => "linked",
            Self::AlreadyLinked => "already_linked",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub account: LocalAccount,
    pub action: SyncAction,
}
