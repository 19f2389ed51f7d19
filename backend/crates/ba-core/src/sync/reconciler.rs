//! Create-or-link reconciliation of one external identity.
//!
//! Matching is by email only. An existing account gets its link set once
//! and is otherwise left untouched; a missing account is created with a
//! derived login and a random credential nobody ever sees.
//!
//! Re-running with the same candidate returns the same account and writes
//! nothing. Concurrent first syncs of the same brand-new email are settled
//! by the directory's unique email constraint; the loser gets
//! `AccountCreationFailed`.

use crate::{
    AccountDirectory, AccountRole, LocalAccount, NewLocalAccount, RandomTokenGenerator,
    Result as SyncErrorResult, SyncAction, SyncCandidate, SyncError, SyncOutcome, TokenGenerator,
    sanitize::{MAX_LOGIN_LENGTH, derive_login, normalize_email, sanitize_text, truncate_login},
};

use std::sync::Arc;

use log::{debug, info};

const DEFAULT_CREDENTIAL_LENGTH: usize = 24;
const DEFAULT_LOGIN_SUFFIX_LENGTH: usize = 6;

#[derive(Debug, Clone)]
pub struct ReconcilerSettings {
    /// Role given to newly created accounts
    pub default_role: AccountRole,
    pub credential_length: usize,
    /// Length of the random suffix appended on login collision
    pub login_suffix_length: usize,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            default_role: AccountRole::Subscriber,
            credential_length: DEFAULT_CREDENTIAL_LENGTH,
            login_suffix_length: DEFAULT_LOGIN_SUFFIX_LENGTH,
        }
    }
}

#[derive(Clone)]
pub struct SyncReconciler {
    directory: Arc<dyn AccountDirectory>,
    tokens: Arc<dyn TokenGenerator>,
    settings: ReconcilerSettings,
}

impl SyncReconciler {
    pub fn new(directory: Arc<dyn AccountDirectory>, settings: ReconcilerSettings) -> Self {
        Self {
            directory,
            tokens: Arc::new(RandomTokenGenerator),
            settings,
        }
    }

    /// Replace the random source (deterministic suffixes in tests)
    pub fn with_token_generator(mut self, tokens: Arc<dyn TokenGenerator>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn settings(&self) -> &ReconcilerSettings {
        &self.settings
    }

    pub fn directory(&self) -> &Arc<dyn AccountDirectory> {
        &self.directory
    }

    /// Resolve the candidate to a linked local account.
    pub async fn reconcile(&self, candidate: &SyncCandidate) -> SyncErrorResult<SyncOutcome> {
        let email = normalize_email(&candidate.email).ok_or_else(|| {
            SyncError::validation(
                format!("'{}' is not a valid email address", candidate.email),
                Some("email"),
            )
        })?;

        if let Some(existing) = self.directory.find_by_email(&email).await? {
            return self.link_existing(existing, candidate).await;
        }

        self.create_linked(candidate, email).await
    }

    async fn link_existing(
        &self,
        mut account: LocalAccount,
        candidate: &SyncCandidate,
    ) -> SyncErrorResult<SyncOutcome> {
        match self.directory.get_link(account.id).await? {
            Some(link) if !link.is_empty() => {
                if link != candidate.id {
                    debug!(
                        "Account {} already linked to identity {}, leaving link for {} unset",
                        account.id, link, candidate.id
                    );
                }
                Ok(SyncOutcome {
                    account,
                    action: SyncAction::AlreadyLinked,
                })
            }
            _ => {
                self.directory.set_link(account.id, &candidate.id).await?;
                account.link = Some(candidate.id.clone());
                info!(
                    "Linked existing account {} to identity {}",
                    account.id, candidate.id
                );
                Ok(SyncOutcome {
                    account,
                    action: SyncAction::Linked,
                })
            }
        }
    }

    async fn create_linked(
        &self,
        candidate: &SyncCandidate,
        email: String,
    ) -> SyncErrorResult<SyncOutcome> {
        let login = self.unique_login(candidate, &email).await?;

        let new_account = NewLocalAccount {
            login,
            email,
            display_name: sanitize_text(&candidate.name),
            credential: self.tokens.credential(self.settings.credential_length),
            role: self.settings.default_role,
        };

        let account_id = self
            .directory
            .create_account(new_account)
            .await
            .map_err(|e| match e {
                SyncError::AccountCreationFailed { .. } => e,
                other => SyncError::account_creation_failed(other.to_string()),
            })?;

        self.directory.set_link(account_id, &candidate.id).await?;

        let account = self
            .directory
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| {
                SyncError::store(format!("Account {} vanished after creation", account_id))
            })?;

        info!(
            "Created account {} ({}) for identity {}",
            account.id, account.login, candidate.id
        );

        Ok(SyncOutcome {
            account,
            action: SyncAction::Created,
        })
    }

    /// Single collision-avoidance pass: a taken login gets `_` plus a
    /// random suffix, which is not re-checked.
    async fn unique_login(&self, candidate: &SyncCandidate, email: &str) -> SyncErrorResult<String> {
        let login = derive_login(&candidate.name, email);

        if !self.directory.login_exists(&login).await? {
            return Ok(login);
        }

        let suffix = self.tokens.suffix(self.settings.login_suffix_length);
        let room = MAX_LOGIN_LENGTH.saturating_sub(suffix.len() + 1);
        let suffixed = format!("{}_{}", truncate_login(&login, room), suffix);

        debug!("Login '{}' taken, using '{}'", login, suffixed);

        Ok(suffixed)
    }
}
