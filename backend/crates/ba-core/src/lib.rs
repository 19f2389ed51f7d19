pub mod error;
pub mod models;
pub mod ports;
pub mod sanitize;
pub mod sync;

pub use error::{Result, SyncError, SyncErrorKind};
pub use models::account_role::AccountRole;
pub use models::credential::Credential;
pub use models::external_identity::ExternalIdentity;
pub use models::local_account::LocalAccount;
pub use models::new_local_account::NewLocalAccount;
pub use models::sync_candidate::SyncCandidate;
pub use models::sync_outcome::{SyncAction, SyncOutcome};
pub use ports::account_directory::AccountDirectory;
pub use ports::identity_store::IdentityStore;
pub use ports::password_setup_notifier::PasswordSetupNotifier;
pub use ports::token_generator::{RandomTokenGenerator, TokenGenerator};
pub use sanitize::{MAX_LOGIN_LENGTH, derive_login, normalize_email, sanitize_login, sanitize_text};
pub use sync::backfill::{BackfillFailure, BackfillReport, backfill};
pub use sync::offboarding::{OffboardMode, OffboardingFailure, OffboardingReport, offboard};
pub use sync::password_setup::send_password_setup;
pub use sync::reconciler::{ReconcilerSettings, SyncReconciler};
pub use sync::sync_request::SyncRequest;
pub use sync::sync_service::SyncService;

#[cfg(test)]
mod tests;
