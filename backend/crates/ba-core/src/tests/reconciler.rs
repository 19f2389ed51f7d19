use super::fakes::{FixedTokens, InMemoryDirectory};
use crate::{
    AccountDirectory, AccountRole, ReconcilerSettings, SyncAction, SyncCandidate, SyncError,
    SyncReconciler,
};

use std::sync::Arc;

use googletest::prelude::*;

fn reconciler(directory: Arc<InMemoryDirectory>) -> SyncReconciler {
    SyncReconciler::new(directory, ReconcilerSettings::default())
        .with_token_generator(Arc::new(FixedTokens))
}

fn candidate(id: &str, email: &str, name: &str) -> SyncCandidate {
    SyncCandidate {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn given_unknown_email_when_reconciled_then_creates_linked_account() {
    // Given: An empty directory
    let directory = Arc::new(InMemoryDirectory::new());
    let reconciler = reconciler(directory.clone());

    // When: Reconciling a new identity
    let outcome = reconciler
        .reconcile(&candidate("ba-123", "jane@example.com", "Jane Doe"))
        .await
        .unwrap();

    // Then: A subscriber account is created and linked
    assert_that!(outcome.action, eq(SyncAction::Created));
    assert_that!(outcome.account.login, eq("Jane Doe"));
    assert_that!(outcome.account.email, eq("jane@example.com"));
    assert_that!(outcome.account.display_name, eq("Jane Doe"));
    assert_that!(outcome.account.role, eq(AccountRole::Subscriber));
    assert_that!(outcome.account.link, some(eq("ba-123")));
    assert_that!(directory.accounts().len(), eq(1));
}

#[tokio::test]
async fn given_already_synced_candidate_when_reconciled_again_then_same_account_and_no_writes() {
    // Given: A candidate synced once
    let directory = Arc::new(InMemoryDirectory::new());
    let reconciler = reconciler(directory.clone());
    let jane = candidate("ba-123", "jane@example.com", "Jane Doe");
    let first = reconciler.reconcile(&jane).await.unwrap();
    let writes_after_first = directory.write_count();

    // When: Submitting the same candidate again
    let second = reconciler.reconcile(&jane).await.unwrap();

    // Then: Same account, nothing written
    assert_that!(second.account.id, eq(first.account.id));
    assert_that!(second.action, eq(SyncAction::AlreadyLinked));
    assert_that!(second.account.link, some(eq("ba-123")));
    assert_that!(directory.write_count(), eq(writes_after_first));
    assert_that!(directory.accounts().len(), eq(1));
}

#[tokio::test]
async fn given_unlinked_account_with_email_when_reconciled_then_link_is_set() {
    // Given: A pre-existing, unlinked account
    let directory = Arc::new(InMemoryDirectory::new());
    let id = directory.seed("jane", "jane@example.com", None);
    let reconciler = reconciler(directory.clone());

    // When: Reconciling an identity with the same email
    let outcome = reconciler
        .reconcile(&candidate("ba-123", "jane@example.com", "Jane Doe"))
        .await
        .unwrap();

    // Then: The existing account is linked, login untouched
    assert_that!(outcome.action, eq(SyncAction::Linked));
    assert_that!(outcome.account.id, eq(id));
    assert_that!(outcome.account.login, eq("jane"));
    assert_that!(directory.get_link(id).await.unwrap(), some(eq("ba-123")));
}

#[tokio::test]
async fn given_account_linked_to_other_identity_when_reconciled_then_link_is_kept() {
    // Given: An account already claimed by another identity
    let directory = Arc::new(InMemoryDirectory::new());
    let id = directory.seed("jane", "jane@example.com", Some("ba-original"));
    let reconciler = reconciler(directory.clone());

    // When: A second identity with the same email syncs
    let outcome = reconciler
        .reconcile(&candidate("ba-other", "jane@example.com", "Jane"))
        .await
        .unwrap();

    // Then: The first link wins
    assert_that!(outcome.action, eq(SyncAction::AlreadyLinked));
    assert_that!(directory.get_link(id).await.unwrap(), some(eq("ba-original")));
    assert_that!(directory.write_count(), eq(0));
}

#[tokio::test]
async fn given_email_with_uppercase_domain_when_reconciled_then_matches_existing_account() {
    // Given: An account stored with a lowercase domain
    let directory = Arc::new(InMemoryDirectory::new());
    let id = directory.seed("jane", "jane@example.com", None);
    let reconciler = reconciler(directory.clone());

    // When: The candidate's domain differs in case
    let outcome = reconciler
        .reconcile(&candidate("ba-123", "jane@EXAMPLE.com", ""))
        .await
        .unwrap();

    // Then: No duplicate account
    assert_that!(outcome.account.id, eq(id));
    assert_that!(directory.accounts().len(), eq(1));
}

#[tokio::test]
async fn given_taken_login_when_reconciled_then_suffix_is_appended() {
    // Given: Login "Admin" is taken
    let directory = Arc::new(InMemoryDirectory::new());
    directory.seed("Admin", "root@example.com", None);
    let reconciler = reconciler(directory.clone());

    // When: A new identity named "Admin" syncs
    let outcome = reconciler
        .reconcile(&candidate("ba-9", "someone@example.com", "Admin"))
        .await
        .unwrap();

    // Then: Login is Admin_ plus a 6 character suffix
    assert_that!(outcome.action, eq(SyncAction::Created));
    assert_that!(outcome.account.login, eq("Admin_abc123"));
}

#[tokio::test]
async fn given_random_tokens_when_login_taken_then_suffix_is_six_alphanumerics() {
    // Given: Login "Admin" is taken and the default generator is used
    let directory = Arc::new(InMemoryDirectory::new());
    directory.seed("Admin", "root@example.com", None);
    let reconciler = SyncReconciler::new(directory.clone(), ReconcilerSettings::default());

    // When: Creating another "Admin"
    let outcome = reconciler
        .reconcile(&candidate("ba-9", "someone@example.com", "Admin"))
        .await
        .unwrap();

    // Then: The suffix has the configured shape
    let suffix = outcome.account.login.strip_prefix("Admin_").unwrap();
    assert_that!(suffix.len(), eq(6));
    assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn given_long_taken_login_when_suffixed_then_result_fits_max_length() {
    // Given: A 60 character login already exists
    let long_name = "a".repeat(80);
    let directory = Arc::new(InMemoryDirectory::new());
    directory.seed(&"a".repeat(60), "first@example.com", None);
    let reconciler = reconciler(directory.clone());

    // When: Another identity with the same long name syncs
    let outcome = reconciler
        .reconcile(&candidate("ba-2", "second@example.com", &long_name))
        .await
        .unwrap();

    // Then: Truncated base plus suffix stays within the limit
    assert_that!(outcome.account.login.chars().count(), eq(60));
    assert!(outcome.account.login.ends_with("_abc123"));
}

#[tokio::test]
async fn given_empty_name_when_created_then_login_comes_from_email_local_part() {
    let directory = Arc::new(InMemoryDirectory::new());
    let reconciler = reconciler(directory.clone());

    let outcome = reconciler
        .reconcile(&candidate("ba-5", "j.smith@example.com", "   "))
        .await
        .unwrap();

    assert_that!(outcome.account.login, eq("j.smith"));
    assert_that!(outcome.account.display_name, eq(""));
}

#[tokio::test]
async fn given_new_account_when_created_then_credential_is_random_and_never_in_outcome() {
    // Given: The default random generator
    let directory = Arc::new(InMemoryDirectory::new());
    let reconciler = SyncReconciler::new(directory.clone(), ReconcilerSettings::default());

    // When: Creating an account
    let outcome = reconciler
        .reconcile(&candidate("ba-123", "jane@example.com", "Jane Doe"))
        .await
        .unwrap();

    // Then: A 24 character credential was stored and does not leak into the outcome
    let credential = directory.credential_of(outcome.account.id).unwrap();
    assert_that!(credential.len(), eq(24));
    assert!(!format!("{:?}", outcome).contains(&credential));
}

#[tokio::test]
async fn given_configured_role_when_created_then_account_gets_that_role() {
    let directory = Arc::new(InMemoryDirectory::new());
    let settings = ReconcilerSettings {
        default_role: AccountRole::Author,
        ..ReconcilerSettings::default()
    };
    let reconciler = SyncReconciler::new(directory, settings);

    let outcome = reconciler
        .reconcile(&candidate("ba-1", "a@example.com", "A"))
        .await
        .unwrap();

    assert_that!(outcome.account.role, eq(AccountRole::Author));
}

#[tokio::test]
async fn given_invalid_email_when_reconciled_then_validation_error() {
    let directory = Arc::new(InMemoryDirectory::new());
    let reconciler = reconciler(directory.clone());

    let result = reconciler
        .reconcile(&candidate("ba-1", "not-an-email", "X"))
        .await;

    assert!(matches!(result, Err(SyncError::Validation { .. })));
    assert_that!(directory.accounts().len(), eq(0));
}

#[tokio::test]
async fn given_directory_rejects_create_when_reconciled_then_account_creation_failed() {
    // Given: A directory that fails inserts
    let directory = Arc::new(InMemoryDirectory::new());
    *directory.fail_create.lock().unwrap() = true;
    let reconciler = reconciler(directory.clone());

    // When: Reconciling a new identity
    let result = reconciler
        .reconcile(&candidate("ba-1", "a@example.com", "A"))
        .await;

    // Then: The store error is reported as a creation failure
    let err = result.unwrap_err();
    assert_that!(err.error_code(), eq("ACCOUNT_CREATION_FAILED"));
    assert_that!(directory.accounts().len(), eq(0));
}
