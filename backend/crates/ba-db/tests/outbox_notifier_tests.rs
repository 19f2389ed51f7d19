mod common;

use common::{create_test_pool, new_account};

use ba_core::{Credential, LocalAccount, PasswordSetupNotifier, TokenGenerator};
use ba_db::{LocalAccountRepository, OutboxNotifier, verify_secret};

use std::sync::Arc;

use googletest::prelude::*;

struct FixedKey(&'static str);

impl TokenGenerator for FixedKey {
    fn credential(&self, length: usize) -> Credential {
        Credential::new("c".repeat(length))
    }

    fn suffix(&self, _length: usize) -> String {
        self.0.to_string()
    }
}

async fn linked_account(repo: &LocalAccountRepository, login: &str, email: &str) -> LocalAccount {
    let id = repo.create(new_account(login, email)).await.unwrap();
    repo.update_link(id, Some("ba-1")).await.unwrap();
    repo.find_by_id(id).await.unwrap().unwrap()
}

#[tokio::test]
async fn given_account_when_setup_sent_then_message_queued_with_reset_link() {
    // Given: A linked account and a deterministic key
    let pool = create_test_pool().await;
    let repo = LocalAccountRepository::new(pool.clone());
    let account = linked_account(&repo, "Jane Doe", "jane@example.com").await;
    let notifier = OutboxNotifier::new(pool, "https://example.com/wp-login.php")
        .unwrap()
        .with_token_generator(Arc::new(FixedKey("KEY123")));

    // When: Sending password setup
    notifier.send_password_setup(&account).await.unwrap();

    // Then: One message addressed to the account with an encoded link
    let pending = notifier.pending().await.unwrap();
    assert_that!(pending.len(), eq(1));
    assert_that!(pending[0].recipient, eq("jane@example.com"));
    assert_that!(
        pending[0].body.as_str(),
        contains_substring(
            "https://example.com/wp-login.php?action=rp&key=KEY123&login=Jane+Doe"
        )
    );
}

#[tokio::test]
async fn given_account_when_setup_sent_then_only_key_hash_is_stored() {
    let pool = create_test_pool().await;
    let repo = LocalAccountRepository::new(pool.clone());
    let account = linked_account(&repo, "jane", "jane@example.com").await;
    let notifier = OutboxNotifier::new(pool, "https://example.com/reset")
        .unwrap()
        .with_token_generator(Arc::new(FixedKey("KEY123")));

    notifier.enqueue(&account).await.unwrap();

    let stored = notifier.reset_key_hash(account.id).await.unwrap().unwrap();
    assert_that!(stored.as_str(), not(contains_substring("KEY123")));
    assert!(verify_secret("KEY123", &stored));
}

#[tokio::test]
async fn given_outstanding_key_when_setup_sent_again_then_key_is_replaced() {
    // Given: A first key was issued
    let pool = create_test_pool().await;
    let repo = LocalAccountRepository::new(pool.clone());
    let account = linked_account(&repo, "jane", "jane@example.com").await;
    OutboxNotifier::new(pool.clone(), "https://example.com/reset")
        .unwrap()
        .with_token_generator(Arc::new(FixedKey("FIRST")))
        .enqueue(&account)
        .await
        .unwrap();

    // When: Issuing a second key
    let notifier = OutboxNotifier::new(pool, "https://example.com/reset")
        .unwrap()
        .with_token_generator(Arc::new(FixedKey("SECOND")));
    notifier.enqueue(&account).await.unwrap();

    // Then: Only the second key verifies, both messages are queued
    let stored = notifier.reset_key_hash(account.id).await.unwrap().unwrap();
    assert!(verify_secret("SECOND", &stored));
    assert!(!verify_secret("FIRST", &stored));
    assert_that!(notifier.pending().await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_deleted_account_when_reset_key_existed_then_it_is_removed() {
    let pool = create_test_pool().await;
    let repo = LocalAccountRepository::new(pool.clone());
    let account = linked_account(&repo, "jane", "jane@example.com").await;
    let notifier = OutboxNotifier::new(pool, "https://example.com/reset").unwrap();
    notifier.enqueue(&account).await.unwrap();

    repo.delete(account.id).await.unwrap();

    assert_that!(notifier.reset_key_hash(account.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_invalid_reset_url_when_constructed_then_error() {
    let pool = create_test_pool().await;

    assert!(OutboxNotifier::new(pool, "not a url").is_err());
}
