use crate::SyncMetrics;

use ba_auth::{RateLimitConfig, SecretVerifier, SecretVerifierConfig, SyncRateLimiter};
use ba_config::Config;
use ba_core::{SyncReconciler, SyncService, TokenGenerator};
use ba_db::{IdentityRepository, LocalAccountRepository};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<SecretVerifier>,
    pub rate_limiter: Arc<SyncRateLimiter>,
    pub sync_service: SyncService,
    pub metrics: SyncMetrics,
    /// Honour `X-Forwarded-Proto` when classifying transport
    pub trust_forwarded_proto: bool,
}

impl AppState {
    /// Wire the SQLite repositories and the auth gate from configuration.
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let reconciler = SyncReconciler::new(
            Arc::new(LocalAccountRepository::new(pool.clone())),
            config.sync.reconciler_settings(),
        );

        Self::with_reconciler(pool, config, reconciler)
    }

    /// Same as [`AppState::new`] with a caller-chosen random source.
    pub fn with_token_generator(
        pool: SqlitePool,
        config: &Config,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        let reconciler = SyncReconciler::new(
            Arc::new(LocalAccountRepository::new(pool.clone())),
            config.sync.reconciler_settings(),
        )
        .with_token_generator(tokens);

        Self::with_reconciler(pool, config, reconciler)
    }

    fn with_reconciler(pool: SqlitePool, config: &Config, reconciler: SyncReconciler) -> Self {
        let verifier = SecretVerifier::new(SecretVerifierConfig {
            api_secret: config.auth.api_secret.clone(),
            allow_insecure_transport: config.auth.allow_insecure_transport,
        });

        let rate_limiter = SyncRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        let sync_service = SyncService::new(
            Arc::new(IdentityRepository::new(pool.clone())),
            reconciler,
        );

        Self {
            pool,
            verifier: Arc::new(verifier),
            rate_limiter: Arc::new(rate_limiter),
            sync_service,
            metrics: SyncMetrics::new(),
            trust_forwarded_proto: config.auth.trust_forwarded_proto,
        }
    }
}
