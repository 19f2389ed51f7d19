use crate::{AuthError, Result as AuthErrorResult, Transport, parse_bearer};

use log::warn;
use subtle::ConstantTimeEq;

#[derive(Clone, Default)]
pub struct SecretVerifierConfig {
    /// Shared secret presented by the identity provider. Empty disables sync.
    pub api_secret: String,
    /// Accept plain HTTP (local development only)
    pub allow_insecure_transport: bool,
}

impl std::fmt::Debug for SecretVerifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretVerifierConfig")
            .field("api_secret", &"***")
            .field("allow_insecure_transport", &self.allow_insecure_transport)
            .finish()
    }
}

/// Gate in front of the sync endpoint.
///
/// Checks run in a fixed order and stop at the first failure: transport,
/// configured secret, header shape, then a constant-time token comparison.
#[derive(Debug, Clone)]
pub struct SecretVerifier {
    config: SecretVerifierConfig,
}

impl SecretVerifier {
    pub fn new(config: SecretVerifierConfig) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        !self.config.api_secret.is_empty()
    }

    #[track_caller]
    pub fn verify(
        &self,
        transport: Transport,
        authorization: Option<&str>,
    ) -> AuthErrorResult<()> {
        if !transport.is_secure() && !self.config.allow_insecure_transport {
            warn!("Rejected sync request over insecure transport");
            return Err(AuthError::transport_insecure());
        }

        if !self.is_configured() {
            warn!("Rejected sync request: API secret is not configured");
            return Err(AuthError::not_configured());
        }

        let token = authorization
            .and_then(parse_bearer)
            .ok_or_else(AuthError::invalid_or_missing)?;

        let matches: bool = token
            .as_bytes()
            .ct_eq(self.config.api_secret.as_bytes())
            .into();

        if !matches {
            warn!("Rejected sync request: bearer token mismatch");
            return Err(AuthError::invalid_or_missing());
        }

        Ok(())
    }
}
