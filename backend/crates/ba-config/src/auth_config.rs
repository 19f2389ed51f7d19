use crate::{ConfigError, ConfigErrorResult};

use log::warn;
use serde::Deserialize;

/// Shared-secret gate settings for the sync endpoint.
///
/// An empty `api_secret` is accepted at load time; the endpoint then refuses
/// every request until one is set.
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub api_secret: String,
    /// Accept sync requests over plain HTTP. Development only.
    pub allow_insecure_transport: bool,
    /// Honour `X-Forwarded-Proto` from a TLS-terminating proxy
    pub trust_forwarded_proto: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_secret", &"***")
            .field("allow_insecure_transport", &self.allow_insecure_transport)
            .field("trust_forwarded_proto", &self.trust_forwarded_proto)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // A bearer token cannot contain whitespace, so such a secret never matches
        if self.api_secret.chars().any(char::is_whitespace) {
            return Err(ConfigError::auth(
                "auth.api_secret must not contain whitespace",
            ));
        }

        if self.allow_insecure_transport {
            warn!("auth.allow_insecure_transport is enabled; do not use this in production");
        }

        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        !self.api_secret.is_empty()
    }
}
