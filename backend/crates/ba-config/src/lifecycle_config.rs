use crate::{ConfigError, ConfigErrorResult, DEFAULT_PASSWORD_RESET_URL};

use serde::Deserialize;

/// Offboarding and password-setup behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Delete synced accounts on offboarding instead of unlinking them
    pub delete_users_on_uninstall: bool,
    /// Base URL of the password reset form
    pub password_reset_url: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            delete_users_on_uninstall: false,
            password_reset_url: String::from(DEFAULT_PASSWORD_RESET_URL),
        }
    }
}

impl LifecycleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.password_reset_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::lifecycle(format!(
                "lifecycle.password_reset_url must be an http(s) URL, got '{}'",
                url
            )));
        }

        if url.contains('?') {
            return Err(ConfigError::lifecycle(
                "lifecycle.password_reset_url must not carry a query string",
            ));
        }

        Ok(())
    }
}
