use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CREDENTIAL_LENGTH, DEFAULT_LOGIN_SUFFIX_LENGTH,
    MAX_CREDENTIAL_LENGTH, MAX_LOGIN_SUFFIX_LENGTH, MIN_CREDENTIAL_LENGTH,
    MIN_LOGIN_SUFFIX_LENGTH,
};

use ba_core::{AccountRole, ReconcilerSettings};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Role for accounts created by sync
    pub default_role: AccountRole,
    pub credential_length: usize,
    pub login_suffix_length: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            default_role: AccountRole::Subscriber,
            credential_length: DEFAULT_CREDENTIAL_LENGTH,
            login_suffix_length: DEFAULT_LOGIN_SUFFIX_LENGTH,
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_role == AccountRole::Administrator {
            return Err(ConfigError::sync(
                "sync.default_role must not be administrator",
            ));
        }

        if !(MIN_CREDENTIAL_LENGTH..=MAX_CREDENTIAL_LENGTH).contains(&self.credential_length) {
            return Err(ConfigError::sync(format!(
                "sync.credential_length must be {}-{}, got {}",
                MIN_CREDENTIAL_LENGTH, MAX_CREDENTIAL_LENGTH, self.credential_length
            )));
        }

        if !(MIN_LOGIN_SUFFIX_LENGTH..=MAX_LOGIN_SUFFIX_LENGTH).contains(&self.login_suffix_length)
        {
            return Err(ConfigError::sync(format!(
                "sync.login_suffix_length must be {}-{}, got {}",
                MIN_LOGIN_SUFFIX_LENGTH, MAX_LOGIN_SUFFIX_LENGTH, self.login_suffix_length
            )));
        }

        Ok(())
    }

    pub fn reconciler_settings(&self) -> ReconcilerSettings {
        ReconcilerSettings {
            default_role: self.default_role,
            credential_length: self.credential_length,
            login_suffix_length: self.login_suffix_length,
        }
    }
}
