use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LifecycleConfig, LoggingConfig, RateLimitConfig, ServerConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub sync: SyncConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub lifecycle: LifecycleConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BA_CONFIG_DIR env var, else use ./.ba/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BA_CONFIG_DIR env var > ./.ba/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.sync.validate()?;
        self.rate_limit.validate()?;
        self.lifecycle.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: secret {}, insecure transport {}, forwarded proto {}",
            if self.auth.is_configured() {
                "configured"
            } else {
                "NOT configured"
            },
            if self.auth.allow_insecure_transport {
                "allowed"
            } else {
                "rejected"
            },
            if self.auth.trust_forwarded_proto {
                "trusted"
            } else {
                "ignored"
            }
        );
        info!(
            "  sync: role={}, credential_length={}, login_suffix_length={}",
            self.sync.default_role, self.sync.credential_length, self.sync.login_suffix_length
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  lifecycle: {} on uninstall",
            if self.lifecycle.delete_users_on_uninstall {
                "delete users"
            } else {
                "unlink users"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BA_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BA_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_string("BA_AUTH_API_SECRET", &mut self.auth.api_secret);
        Self::apply_env_bool(
            "BA_AUTH_ALLOW_INSECURE_TRANSPORT",
            &mut self.auth.allow_insecure_transport,
        );
        Self::apply_env_bool(
            "BA_AUTH_TRUST_FORWARDED_PROTO",
            &mut self.auth.trust_forwarded_proto,
        );

        // Sync
        Self::apply_env_parse("BA_SYNC_DEFAULT_ROLE", &mut self.sync.default_role);
        Self::apply_env_parse(
            "BA_SYNC_CREDENTIAL_LENGTH",
            &mut self.sync.credential_length,
        );
        Self::apply_env_parse(
            "BA_SYNC_LOGIN_SUFFIX_LENGTH",
            &mut self.sync.login_suffix_length,
        );

        // Rate limit
        Self::apply_env_parse(
            "BA_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "BA_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("BA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("BA_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("BA_LOG_FILE", &mut self.logging.file);

        // Lifecycle
        Self::apply_env_bool(
            "BA_LIFECYCLE_DELETE_USERS_ON_UNINSTALL",
            &mut self.lifecycle.delete_users_on_uninstall,
        );
        Self::apply_env_string(
            "BA_LIFECYCLE_PASSWORD_RESET_URL",
            &mut self.lifecycle.password_reset_url,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
