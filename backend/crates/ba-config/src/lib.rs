mod auth_config;
mod config;
mod database_config;
mod error;
mod lifecycle_config;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use lifecycle_config::LifecycleConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use sync_config::SyncConfig;

pub const CONFIG_DIR_ENV: &str = "BA_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".ba";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "bridge.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CREDENTIAL_LENGTH: usize = 24;
const MIN_CREDENTIAL_LENGTH: usize = 12;
const MAX_CREDENTIAL_LENGTH: usize = 128;
const DEFAULT_LOGIN_SUFFIX_LENGTH: usize = 6;
const MIN_LOGIN_SUFFIX_LENGTH: usize = 4;
const MAX_LOGIN_SUFFIX_LENGTH: usize = 16;

const DEFAULT_PASSWORD_RESET_URL: &str = "http://localhost/wp-login.php";
