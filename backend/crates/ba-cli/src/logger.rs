use crate::error::{CommandError, Result as CommandResult};

use ba_config::LogLevel;

use std::time::SystemTime;

use fern::Dispatch;

/// Log to stderr so stdout carries only command output.
pub fn initialize(log_level: LogLevel) -> CommandResult<()> {
    Dispatch::new()
        .level(*log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CommandError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })
}
