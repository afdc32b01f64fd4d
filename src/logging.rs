//! Logger bootstrap for the command line tool.
//!
//! Library code only talks to the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr so stdout carries nothing but
//! progress lines.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Validate a level name, case-insensitively.
pub fn normalize_level(level: &str) -> Result<String, String> {
    let lowered = level.trim().to_ascii_lowercase();
    if LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(format!(
            "unsupported log level `{}` (expected one of {})",
            level,
            LEVELS.join(", ")
        ))
    }
}

/// Start logging to stderr. `RUST_LOG` wins over `level` when set.
///
/// Keep the returned handle alive for the life of the program.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
