//! Configuration validation.
//!
//! Validates config fields before the component runs.

use crate::domain::error::EtherealTradesError;
use crate::ports::config_port::ConfigPort;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Parse a `[logging] level` value; case-insensitive, surrounding whitespace ignored.
pub fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

pub fn validate_logging_config(config: &dyn ConfigPort) -> Result<(), EtherealTradesError> {
    validate_log_level(config)?;
    validate_log_enabled(config)?;
    Ok(())
}

fn validate_log_level(config: &dyn ConfigPort) -> Result<(), EtherealTradesError> {
    let Some(raw) = config.get_string("logging", "level") else {
        return Ok(());
    };
    if parse_log_level(&raw).is_none() {
        return Err(EtherealTradesError::ConfigInvalid {
            section: "logging".to_string(),
            key: "level".to_string(),
            reason: format!(
                "unknown level '{}', expected one of {}",
                raw.trim(),
                LOG_LEVELS.join(", ")
            ),
        });
    }
    Ok(())
}

fn validate_log_enabled(config: &dyn ConfigPort) -> Result<(), EtherealTradesError> {
    let Some(raw) = config.get_string("logging", "enabled") else {
        return Ok(());
    };
    // Both defaults disagree only when the value is unparseable.
    if config.get_bool("logging", "enabled", true) != config.get_bool("logging", "enabled", false) {
        return Err(EtherealTradesError::ConfigInvalid {
            section: "logging".to_string(),
            key: "enabled".to_string(),
            reason: format!("'{raw}' is not a boolean"),
        });
    }
    Ok(())
}
