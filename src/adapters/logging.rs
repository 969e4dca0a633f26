//! `tracing` subscriber setup driven by the `[logging]` config section.

use crate::domain::config_validation::{parse_log_level, validate_logging_config};
use crate::domain::error::EtherealTradesError;
use crate::ports::config_port::ConfigPort;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: tracing::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: tracing::Level::INFO,
        }
    }
}

impl LoggingConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, EtherealTradesError> {
        validate_logging_config(config)?;

        let defaults = Self::default();
        let level = config
            .get_string("logging", "level")
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(defaults.level);

        Ok(Self {
            enabled: config.get_bool("logging", "enabled", defaults.enabled),
            level,
        })
    }
}

/// Install the global subscriber. A subscriber that is already installed wins.
pub fn init_logging(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let terminal_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::from_level(config.level));

    if let Err(err) = tracing_subscriber::registry()
        .with(terminal_layer)
        .try_init()
    {
        eprintln!("logging initialization skipped: {err}");
    }
}
