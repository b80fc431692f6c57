//! Serializable logger configuration

use super::{
    environment::Environment,
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::{Logger, LoggerBuilder},
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};

/// Logger settings that can be loaded from a configuration file
///
/// Missing keys fall back to their defaults.
///
/// # Example
///
/// ```
/// use context_logger::{Environment, LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"environment": "Prod", "min_level": "Warn"}"#).unwrap();
/// assert_eq!(config.environment, Environment::Production);
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert!(config.use_colors);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub environment: Environment,
    pub min_level: LogLevel,
    pub use_colors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<TimestampFormat>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Unspecified,
            min_level: LogLevel::Info,
            use_colors: true,
            timestamp_format: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))
    }

    pub fn builder(&self) -> LoggerBuilder {
        LoggerBuilder::from(self)
    }

    pub fn build(&self) -> Logger {
        self.builder().build()
    }
}
