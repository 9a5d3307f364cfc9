//! Top-level configuration.

use restfacade_core::FacadeOptions;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingSection};

/// Complete restfacade configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use restfacade_config::RestfacadeConfig;
///
/// let config = RestfacadeConfig::default();
/// assert!(!config.facade.plus_as_space);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RestfacadeConfig {
    /// How request facades parse queries and match headers.
    #[serde(default)]
    pub facade: FacadeOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl RestfacadeConfig {
    /// Validate the configuration.
    ///
    /// The logging section is checked by the same rules
    /// [`init_logging`](restfacade_telemetry::init_logging) applies.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the `logging` field if the log
    /// level or service name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging
            .to_log_config()
            .validate()
            .map_err(|e| ConfigError::invalid_value("logging", e.to_string()))
    }

    /// Development preset: pretty debug logging.
    ///
    /// # Example
    ///
    /// ```
    /// use restfacade_config::{LogFormat, RestfacadeConfig};
    ///
    /// let config = RestfacadeConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// assert_eq!(config.logging.format, LogFormat::Pretty);
    /// ```
    #[must_use]
    pub fn development() -> Self {
        Self {
            facade: FacadeOptions::default(),
            logging: LoggingSection {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                ..Default::default()
            },
        }
    }

    /// Production preset: JSON logging at info level.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}
