//! CLI runtime configuration.
//!
//! Configuration is resolved once at process startup (after `.env` has been loaded) and then
//! passed into command execution, so commands never read process-wide environment variables
//! themselves.

use crate::constants::{
    DEFAULT_COUNT, DEFAULT_COUNT_ENV_VAR, DEFAULT_LOG_FILTER, LOG_ENV_VAR, MAX_COUNT,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// CLI configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    log_filter: String,
    default_count: usize,
}

impl CliConfig {
    /// Create a new `CliConfig`.
    pub fn new(log_filter: String, default_count: usize) -> ConfigResult<Self> {
        validate_count(DEFAULT_COUNT_ENV_VAR, default_count)?;

        Ok(Self {
            log_filter,
            default_count,
        })
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_values(
            std::env::var(LOG_ENV_VAR).ok(),
            std::env::var(DEFAULT_COUNT_ENV_VAR).ok(),
        )
    }

    /// Build configuration from optional raw environment values.
    ///
    /// Missing or blank values fall back to the defaults.
    pub fn from_env_values(
        log_filter: Option<String>,
        default_count: Option<String>,
    ) -> ConfigResult<Self> {
        let log_filter = non_blank(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let default_count = match non_blank(default_count) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: DEFAULT_COUNT_ENV_VAR,
                    reason: format!("'{}' is not a count: {}", raw, e),
                })?,
            None => DEFAULT_COUNT,
        };

        Self::new(log_filter, default_count)
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_count: DEFAULT_COUNT,
        }
    }
}

/// Checks that a requested number of identifiers is within `1..=MAX_COUNT`.
pub fn validate_count(var: &'static str, count: usize) -> ConfigResult<()> {
    if count == 0 || count > MAX_COUNT {
        return Err(ConfigError::InvalidValue {
            var,
            reason: format!("count must be between 1 and {}, got {}", MAX_COUNT, count),
        });
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
