//! Process configuration, from CLI flags or environment variables.

use crate::favorites::FailurePolicy;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

/// Favorites gateway configuration.
///
/// All values can be set via environment variables or CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "favorites-service", about = "User favorites gateway")]
pub struct Config {
    /// HTTP listen address of the gateway
    #[arg(long, env = "GATEWAY_ADDRESS", default_value = "0.0.0.0:3000")]
    pub gateway_address: String,

    /// Per-call timeout for product lookups, in milliseconds
    #[arg(long, env = "PRODUCT_CALL_TIMEOUT_MS", default_value = "2000")]
    pub product_call_timeout_ms: u64,

    /// Request queue capacity of each actor
    #[arg(long, env = "ACTOR_BUFFER_SIZE", default_value = "32")]
    pub actor_buffer_size: usize,

    /// What a failed favorite lookup does to the list
    #[arg(long, env = "FAVORITES_POLICY", value_enum, default_value = "all-or-nothing")]
    pub favorites_policy: FailurePolicy,

    /// Seed the catalog and a demo user at startup
    #[arg(long, env = "SEED_DEMO_DATA", default_value = "true", action = clap::ArgAction::Set)]
    pub seed_demo_data: bool,

    /// Log level used when RUST_LOG is not set (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Product call timeout must be > 0")]
    InvalidProductTimeout,
    #[error("Actor buffer size must be > 0")]
    InvalidBufferSize,
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// What the lifecycle needs to build and wire the actors.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub buffer_size: usize,
    pub product_call_timeout: Duration,
    pub favorites_policy: FailurePolicy,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            product_call_timeout: Duration::from_millis(2000),
            favorites_policy: FailurePolicy::AllOrNothing,
        }
    }
}

impl Config {
    /// Parse and validate configuration.
    pub fn init() -> Result<Self, ConfigError> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.product_call_timeout_ms == 0 {
            return Err(ConfigError::InvalidProductTimeout);
        }
        if self.actor_buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize);
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    #[inline]
    pub const fn product_call_timeout(&self) -> Duration {
        Duration::from_millis(self.product_call_timeout_ms)
    }

    pub fn system(&self) -> SystemConfig {
        SystemConfig {
            buffer_size: self.actor_buffer_size,
            product_call_timeout: self.product_call_timeout(),
            favorites_policy: self.favorites_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            gateway_address: "127.0.0.1:3000".to_string(),
            product_call_timeout_ms: 2000,
            actor_buffer_size: 32,
            favorites_policy: FailurePolicy::AllOrNothing,
            seed_demo_data: true,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_defaults_parse() {
        let config = Config::try_parse_from(["favorites-service"]).unwrap();
        assert_eq!(config.product_call_timeout(), Duration::from_secs(2));
        assert_eq!(config.actor_buffer_size, 32);
        assert_eq!(config.favorites_policy, FailurePolicy::AllOrNothing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_flag() {
        let config =
            Config::try_parse_from(["favorites-service", "--favorites-policy", "partial"]).unwrap();
        assert_eq!(config.system().favorites_policy, FailurePolicy::Partial);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = test_config();
        config.product_call_timeout_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidProductTimeout));
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let mut config = test_config();
        config.actor_buffer_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBufferSize));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut config = test_config();
        config.log_level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_system_config() {
        let system = test_config().system();
        assert_eq!(system, SystemConfig::default());
    }
}
