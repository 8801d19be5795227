// Runtime configuration, read from the environment.
//
// Keys
// - DOGS_HOST, DOGS_PORT: bind address.
// - DOGS_ERROR_STYLE: `status` (404 on missing dogs) or `body` (200 with an error body).
// - DOGS_EMPTY_REGISTRY_POLICY: `start_at_zero` or `reject`.

use crate::modules::dogs::core::registry_port::EmptyRegistryPolicy;
use crate::shell::errors::ErrorStyle;
use thiserror::Error;

pub const HOST_KEY: &str = "DOGS_HOST";
pub const PORT_KEY: &str = "DOGS_PORT";
pub const ERROR_STYLE_KEY: &str = "DOGS_ERROR_STYLE";
pub const EMPTY_REGISTRY_POLICY_KEY: &str = "DOGS_EMPTY_REGISTRY_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port in 1..=65535, got {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} has unsupported value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub error_style: ErrorStyle,
    pub empty_registry_policy: EmptyRegistryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            error_style: ErrorStyle::default(),
            empty_registry_policy: EmptyRegistryPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_KEY).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(value) = lookup(PORT_KEY) {
            config.port = match value.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => {
                    return Err(ConfigError::InvalidPort {
                        key: PORT_KEY,
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(ERROR_STYLE_KEY) {
            config.error_style =
                ErrorStyle::parse(&value).ok_or(ConfigError::InvalidValue {
                    key: ERROR_STYLE_KEY,
                    value,
                })?;
        }
        if let Some(value) = lookup(EMPTY_REGISTRY_POLICY_KEY) {
            config.empty_registry_policy =
                EmptyRegistryPolicy::parse(&value).ok_or(ConfigError::InvalidValue {
                    key: EMPTY_REGISTRY_POLICY_KEY,
                    value,
                })?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
