use std::env;

use thiserror::Error;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "CARE_NOTES_HOST";
    pub const PORT: &str = "CARE_NOTES_PORT";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8000;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Unset or blank
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string());

        let port = match get(env_vars::PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: env_vars::PORT,
                value: raw,
            })?,
            None => defaults::PORT,
        };

        Ok(Self { host, port })
    }

    /// `host:port` string handed to the listener; hostnames are resolved at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
