use std::env;

use thiserror::Error;

/// Configuration errors reported at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// The service is fully in-memory, so the listen port is the only knob:
/// `LEDGERD_PORT`, defaulting to 8080.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("LEDGERD_PORT").ok())
    }

    fn from_port_var(value: Option<String>) -> Result<Self, ConfigError> {
        let port = match value {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "LEDGERD_PORT",
                value,
            })?,
            None => Self::DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
