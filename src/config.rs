//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::collections::BTreeSet;
use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_FIRST_START_NUMBER, DEFAULT_LOG_FILTER,
};
use crate::documents::StartNumberPolicy;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub start_numbers: StartNumberConfig,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

/// Start number configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartNumberConfig {
    /// First start number handed out
    pub first: u32,
    /// Numbers that are never handed out
    pub excluded: BTreeSet<u32>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            start_numbers: StartNumberConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl StartNumberConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let first = env::var("STARTNUMBERS_FIRST")
            .unwrap_or_else(|_| DEFAULT_FIRST_START_NUMBER.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("STARTNUMBERS_FIRST".to_string()))?;
        let excluded = parse_excluded(&env::var("STARTNUMBERS_EXCLUDED").unwrap_or_default())?;

        Ok(Self { first, excluded })
    }

    /// Build the policy the number assignment runs with
    pub fn policy(&self) -> StartNumberPolicy {
        StartNumberPolicy::new(self.first, self.excluded.iter().copied())
    }
}

/// Parse a comma separated list of excluded start numbers ("13, 666")
fn parse_excluded(raw: &str) -> Result<BTreeSet<u32>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("STARTNUMBERS_EXCLUDED".to_string()))
        })
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
