// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::slug::config::DEFAULT_MAX_ATTEMPTS;

#[derive(Clone, Debug)]
pub struct SlugSettings {
    database_url: String,
    max_connections: u32,
    max_slug_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite::memory:".into()
}

fn default_max_connections() -> u32 {
    5
}

impl SlugSettings {
    /// Build settings from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let max_connections = parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS")?
            .unwrap_or_else(default_max_connections);
        let max_slug_attempts =
            parse_positive(&lookup, "SLUG_MAX_ATTEMPTS")?.unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            database_url,
            max_connections,
            max_slug_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Ceiling on slug candidates tried before giving up.
    pub fn max_slug_attempts(&self) -> u32 {
        self.max_slug_attempts
    }
}

fn parse_positive(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
