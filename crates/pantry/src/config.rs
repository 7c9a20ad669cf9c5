use std::{env, path::PathBuf};

use thiserror::Error;

/// Default database location, relative to the working directory.
const DEFAULT_DATABASE_URL: &str = "sqlite:///./grocery_app.db";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is empty")]
    EmptyDatabaseUrl,
    #[error("Unsupported DATABASE_URL scheme (only sqlite is supported): {0}")]
    UnsupportedDatabaseUrl(String),
}

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

impl DatabaseLocation {
    /// Parses a connection string.
    ///
    /// Accepted forms: `sqlite:///relative/path`, `sqlite:////absolute/path`,
    /// `sqlite://path`, `sqlite:path`, `sqlite::memory:`, `:memory:`, or a bare
    /// file path.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        let path = if let Some(rest) = url.strip_prefix("sqlite:///") {
            rest
        } else if let Some(rest) = url.strip_prefix("sqlite://") {
            rest
        } else if let Some(rest) = url.strip_prefix("sqlite:") {
            rest
        } else if url.contains("://") {
            return Err(ConfigError::UnsupportedDatabaseUrl(url.to_string()));
        } else {
            url
        };

        match path {
            "" | ":memory:" => Ok(Self::Memory),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database location (default: "./grocery_app.db")
    pub database: DatabaseLocation,
    /// Debug mode: verbose logging and listener hand-off for auto-reload (default: true)
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite connection string (default: "sqlite:///./grocery_app.db")
    /// - `DEBUG` - "true" (any case) enables debug mode (default: "True")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("DATABASE_URL").ok(), env::var("DEBUG").ok())
    }

    fn from_values(
        database_url: Option<String>,
        debug: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            database: DatabaseLocation::parse(&database_url)?,
            debug: debug.is_none_or(|v| v.eq_ignore_ascii_case("true")),
        })
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "pantry=debug,tower_http=debug"
        } else {
            "pantry=info,tower_http=info"
        }
    }
}
