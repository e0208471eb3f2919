//! # Runtime Environment and Storage Configuration
//!
//! Settings are read from environment variables (optionally loaded from a
//! `.env` file, see [`crate::bootstrap::load_env_file`]).
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ENVIRONMENT` | `production` | development / test / staging / production |
//! | `STORAGE_BACKEND` | `memory` | `memory` or `mongodb` |
//! | `MONGODB_URI` | `mongodb://localhost:27017` | MongoDB connection string |
//! | `DATABASE_NAME` | `user_lifecycle_dev` | MongoDB database name |
//!
//! Every config type exposes `from_lookup`, which takes the variable source
//! as a closure, so tests never touch the process environment.

use std::env;

use crate::core::errors::{AppError, AppResult};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "user_lifecycle_dev";

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// Default `env_logger` filter for this environment.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// Which [`UserRepository`](crate::repositories::users::UserRepository)
/// implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    MongoDb,
}

impl StorageBackend {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(StorageBackend::Memory),
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            other => Err(AppError::ConfigError(format!(
                "unsupported STORAGE_BACKEND '{}', expected 'memory' or 'mongodb'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORAGE_BACKEND") {
            Some(value) => StorageBackend::parse(&value)?,
            None => StorageBackend::Memory,
        };

        Ok(Self {
            backend,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        })
    }
}
