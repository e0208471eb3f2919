//! # Wiring
//!
//! Assembles a [`UserService`] from configuration. Embedding applications
//! call these in order:
//!
//! ```rust,ignore
//! let env_file = bootstrap::load_env_file();
//! let config = AppConfig::from_env()?;
//! bootstrap::init_logging(&config.environment);
//! bootstrap::log_env_file(&env_file);
//! let user_service = bootstrap::build_user_service(&config).await?;
//! ```
//!
//! The env file has to be read before logging is configured, so its outcome
//! is returned and logged once the logger is installed.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

use crate::config::{AppConfig, Environment, MailBackend, StorageBackend};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::notifications::{EmailService, HttpEmailService, LogEmailService};
use crate::services::users::UserService;

/// Outcome of [`load_env_file`].
#[derive(Debug)]
pub struct EnvFile {
    pub profile: String,
    pub loaded: Result<&'static str, String>,
}

fn env_file_for(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// Loads `.env.prod`, `.env.dev` or `.env` depending on `PROFILE`.
///
/// Nothing is logged here since the logger is usually not installed yet;
/// pass the result to [`log_env_file`] after [`init_logging`]. A missing
/// file is not an error; variables already set in the process environment
/// win.
pub fn load_env_file() -> EnvFile {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = env_file_for(&profile);

    let loaded = match file {
        ".env" => dotenv().map(|_| file),
        _ => dotenv::from_filename(file).map(|_| file),
    }
    .map_err(|e| e.to_string());

    EnvFile { profile, loaded }
}

pub fn log_env_file(env_file: &EnvFile) {
    match &env_file.loaded {
        Ok(file) => info!("{} loaded (profile {})", file, env_file.profile),
        Err(e) => warn!("no env file loaded for profile {}: {}", env_file.profile, e),
    }
}

/// Installs `env_logger`; `RUST_LOG` overrides the environment default.
///
/// Safe to call more than once.
pub fn init_logging(environment: &Environment) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(environment.default_log_filter()))
        .try_init();
}

pub async fn build_user_repository(config: &AppConfig) -> AppResult<Arc<dyn UserRepository>> {
    match config.database.backend {
        StorageBackend::Memory => {
            info!("storage backend: in-memory");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            let database = Arc::new(Database::connect(&config.database).await?);
            let repo = MongoUserRepository::new(database);
            repo.create_indexes().await?;

            info!("storage backend: mongodb ({})", config.database.database_name);
            Ok(Arc::new(repo))
        }
    }
}

pub fn build_email_service(config: &AppConfig) -> AppResult<Arc<dyn EmailService>> {
    match &config.mail.backend {
        MailBackend::Log => {
            if config.environment == Environment::Production {
                warn!("MAIL_BACKEND=log in production, lifecycle emails are only logged");
            }
            Ok(Arc::new(LogEmailService::new(config.mail.from.clone())))
        }
        MailBackend::Http { relay_url } => {
            info!("mail backend: http relay {}", relay_url);
            Ok(Arc::new(HttpEmailService::from_config(&config.mail)?))
        }
    }
}

pub async fn build_user_service(config: &AppConfig) -> AppResult<UserService> {
    let user_repo = build_user_repository(config).await?;
    let email_service = build_email_service(config)?;

    Ok(UserService::new(user_repo, email_service))
}
