//! # Mail Delivery Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MAIL_BACKEND` | `log` | `log` (write to the log) or `http` (mail relay) |
//! | `MAIL_RELAY_URL` | - | relay endpoint, required when `MAIL_BACKEND=http` |
//! | `MAIL_FROM` | `no-reply@localhost` | sender address |
//! | `MAIL_TIMEOUT_SECS` | `10` | relay request timeout |

use std::env;
use std::time::Duration;

use crate::core::errors::{AppError, AppResult};

pub const DEFAULT_MAIL_FROM: &str = "no-reply@localhost";
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBackend {
    /// Notifications are only logged.
    Log,
    /// Notifications are posted to an HTTP mail relay.
    Http { relay_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub backend: MailBackend,
    pub from: String,
    pub timeout: Duration,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            backend: MailBackend::Log,
            from: DEFAULT_MAIL_FROM.to_string(),
            timeout: Duration::from_secs(DEFAULT_MAIL_TIMEOUT_SECS),
        }
    }
}

impl MailConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("MAIL_BACKEND").map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("log") => MailBackend::Log,
            Some("http") => {
                let relay_url = lookup("MAIL_RELAY_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::ConfigError(
                            "MAIL_RELAY_URL must be set when MAIL_BACKEND=http".to_string(),
                        )
                    })?;
                MailBackend::Http { relay_url }
            }
            Some(other) => {
                return Err(AppError::ConfigError(format!(
                    "unsupported MAIL_BACKEND '{}', expected 'log' or 'http'",
                    other
                )));
            }
        };

        let timeout_secs = match lookup("MAIL_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("MAIL_TIMEOUT_SECS is not a number: '{}'", value))
            })?,
            None => DEFAULT_MAIL_TIMEOUT_SECS,
        };

        Ok(Self {
            backend,
            from: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
