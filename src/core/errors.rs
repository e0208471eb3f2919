//! # Application Error Handling
//!
//! Unified error type for the user lifecycle service. Every service,
//! repository and notification adapter returns [`AppResult`], so a single
//! `?` carries a failure from the lowest adapter up to the caller unchanged.
//!
//! ## Error categories
//!
//! | AppError | Raised by | Scenario |
//! |----------|-----------|----------|
//! | `InvalidArgument` | service | caller input breaks a precondition |
//! | `DuplicateEmail` | service | create targets an email already on file |
//! | `NotFound` | service | no user stored under the identifier |
//! | `DatabaseError` | storage adapters | MongoDB operation failed |
//! | `ExternalServiceError` | mail adapters | mail relay unreachable or rejected |
//! | `ConfigError` | config | environment variable missing or malformed |
//! | `InternalError` | anywhere | unexpected state |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_lifecycle_service::core::errors::AppError;
//!
//! match user_service.get_user_by_id(2).await {
//!     Err(AppError::NotFound { id }) => log::warn!("no user {}", id),
//!     Err(e) => return Err(e),
//!     Ok(user) => println!("{}", user.name),
//! }
//! ```

use thiserror::Error;

use crate::domain::entities::users::user::UserId;

/// Application-wide error type.
///
/// The first three variants are the business errors of the lifecycle
/// service. They are always raised before any side effect takes place and
/// carry the offending input so the caller can react without looking at
/// internal state. The remaining variants wrap collaborator failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-supplied input fails a precondition, e.g. an empty email at
    /// creation time.
    #[error("{0}")]
    InvalidArgument(String),

    /// A create request targets an email that already belongs to a user.
    #[error("A user with that email already exists")]
    DuplicateEmail { email: String },

    /// No user is stored under the given identifier.
    #[error("User not found with ID: {id}")]
    NotFound { id: UserId },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Whether the error is one of the business rule violations raised by
    /// the service itself, as opposed to a collaborator failure.
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidArgument(_) | AppError::DuplicateEmail { .. } | AppError::NotFound { .. }
        )
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::ExternalServiceError(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Attaches a message to foreign errors while converting them into
/// [`AppError::InternalError`].
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
