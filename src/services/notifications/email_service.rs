//! # Lifecycle Email Notifications
//!
//! Notification capability consumed by
//! [`UserService`](crate::services::users::UserService). Each call receives
//! the recipient address and the display name of the user the event is
//! about.
//!
//! Delivery guarantees belong to the implementation. The service awaits each
//! call and propagates its error, but never retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;

/// Sends the three lifecycle emails.
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_welcome_email(&self, email: &str, name: &str) -> AppResult<()>;

    async fn send_activation_email(&self, email: &str, name: &str) -> AppResult<()>;

    async fn send_account_deleted_email(&self, email: &str, name: &str) -> AppResult<()>;
}

/// Lifecycle email kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    Welcome,
    Activation,
    AccountDeleted,
}

impl EmailTemplate {
    pub fn subject(&self) -> &'static str {
        match self {
            EmailTemplate::Welcome => "Welcome aboard",
            EmailTemplate::Activation => "Your account is now active",
            EmailTemplate::AccountDeleted => "Your account has been deleted",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTemplate::Welcome => "welcome",
            EmailTemplate::Activation => "activation",
            EmailTemplate::AccountDeleted => "account_deleted",
        }
    }
}

impl std::fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_serializes_as_snake_case() {
        let json = serde_json::to_string(&EmailTemplate::AccountDeleted).unwrap();
        assert_eq!(json, "\"account_deleted\"");

        for template in [EmailTemplate::Welcome, EmailTemplate::Activation, EmailTemplate::AccountDeleted] {
            let json = serde_json::to_string(&template).unwrap();
            assert_eq!(json, format!("\"{}\"", template));
        }
    }

    #[test]
    fn test_each_template_has_a_subject() {
        assert_eq!(EmailTemplate::Welcome.subject(), "Welcome aboard");
        assert_ne!(EmailTemplate::Activation.subject(), EmailTemplate::AccountDeleted.subject());
    }
}
