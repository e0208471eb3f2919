use async_trait::async_trait;
use log::info;

use crate::core::errors::AppResult;
use crate::services::notifications::email_service::{EmailService, EmailTemplate};

/// Writes every notification to the log instead of delivering it.
///
/// Default backend outside production, selected with `MAIL_BACKEND=log`.
#[derive(Debug, Clone)]
pub struct LogEmailService {
    from: String,
}

impl LogEmailService {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    fn record(&self, template: EmailTemplate, email: &str, name: &str) -> AppResult<()> {
        info!(
            "mail [{}] from={} to={} name={} subject=\"{}\"",
            template,
            self.from,
            email,
            name,
            template.subject()
        );
        Ok(())
    }
}

#[async_trait]
impl EmailService for LogEmailService {
    async fn send_welcome_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailTemplate::Welcome, email, name)
    }

    async fn send_activation_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailTemplate::Activation, email, name)
    }

    async fn send_account_deleted_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailTemplate::AccountDeleted, email, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_email_service_never_fails() {
        let service = LogEmailService::new("no-reply@localhost");

        assert!(service.send_welcome_email("new@email.com", "new_user").await.is_ok());
        assert!(service.send_activation_email("new@email.com", "new_user").await.is_ok());
        assert!(service.send_account_deleted_email("new@email.com", "new_user").await.is_ok());
    }
}
