//! Mail relay client.
//!
//! Each notification becomes one `POST` of a JSON [`MailMessage`] to the
//! configured relay URL. Any non-2xx answer is reported as
//! `AppError::ExternalServiceError` together with the relay's response body.

use async_trait::async_trait;
use log::{debug, error};
use serde::Serialize;

use crate::config::{MailBackend, MailConfig};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::services::notifications::email_service::{EmailService, EmailTemplate};

/// Body posted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub template: EmailTemplate,
    pub subject: &'static str,
    pub name: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpEmailService {
    client: reqwest::Client,
    relay_url: String,
    from: String,
}

impl HttpEmailService {
    pub fn new(relay_url: impl Into<String>, from: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            relay_url: relay_url.into(),
            from: from.into(),
        }
    }

    /// Builds the relay client from configuration.
    ///
    /// Fails with `ConfigError` when the configured backend is not `http`.
    pub fn from_config(config: &MailConfig) -> AppResult<Self> {
        let MailBackend::Http { relay_url } = &config.backend else {
            return Err(AppError::ConfigError(
                "HttpEmailService requires MAIL_BACKEND=http".to_string(),
            ));
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build mail relay client")?;

        Ok(Self::new(relay_url.clone(), config.from.clone(), client))
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    pub fn message<'a>(&'a self, template: EmailTemplate, email: &'a str, name: &'a str) -> MailMessage<'a> {
        MailMessage {
            from: &self.from,
            to: email,
            template,
            subject: template.subject(),
            name,
        }
    }

    async fn deliver(&self, template: EmailTemplate, email: &str, name: &str) -> AppResult<()> {
        let message = self.message(template, email, name);

        let response = self
            .client
            .post(&self.relay_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("mail relay request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("mail relay rejected {} mail for {}: {} {}", template, email, status, body);
            return Err(AppError::ExternalServiceError(format!(
                "mail relay returned {}: {}",
                status, body
            )));
        }

        debug!("{} mail handed to relay for {}", template, email);
        Ok(())
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send_welcome_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.deliver(EmailTemplate::Welcome, email, name).await
    }

    async fn send_activation_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.deliver(EmailTemplate::Activation, email, name).await
    }

    async fn send_account_deleted_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.deliver(EmailTemplate::AccountDeleted, email, name).await
    }
}
