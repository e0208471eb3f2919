//! # Recording Test Doubles
//!
//! Stand-ins for the two collaborators of
//! [`UserService`](crate::services::users::UserService). Both record every
//! call so tests can assert on what the service did, in which order and
//! with which arguments.
//!
//! - [`RecordingUserRepository`] delegates to an
//!   [`InMemoryUserRepository`] and logs each call as a [`RepoCall`].
//! - [`RecordingEmailService`] logs each notification as an [`EmailCall`]
//!   and can be switched to fail every delivery.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::{InMemoryUserRepository, UserRepository};
use crate::services::notifications::EmailService;

#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    Save(User),
    FindById(UserId),
    FindByEmail(String),
    FindAll,
    Delete(User),
    FindByActive(bool),
}

#[derive(Debug, Default)]
pub struct RecordingUserRepository {
    inner: InMemoryUserRepository,
    calls: Mutex<Vec<RepoCall>>,
}

impl RecordingUserRepository {
    /// Repository that already holds `users` (each with an id).
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: InMemoryUserRepository::with_users(users).expect("seed users need ids"),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn saves(&self) -> Vec<User> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepoCall::Save(user) => Some(user),
                _ => None,
            })
            .collect()
    }

    /// Reads the stored record without recording a call.
    pub async fn stored(&self, id: UserId) -> Option<User> {
        self.inner.find_by_id(id).await.unwrap()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UserRepository for RecordingUserRepository {
    async fn save(&self, user: User) -> AppResult<User> {
        self.record(RepoCall::Save(user.clone()));
        self.inner.save(user).await
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        self.record(RepoCall::FindById(id));
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.record(RepoCall::FindByEmail(email.to_string()));
        self.inner.find_by_email(email).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.record(RepoCall::FindAll);
        self.inner.find_all().await
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        self.record(RepoCall::Delete(user.clone()));
        self.inner.delete(user).await
    }

    async fn find_by_active(&self, active: bool) -> AppResult<Vec<User>> {
        self.record(RepoCall::FindByActive(active));
        self.inner.find_by_active(active).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailCall {
    Welcome { email: String, name: String },
    Activation { email: String, name: String },
    AccountDeleted { email: String, name: String },
}

impl EmailCall {
    pub fn welcome(email: &str, name: &str) -> Self {
        EmailCall::Welcome { email: email.to_string(), name: name.to_string() }
    }

    pub fn activation(email: &str, name: &str) -> Self {
        EmailCall::Activation { email: email.to_string(), name: name.to_string() }
    }

    pub fn account_deleted(email: &str, name: &str) -> Self {
        EmailCall::AccountDeleted { email: email.to_string(), name: name.to_string() }
    }
}

#[derive(Debug, Default)]
pub struct RecordingEmailService {
    calls: Mutex<Vec<EmailCall>>,
    failing: bool,
}

impl RecordingEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records calls but answers each with `ExternalServiceError`.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn calls(&self) -> Vec<EmailCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: EmailCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);

        if self.failing {
            return Err(AppError::ExternalServiceError("mail relay unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send_welcome_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailCall::welcome(email, name))
    }

    async fn send_activation_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailCall::activation(email, name))
    }

    async fn send_account_deleted_email(&self, email: &str, name: &str) -> AppResult<()> {
        self.record(EmailCall::account_deleted(email, name))
    }
}
