//! # User Lifecycle Service
//!
//! Business rules for the full lifecycle of a user account: creation,
//! lookup, update, deletion and activation. Storage and email delivery are
//! injected capabilities, this module only decides *what* happens and in
//! which order.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! │                                                          │
//! │  create ──► email check ──► save ──► welcome mail        │
//! │  update ──► lookup ──► overwrite ──► save                │
//! │  delete ──► lookup ──► delete ──► account-deleted mail   │
//! │  activate ► lookup ──► (already active? → false)         │
//! │                    └─► save ──► activation mail → true   │
//! └──────────────────────────────────────────────────────────┘
//!            │                                │
//!            ▼                                ▼
//!   dyn UserRepository                 dyn EmailService
//! ```
//!
//! ## Side effects and failures
//!
//! Business errors (`InvalidArgument`, `DuplicateEmail`, `NotFound`) are
//! returned before anything is written or sent. Collaborator errors are
//! propagated unchanged.
//!
//! Notifications are sent after the state change is persisted and are not
//! part of it. If the email collaborator fails, `create`, `delete` and
//! `activate` return that error although the change is already stored, so
//! an error from those operations says nothing reliable about persisted
//! state.
//!
//! ## Concurrency
//!
//! The service has no state of its own and is cheap to clone. It does not
//! serialize calls for the same user: a concurrent duplicate create or
//! activate/update race is only prevented if the repository enforces it.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{User, UserId, UserUpdate};
use crate::repositories::users::UserRepository;
use crate::services::notifications::EmailService;

/// User account lifecycle orchestration.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(LogEmailService::new("no-reply@localhost")),
/// );
///
/// let user = service.create_user(User::new("new_user", "new@email.com", false)).await?;
/// assert!(service.activate_user(user.id.unwrap()).await?);
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    email_service: Arc<dyn EmailService>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, email_service: Arc<dyn EmailService>) -> Self {
        Self {
            user_repo,
            email_service,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidArgument` - empty email, or the user already
    ///   carries an id
    /// * `AppError::DuplicateEmail` - another user owns the email
    ///
    /// On success the storage-assigned id is set and exactly one welcome
    /// email has been sent to the persisted address.
    pub async fn create_user(&self, user: User) -> AppResult<User> {
        if user.email.is_empty() {
            return Err(AppError::InvalidArgument(
                "The user's email is required".to_string(),
            ));
        }

        if let Some(id) = user.id {
            return Err(AppError::InvalidArgument(format!(
                "A new user must not carry an ID (got {})",
                id
            )));
        }

        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            debug!("create rejected, email already registered: {}", user.email);
            return Err(AppError::DuplicateEmail { email: user.email });
        }

        let saved_user = self.user_repo.save(user).await?;

        info!("user created: id={:?} email={}", saved_user.id, saved_user.email);

        self.email_service
            .send_welcome_email(&saved_user.email, &saved_user.name)
            .await?;

        Ok(saved_user)
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - nothing stored under `id`
    pub async fn get_user_by_id(&self, id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound { id })
    }

    /// Every stored user, in the order the repository returns them.
    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// Overwrites `name`, `email` and `active` of an existing user.
    ///
    /// The email is not checked for uniqueness here, unlike in
    /// [`create_user`](Self::create_user). No notification is sent.
    ///
    /// Backends differ on a colliding email: the in-memory repository stores
    /// it, while `MongoUserRepository` rejects the save through its unique
    /// `email` index and this call returns `AppError::DatabaseError`.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - nothing stored under `id`
    /// * `AppError::DatabaseError` - the backend refused the write, e.g. a
    ///   unique email index
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> AppResult<User> {
        let mut existing_user = self.get_user_by_id(id).await?;

        existing_user.apply(update);

        let saved_user = self.user_repo.save(existing_user).await?;
        debug!("user updated: id={}", id);

        Ok(saved_user)
    }

    /// Removes the user, then sends the account-deleted email with the
    /// pre-deletion email and name.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - nothing stored under `id`
    pub async fn delete_user(&self, id: UserId) -> AppResult<()> {
        let user = self.get_user_by_id(id).await?;

        self.user_repo.delete(&user).await?;
        info!("user deleted: id={} email={}", id, user.email);

        self.email_service
            .send_account_deleted_email(&user.email, &user.name)
            .await
    }

    /// Activates the user.
    ///
    /// Returns `false` without writing or sending anything when the user is
    /// already active, `true` after flipping the flag, persisting it and
    /// sending the activation email.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - nothing stored under `id`
    pub async fn activate_user(&self, id: UserId) -> AppResult<bool> {
        let mut user = self.get_user_by_id(id).await?;

        if user.active {
            debug!("user {} already active", id);
            return Ok(false);
        }

        user.active = true;
        self.user_repo.save(user.clone()).await?;
        info!("user activated: id={}", id);

        self.email_service
            .send_activation_email(&user.email, &user.name)
            .await?;

        Ok(true)
    }

    /// All users whose `active` flag is set.
    pub async fn find_active_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_by_active(true).await
    }
}
