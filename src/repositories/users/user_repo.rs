//! # User Repository Contract
//!
//! Storage capability consumed by [`UserService`](crate::services::users::UserService).
//! The service only ever talks to this trait, so any backend (in-memory,
//! MongoDB, a test double) can be injected at construction time.
//!
//! ## Consistency
//!
//! The service performs check-then-write sequences (duplicate email check
//! before insert, read before update/activate) without any locking of its
//! own. If those sequences must be atomic under concurrent callers, the
//! implementation has to provide it (unique index, transaction, ...).

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{User, UserId};

/// Persistence operations for [`User`] records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user when `id` is `None`, assigning a fresh identifier,
    /// otherwise overwrites the record stored under `id`.
    ///
    /// Returns the persisted representation.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Used by the service for duplicate detection only.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Removes the record corresponding to `user`.
    async fn delete(&self, user: &User) -> AppResult<()>;

    /// All records whose `active` flag equals `active`.
    async fn find_by_active(&self, active: bool) -> AppResult<Vec<User>>;
}
