//! In-memory user repository.
//!
//! Default storage backend for development and tests. Records live in a
//! `BTreeMap` keyed by id, so listings come back in ascending id order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::user_repo::UserRepository;

#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with already persisted users.
    ///
    /// Every user must carry an id; the sequence continues after the
    /// highest one.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> AppResult<Self> {
        let mut stored = BTreeMap::new();

        for user in users {
            let id = user.id.ok_or_else(|| {
                AppError::InvalidArgument(format!("seed user {} has no id", user.email))
            })?;
            stored.insert(id, user);
        }

        let next_id = stored.keys().next_back().map_or(1, |max| max + 1);

        Ok(Self {
            users: RwLock::new(stored),
            next_id: AtomicI64::new(next_id),
        })
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        let id = match user.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                user.id = Some(id);
                id
            }
        };

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        // Unknown or never-persisted users are a no-op.
        if let Some(id) = user.id {
            self.users.write().await.remove(&id);
        }
        Ok(())
    }

    async fn find_by_active(&self, active: bool) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.active == active).cloned().collect())
    }
}
