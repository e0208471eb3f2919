//! User Entity Implementation
//!
//! The single domain entity managed by the lifecycle service.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the storage backend on first persistence.
pub type UserId = i64;

/// User account entity.
///
/// `id` stays `None` until a repository persists the user for the first
/// time; after that it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<UserId>,
    /// Display name
    pub name: String,
    /// Contact address (unique at creation time)
    pub email: String,
    /// Account activation flag
    pub active: bool,
}

impl User {
    /// New, not yet persisted user.
    pub fn new(name: impl Into<String>, email: impl Into<String>, active: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            active,
        }
    }

    /// Same user carrying an identifier. Used by repositories when they
    /// assign one, and by tests to describe stored records.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Overwrites every mutable field with the values of `update`.
    pub fn apply(&mut self, update: UserUpdate) {
        let UserUpdate { name, email, active } = update;

        self.name = name;
        self.email = email;
        self.active = active;
    }
}

/// Replacement values for [`User`] on update.
///
/// All three fields are written wholesale, there is no partial merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl UserUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            active,
        }
    }
}
