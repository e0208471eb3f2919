//! MongoDB user repository.
//!
//! Users are stored in the `users` collection with a numeric `_id`. Ids are
//! drawn from the `counters` collection, one document per sequence, bumped
//! atomically with `$inc`.
//!
//! [`MongoUserRepository::create_indexes`] installs a unique index on
//! `email`, which closes the race between the service's duplicate check and
//! the insert: a concurrent duplicate fails with `DatabaseError` instead of
//! producing two records.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::doc;
use mongodb::options::{
    FindOneAndUpdateOptions, FindOptions, IndexOptions, ReplaceOptions, ReturnDocument,
};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::user_repo::UserRepository;

pub const USERS_COLLECTION: &str = "users";
pub const COUNTERS_COLLECTION: &str = "counters";
const USER_SEQUENCE: &str = "users";

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

#[derive(Clone)]
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Counter> {
        self.db.get_database().collection::<Counter>(COUNTERS_COLLECTION)
    }

    async fn next_id(&self) -> AppResult<UserId> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(doc! { "_id": USER_SEQUENCE }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError("user id sequence returned no document".to_string())
            })?;

        Ok(counter.seq)
    }

    async fn find_many(&self, filter: mongodb::bson::Document) -> AppResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self.users().find(filter).with_options(options).await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let active_index = IndexModel::builder()
            .keys(doc! { "active": 1 })
            .options(IndexOptions::builder()
                .name("active".to_string())
                .build())
            .build();

        self.users()
            .create_indexes([email_index, active_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let id = match user.id {
            Some(id) => id,
            None => {
                let id = self.next_id().await?;
                user.id = Some(id);
                id
            }
        };

        let options = ReplaceOptions::builder().upsert(true).build();
        self.users()
            .replace_one(doc! { "_id": id }, &user)
            .with_options(options)
            .await?;

        debug!("user {} saved", id);
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users().find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! {}).await
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let Some(id) = user.id else {
            return Ok(());
        };

        let result = self.users().delete_one(doc! { "_id": id }).await?;
        debug!("user {} delete, removed={}", id, result.deleted_count);

        Ok(())
    }

    async fn find_by_active(&self, active: bool) -> AppResult<Vec<User>> {
        self.find_many(doc! { "active": active }).await
    }
}
