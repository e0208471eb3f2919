//! MongoDB connection wrapper used by the MongoDB storage backend.

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::AppResult;

const APP_NAME: &str = "user_lifecycle_service";

/// MongoDB client bound to one database.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// Connects to MongoDB and verifies the connection with a `ping`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("MongoDB connected: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
