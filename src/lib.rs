//! User lifecycle service
//!
//! Creates, retrieves, updates, deletes and activates user accounts, and
//! sends lifecycle emails (welcome, activation, account deleted) as a side
//! effect of those transitions.
//!
//! # Features
//!
//! - **Lifecycle rules**: unique email on creation, existence checks,
//!   idempotent activation
//! - **Injected collaborators**: storage ([`repositories::users::UserRepository`])
//!   and email delivery ([`services::notifications::EmailService`]) are traits
//! - **Storage backends**: in-memory or MongoDB
//! - **Mail backends**: log-only or HTTP mail relay
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   UserService   │ ← business rules
//! └─────────────────┘
//!      │        │
//!      ▼        ▼
//! ┌─────────┐ ┌──────────────┐
//! │  Repo   │ │ EmailService │ ← injected capabilities
//! └─────────┘ └──────────────┘
//!      │        │
//!      ▼        ▼
//!  memory /   log /
//!  MongoDB    HTTP relay
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_lifecycle_service::bootstrap;
//! use user_lifecycle_service::config::AppConfig;
//! use user_lifecycle_service::domain::User;
//!
//! let config = AppConfig::from_env()?;
//! let user_service = bootstrap::build_user_service(&config).await?;
//!
//! let user = user_service.create_user(User::new("new_user", "new@email.com", false)).await?;
//! let activated = user_service.activate_user(user.id.unwrap()).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
