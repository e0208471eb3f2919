//! # Configuration
//!
//! Typed, environment-driven settings for the storage and mail backends.

pub mod app_config;
pub mod data_config;
pub mod mail_config;

pub use app_config::*;
pub use data_config::*;
pub use mail_config::*;
