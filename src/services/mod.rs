//! # Service Layer
//!
//! - [`users::UserService`]: user lifecycle rules
//! - [`notifications`]: the email capability and its backends

pub mod notifications;
pub mod users;
