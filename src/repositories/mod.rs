//! # Repository Layer
//!
//! Storage capability ([`users::UserRepository`]) and its backends.

pub mod users;
