//! # Domain Entities
//!
//! Plain data structures shared by the service and the storage adapters.
//! They serialize with `serde` so the MongoDB adapter can store them as-is.

pub mod users;

pub use users::*;
