//! # Domain Layer
//!
//! Business entities of the user lifecycle service.
//!
//! ```text
//! domain
//! └── entities/
//!     └── users/    ← User, UserUpdate, UserId
//! ```

pub mod entities;

pub use entities::*;
