//! User management
//!
//! # Invariants
//!
//! - Usernames are unique (case-insensitive) and non-empty
//! - Display names are non-empty
//! - At least one active admin exists once any admin has been added

mod directory;
mod error;
mod types;

pub use directory::UserDirectory;
pub use error::UserError;
pub use types::{NewUser, Role, User, UserFilter, UserId, UserStatus, UserUpdate};
