//! Errors from user directory operations

use thiserror::Error;
use super::UserId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(UserId),

    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error("invalid username '{0}': use letters, digits, '.', '_' or '-'")]
    InvalidUsername(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// Removing, demoting, or suspending would leave no active admin
    #[error("user {0} is the last active admin")]
    LastAdmin(UserId),

    #[error("no user ids left")]
    IdsExhausted,
}
