//! Errors from file tree operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from file tree operations
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("not a file: {0}")]
    NotAFile(String),

    #[error("directory not empty: {0}")]
    DirectoryNotEmpty(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Root and the trash directory cannot be removed or renamed
    #[error("operation not permitted on {0}")]
    PermissionDenied(String),

    #[error("cannot move {0} into itself")]
    MoveIntoSelf(String),
}

impl FsError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}
