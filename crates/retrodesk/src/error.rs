//! Error types for the desktop crate
//!
//! Window operations never fail (unknown ids are no-ops). Errors exist for the
//! state containers that validate input and for the storage mirror.

use thiserror::Error;

pub use crate::files::FsError;
pub use crate::users::UserError;

/// Configuration could not be parsed or is out of range
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Storage mirror failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage rejected write to '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("failed to encode section '{section}': {source}")]
    Encode {
        section: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur in desktop operations
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown app: {0}")]
    UnknownApp(String),
}

/// Result type alias for desktop operations
pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskError::UnknownApp("solitaire".to_string());
        assert_eq!(err.to_string(), "unknown app: solitaire");

        let err = ConfigError::InvalidValue {
            field: "menu_bar_height",
            reason: "must be non-negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'menu_bar_height': must be non-negative"
        );

        let err = PersistenceError::WriteFailed {
            key: "retrodesk.users".to_string(),
            reason: "quota".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "storage rejected write to 'retrodesk.users': quota"
        );
    }

    #[test]
    fn test_domain_errors_convert() {
        let err: DeskError = FsError::NotFound("/nope".to_string()).into();
        assert!(matches!(err, DeskError::Fs(FsError::NotFound(_))));
        assert_eq!(err.to_string(), "no such file or directory: /nope");

        let err: DeskError = UserError::NotFound(7).into();
        assert!(matches!(err, DeskError::User(_)));
    }
}
