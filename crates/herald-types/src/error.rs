//! Error taxonomy for Herald.
//!
//! The split mirrors how each failure is handled:
//! - `ChatError::NotFound` is recovered locally wherever "already gone" is
//!   the desired end state.
//! - `ChatError::PermissionDenied` and the invalid-argument variants are
//!   surfaced to the invoking user and abort the operation.
//! - `ChatError::Unavailable` propagates; there is no automatic retry.
//! - `StoreError::Corrupt` is fatal at startup; a readable-but-unparsable
//!   record is never silently reset.

use thiserror::Error;

/// Errors from outbound calls to the chat platform.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("resource not found on the platform")]
    NotFound,

    #[error("platform denied permission")]
    PermissionDenied,

    #[error("platform rejected the request: {0}")]
    InvalidArgument(String),

    #[error("platform unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the persisted record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt session record at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Errors from session lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("timestamp {0} does not map to a valid instant")]
    InvalidTimestamp(i64),

    #[error("timestamp {0} is in the past")]
    TimestampInPast(i64),
}

impl LifecycleError {
    /// Whether this error belongs to the invalid-argument class that is
    /// shown verbatim to the invoking user rather than as a generic failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LifecycleError::InvalidTimestamp(_)
                | LifecycleError::TimestampInPast(_)
                | LifecycleError::Chat(ChatError::InvalidArgument(_))
        )
    }
}

/// Errors while loading startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {reason}")]
    Invalid { path: String, reason: String },

    #[error("environment variable {0} is not set")]
    MissingSecret(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::InvalidArgument("event start is in the past".to_string());
        assert_eq!(
            err.to_string(),
            "platform rejected the request: event start is in the past"
        );
    }

    #[test]
    fn test_corrupt_store_error_names_the_file() {
        let err = StoreError::Corrupt {
            path: "data.json".to_string(),
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("data.json"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_lifecycle_error_classifies_invalid_arguments() {
        assert!(LifecycleError::TimestampInPast(12345).is_invalid_argument());
        assert!(LifecycleError::InvalidTimestamp(-1).is_invalid_argument());
        assert!(!LifecycleError::Chat(ChatError::NotFound).is_invalid_argument());
        assert!(
            !LifecycleError::Chat(ChatError::Unavailable("boom".into())).is_invalid_argument()
        );
    }
}
