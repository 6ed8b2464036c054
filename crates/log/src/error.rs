//! Error types for warden-log

use thiserror::Error;

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the global subscriber.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The level string is not a valid `EnvFilter` directive.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected filter string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
