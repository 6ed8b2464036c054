//! Error types for polling

use std::time::Duration;

use thiserror::Error;
use warden_guard::foundation::Mismatch;

/// Result type for poll operations.
pub type PollResult<T> = Result<T, PollError>;

/// Invalid polling configuration. Reported before the callback runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The interval between attempts is zero.
    #[error("poll interval must be greater than zero")]
    ZeroInterval,

    /// The overall timeout is zero.
    #[error("poll timeout must be greater than zero")]
    ZeroTimeout,

    /// A duration component is negative or not a finite number.
    #[error("invalid duration: {value} {unit}")]
    InvalidDuration {
        /// Unit of the offending component (`milliseconds`, `seconds`, ...).
        unit: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The components add up to more than `Duration` can hold.
    #[error("duration overflows the supported range")]
    DurationOverflow,

    /// An environment variable holds something other than a millisecond count.
    #[error("environment variable {name} must be a whole number of milliseconds, got {value:?}")]
    Env {
        /// Variable name.
        name: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// Why a single attempt did not pass.
///
/// Attempt failures are never returned on their own; the last one is
/// carried inside [`PollError::Timeout`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttemptError {
    /// The callback produced a value that the predicate rejected.
    #[error("{0}")]
    Mismatch(#[from] Mismatch),

    /// The callback itself failed.
    #[error("callback failed: {0}")]
    Callback(String),

    /// No attempt completed before the timeout.
    #[error("no result produced")]
    NoResult,
}

/// Errors returned by [`wait_until`](crate::wait_until) and friends.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PollError {
    /// No attempt passed before the timeout elapsed.
    #[error("{}timed out after {:?}: {last_error}", prefix(.message), .timeout)]
    Timeout {
        /// The configured timeout.
        timeout: Duration,
        /// Number of times the callback was invoked.
        attempts: u32,
        /// Caller-supplied failure message.
        message: Option<String>,
        /// The failure observed on the last attempt.
        last_error: AttemptError,
    },

    /// The configuration was rejected; the callback never ran.
    #[error("invalid poll configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PollError {
    /// Returns `true` for [`PollError::Timeout`].
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The last attempt failure, if the poll timed out.
    #[must_use]
    pub fn last_error(&self) -> Option<&AttemptError> {
        match self {
            Self::Timeout { last_error, .. } => Some(last_error),
            Self::Config(_) => None,
        }
    }

    /// Number of callback invocations, if the poll timed out.
    #[must_use]
    pub fn attempts(&self) -> Option<u32> {
        match self {
            Self::Timeout { attempts, .. } => Some(*attempts),
            Self::Config(_) => None,
        }
    }
}

fn prefix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!("{message}: "))
        .unwrap_or_default()
}
