//! Explicit success / failure outcome of a poll

use crate::error::{PollError, PollResult};

/// The resolved result of one polling session.
///
/// Equivalent to [`PollResult`], for callers who prefer to match on named
/// variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome<T> {
    /// The value produced by the passing attempt.
    Success(T),
    /// The poll timed out or was misconfigured.
    Failure(PollError),
}

impl<T> PollOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_result(self) -> PollResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value on success.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}

impl<T> From<PollResult<T>> for PollOutcome<T> {
    fn from(result: PollResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
