//! Error types for predicate and guard failures
//!
//! [`Mismatch`] is what a single predicate evaluation produces when the
//! observed value does not satisfy it. [`AssertionError`] is what the
//! throwing guard flavors (`assert`, `assert_wrap`) hand back to callers.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// MISMATCH
// ============================================================================

/// A structured description of why a value failed a predicate.
///
/// # Examples
///
/// ```rust
/// use warden_guard::foundation::Mismatch;
///
/// let mismatch = Mismatch::new("at_least", "value is below the minimum")
///     .with_param("expected", "3")
///     .with_param("actual", "1");
///
/// assert_eq!(mismatch.param("actual"), Some("1"));
/// assert_eq!(
///     mismatch.to_string(),
///     "at_least: value is below the minimum (params: [expected=3, actual=1])"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Machine-readable code, usually the predicate's factory name.
    pub code: Cow<'static, str>,

    /// Human-readable explanation.
    pub message: Cow<'static, str>,

    /// Ordered key-value details (typically `expected` and `actual`).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Mismatch {
    /// Creates a new mismatch with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Shorthand for the common `expected` / `actual` pair.
    #[must_use = "builder methods must be chained or built"]
    pub fn expected_actual(
        self,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for Mismatch {}

// ============================================================================
// ASSERTION ERROR
// ============================================================================

/// Error returned by the throwing guard flavors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// The predicate failed and the caller supplied no message.
    #[error("{0}")]
    Failed(Mismatch),

    /// The predicate failed; the caller's message is prepended.
    #[error("{message}: {mismatch}")]
    FailedWithMessage {
        /// Caller-supplied failure message.
        message: Cow<'static, str>,
        /// The underlying predicate mismatch.
        mismatch: Mismatch,
    },
}

impl AssertionError {
    /// Wraps a mismatch, prepending `message` when present.
    pub fn new(mismatch: Mismatch, message: Option<&str>) -> Self {
        match message {
            Some(message) => Self::FailedWithMessage {
                message: Cow::Owned(message.to_owned()),
                mismatch,
            },
            None => Self::Failed(mismatch),
        }
    }

    /// The mismatch that caused the failure.
    pub fn mismatch(&self) -> &Mismatch {
        match self {
            Self::Failed(mismatch) | Self::FailedWithMessage { mismatch, .. } => mismatch,
        }
    }

    /// The caller-supplied message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed(_) => None,
            Self::FailedWithMessage { message, .. } => Some(message),
        }
    }

    /// Consumes the error, returning the mismatch.
    pub fn into_mismatch(self) -> Mismatch {
        match self {
            Self::Failed(mismatch) | Self::FailedWithMessage { mismatch, .. } => mismatch,
        }
    }
}

impl From<Mismatch> for AssertionError {
    fn from(mismatch: Mismatch) -> Self {
        Self::Failed(mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_without_params() {
        let mismatch = Mismatch::new("is_empty", "value is not empty");
        assert_eq!(mismatch.to_string(), "is_empty: value is not empty");
    }

    #[test]
    fn test_expected_actual_order() {
        let mismatch = Mismatch::new("equals", "values differ").expected_actual("1", "2");
        assert_eq!(mismatch.params[0].0, "expected");
        assert_eq!(mismatch.params[1].0, "actual");
        assert_eq!(mismatch.param("missing"), None);
    }

    #[test]
    fn test_assertion_error_prepends_message() {
        let mismatch = Mismatch::new("equals", "values differ");
        let error = AssertionError::new(mismatch.clone(), Some("user id"));
        assert_eq!(error.to_string(), "user id: equals: values differ");
        assert_eq!(error.message(), Some("user id"));
        assert_eq!(error.mismatch(), &mismatch);
    }

    #[test]
    fn test_assertion_error_without_message() {
        let error: AssertionError = Mismatch::new("equals", "values differ").into();
        assert_eq!(error.to_string(), "equals: values differ");
        assert_eq!(error.message(), None);
        assert_eq!(error.into_mismatch().code, "equals");
    }
}
