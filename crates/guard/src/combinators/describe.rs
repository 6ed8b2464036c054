//! DESCRIBE combinator - custom mismatch messages

use std::borrow::Cow;

use crate::foundation::{Mismatch, Predicate};

/// Replaces the mismatch message of a predicate.
///
/// Code and params are kept so callers can still match on them.
#[derive(Debug, Clone)]
pub struct Describe<P> {
    inner: P,
    message: Cow<'static, str>,
}

impl<P> Describe<P> {
    /// Creates a new `Describe` combinator.
    pub fn new(inner: P, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Predicate> Predicate for Describe<P> {
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        self.inner
            .evaluate(input)
            .map_err(|mismatch| mismatch.with_message(self.message.clone()))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::PredicateExt;
    use crate::predicates::at_least;

    #[test]
    fn test_describe_replaces_message_only() {
        let predicate = at_least(18).describe("applicant must be an adult");
        let mismatch = predicate.evaluate(&16).unwrap_err();
        assert_eq!(mismatch.message, "applicant must be an adult");
        assert_eq!(mismatch.code, "at_least");
        assert_eq!(mismatch.param("actual"), Some("16"));
    }
}
