//! NOT combinator - logical negation of a predicate

use crate::foundation::{Mismatch, Predicate};

/// Inverts a predicate: passes when the inner predicate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<P> {
    pub(crate) inner: P,
}

impl<P> Not<P> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner predicate.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Predicate for Not<P>
where
    P: Predicate,
{
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        match self.inner.evaluate(input) {
            Ok(()) => Err(Mismatch::new("not", "value satisfied a negated predicate")
                .with_param("predicate", self.inner.name().to_owned())),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a predicate.
pub fn not<P: Predicate>(inner: P) -> Not<P> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::contains;

    #[test]
    fn test_not_inverts() {
        let predicate = not(contains("admin"));
        assert!(predicate.evaluate("user123").is_ok());

        let mismatch = predicate.evaluate("admin123").unwrap_err();
        assert_eq!(mismatch.code, "not");
        assert!(mismatch.param("predicate").unwrap().contains("Contains"));
    }

    #[test]
    fn test_double_negation() {
        let predicate = not(not(contains("a")));
        assert!(predicate.evaluate("cat").is_ok());
        assert!(predicate.evaluate("dog").is_err());
    }
}
