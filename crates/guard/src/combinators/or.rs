//! OR combinator - logical disjunction of predicates

use crate::foundation::{Mismatch, Predicate};

/// Combines two predicates with logical OR.
///
/// When both fail, the mismatch carries both messages as `left` and
/// `right` params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left predicate.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right predicate.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Predicate for Or<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    type Input = L::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        let Err(left) = self.left.evaluate(input) else {
            return Ok(());
        };
        let Err(right) = self.right.evaluate(input) else {
            return Ok(());
        };

        Err(Mismatch::new("or", "no alternative matched")
            .with_param("left", left.to_string())
            .with_param("right", right.to_string()))
    }
}

/// Creates an `Or` combinator from two predicates.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{equals, starts_with};

    #[test]
    fn test_or_either_passes() {
        let predicate = or(equals(1), equals(2));
        assert!(predicate.evaluate(&1).is_ok());
        assert!(predicate.evaluate(&2).is_ok());
    }

    #[test]
    fn test_or_both_fail() {
        let predicate = or(starts_with("http://"), starts_with("https://"));
        let mismatch = predicate.evaluate("ftp://host").unwrap_err();
        assert_eq!(mismatch.code, "or");
        assert!(mismatch.param("left").unwrap().contains("http://"));
        assert!(mismatch.param("right").unwrap().contains("https://"));
    }
}
