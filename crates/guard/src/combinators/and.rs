//! AND combinator - logical conjunction of predicates
//!
//! # Examples
//!
//! ```rust
//! use warden_guard::combinators::And;
//! use warden_guard::predicates::{at_least, at_most};
//! use warden_guard::foundation::Predicate;
//!
//! let percent = And::new(at_least(0), at_most(100));
//! assert!(percent.evaluate(&42).is_ok());
//! assert!(percent.evaluate(&101).is_err());
//! ```

use crate::foundation::{Mismatch, Predicate};

/// Combines two predicates with logical AND.
///
/// The mismatch is the one reported by the first failing predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

    /// Extracts the left and right predicates.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Predicate for And<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    type Input = L::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        self.left.evaluate(input)?;
        self.right.evaluate(input)
    }
}

/// Creates an `And` combinator from two predicates.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Predicate,
    R: Predicate<Input = L::Input>,
{
    And::new(left, right)
}
