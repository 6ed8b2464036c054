//! Core traits for the predicate system
//!
//! Every guard flavor (`assert`, `check`, `assert_wrap`, `check_wrap` and
//! the poller's `wait_until`) is written once against [`Predicate`]. A new
//! comparison only needs to implement this trait to be usable everywhere.

use crate::foundation::Mismatch;

// ============================================================================
// CORE PREDICATE TRAIT
// ============================================================================

/// Decides whether an observed value satisfies an expectation.
///
/// The expectation lives inside the implementing type (for example the
/// suffix of an `ends_with` predicate); `evaluate` only receives the value
/// being checked.
///
/// # Type Parameters
///
/// * `Input` - The type being checked (can be `?Sized` for `str` and `[T]`)
///
/// # Examples
///
/// ```rust
/// use warden_guard::foundation::{Mismatch, Predicate};
///
/// struct NonBlank;
///
/// impl Predicate for NonBlank {
///     type Input = str;
///
///     fn evaluate(&self, input: &str) -> Result<(), Mismatch> {
///         if input.trim().is_empty() {
///             Err(Mismatch::new("non_blank", "value is blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonBlank.evaluate("x").is_ok());
/// assert!(NonBlank.evaluate("  ").is_err());
/// ```
pub trait Predicate {
    /// The type of value being checked.
    type Input: ?Sized;

    /// Returns `Ok(())` when `input` satisfies the predicate.
    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch>;

    /// Returns the name of this predicate, used in log fields.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<P> Predicate for &P
where
    P: Predicate + ?Sized,
{
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        (**self).evaluate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P> Predicate for Box<P>
where
    P: Predicate + ?Sized,
{
    type Input = P::Input;

    fn evaluate(&self, input: &Self::Input) -> Result<(), Mismatch> {
        (**self).evaluate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// PREDICATE EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Predicate`].
///
/// # Examples
///
/// ```rust
/// use warden_guard::prelude::*;
///
/// let slug = starts_with("v").and(ends_with(".0"));
/// assert!(check(&slug, "v1.0"));
/// assert!(!check(&slug, "1.0"));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must pass. Short-circuits on the first failure.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Predicate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one predicate must pass. Short-circuits on the first success.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Predicate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces the mismatch message, keeping code and params.
    fn describe(self, message: impl Into<std::borrow::Cow<'static, str>>) -> Describe<Self> {
        Describe::new(self, message)
    }
}

impl<P: Predicate> PredicateExt for P {}

pub use crate::combinators::and::And;
pub use crate::combinators::describe::Describe;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPasses;

    impl Predicate for AlwaysPasses {
        type Input = str;

        fn evaluate(&self, _input: &Self::Input) -> Result<(), Mismatch> {
            Ok(())
        }
    }

    #[test]
    fn test_reference_forwards() {
        let predicate = AlwaysPasses;
        let by_ref = &predicate;
        assert!(by_ref.evaluate("anything").is_ok());
        assert_eq!(by_ref.name(), predicate.name());
    }

    #[test]
    fn test_boxed_dyn_predicate() {
        let boxed: Box<dyn Predicate<Input = str>> = Box::new(AlwaysPasses);
        assert!(boxed.evaluate("anything").is_ok());
        assert!(boxed.name().ends_with("AlwaysPasses"));
    }
}
