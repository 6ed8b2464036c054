//! Closure-backed predicates for one-off conditions

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Mismatch, Predicate};

/// A predicate built from a `Fn(&T) -> bool` closure.
///
/// Created by [`predicate_fn`].
pub struct FnPredicate<T: ?Sized, F> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    test: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> fmt::Debug for FnPredicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, F> Predicate for FnPredicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn evaluate(&self, input: &T) -> Result<(), Mismatch> {
        if (self.test)(input) {
            Ok(())
        } else {
            Err(Mismatch::new(self.code.clone(), self.message.clone()))
        }
    }

    fn name(&self) -> &str {
        &self.code
    }
}

/// Builds a predicate from a closure.
///
/// # Examples
///
/// ```rust
/// use warden_guard::combinators::predicate_fn;
/// use warden_guard::guard::check;
///
/// let even = predicate_fn("even", "value is odd", |n: &u32| n % 2 == 0);
/// assert!(check(&even, &4));
/// assert!(!check(&even, &5));
/// ```
pub fn predicate_fn<T, F>(
    code: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
    test: F,
) -> FnPredicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    FnPredicate {
        code: code.into(),
        message: message.into(),
        test,
        _input: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_predicate_on_str() {
        let lowercase = predicate_fn("lowercase", "value has uppercase characters", |s: &str| {
            s.chars().all(|c| !c.is_uppercase())
        });
        assert!(lowercase.evaluate("abc").is_ok());

        let mismatch = lowercase.evaluate("aBc").unwrap_err();
        assert_eq!(mismatch.code, "lowercase");
        assert_eq!(lowercase.name(), "lowercase");
    }
}
