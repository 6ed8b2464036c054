//! Guard adapters
//!
//! The same predicate can report its answer in four ways:
//!
//! | flavor          | on pass         | on mismatch            |
//! |-----------------|-----------------|------------------------|
//! | [`assert`]      | `Ok(())`        | `Err(AssertionError)`  |
//! | [`check`]       | `true`          | `false`                |
//! | [`assert_wrap`] | `Ok(value)`     | `Err(AssertionError)`  |
//! | [`check_wrap`]  | `Some(value)`   | `None`                 |
//!
//! The retrying fifth flavor, `wait_until`, lives in `warden-poll`.
//!
//! The `*_wrap` flavors take the value by ownership and hand back exactly
//! that value. Any `T: Borrow<P::Input>` is accepted, so a `String` can be
//! checked by a `str` predicate and a `Vec<T>` by a slice predicate.

use std::borrow::{Borrow, Cow};

use crate::foundation::{AssertionError, GuardResult, Predicate};

/// Fails with an [`AssertionError`] when `input` does not satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use warden_guard::guard::assert;
/// use warden_guard::predicates::starts_with;
///
/// assert!(assert(&starts_with("https://"), "https://example.com", None).is_ok());
///
/// let error = assert(&starts_with("https://"), "http://example.com", Some("endpoint"))
///     .unwrap_err();
/// assert!(error.to_string().starts_with("endpoint: starts_with:"));
/// ```
pub fn assert<P>(predicate: &P, input: &P::Input, message: Option<&str>) -> GuardResult<()>
where
    P: Predicate + ?Sized,
{
    predicate
        .evaluate(input)
        .map_err(|mismatch| AssertionError::new(mismatch, message))
}

/// Returns whether `input` satisfies `predicate`.
pub fn check<P>(predicate: &P, input: &P::Input) -> bool
where
    P: Predicate + ?Sized,
{
    predicate.evaluate(input).is_ok()
}

/// Returns `value` unchanged when it satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use warden_guard::guard::assert_wrap;
/// use warden_guard::predicates::ends_with_item;
///
/// let steps = assert_wrap(&ends_with_item("done"), vec!["build", "done"], None).unwrap();
/// assert_eq!(steps, vec!["build", "done"]);
/// ```
pub fn assert_wrap<P, T>(predicate: &P, value: T, message: Option<&str>) -> GuardResult<T>
where
    P: Predicate + ?Sized,
    T: Borrow<P::Input>,
{
    assert(predicate, <T as Borrow<P::Input>>::borrow(&value), message)?;
    Ok(value)
}

/// Returns `Some(value)` when it satisfies `predicate`, `None` otherwise.
pub fn check_wrap<P, T>(predicate: &P, value: T) -> Option<T>
where
    P: Predicate + ?Sized,
    T: Borrow<P::Input>,
{
    check(predicate, <T as Borrow<P::Input>>::borrow(&value)).then_some(value)
}

/// A predicate bundled with an optional failure message.
///
/// Useful when the same guard runs in several places.
///
/// # Examples
///
/// ```rust
/// use warden_guard::guard::Guard;
/// use warden_guard::predicates::in_range;
///
/// let port = Guard::new(in_range(1, 65_535)).with_message("listen port");
/// assert!(port.check(&8080));
/// assert_eq!(port.check_wrap(0), None);
/// assert_eq!(
///     port.assert(&0).unwrap_err().message(),
///     Some("listen port")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Guard<P> {
    predicate: P,
    message: Option<Cow<'static, str>>,
}

impl<P: Predicate> Guard<P> {
    /// Creates a guard without a failure message.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            message: None,
        }
    }

    /// Sets the message prepended to assertion failures.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the wrapped predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// See [`assert`].
    pub fn assert(&self, input: &P::Input) -> GuardResult<()> {
        assert(&self.predicate, input, self.message())
    }

    /// See [`check`].
    pub fn check(&self, input: &P::Input) -> bool {
        check(&self.predicate, input)
    }

    /// See [`assert_wrap`].
    pub fn assert_wrap<T>(&self, value: T) -> GuardResult<T>
    where
        T: Borrow<P::Input>,
    {
        assert_wrap(&self.predicate, value, self.message())
    }

    /// See [`check_wrap`].
    pub fn check_wrap<T>(&self, value: T) -> Option<T>
    where
        T: Borrow<P::Input>,
    {
        check_wrap(&self.predicate, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{ends_with, equals, is_some};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assert_passes_and_fails() {
        assert!(assert(&equals(3), &3, None).is_ok());

        let error = assert(&equals(3), &4, None).unwrap_err();
        assert_eq!(error.mismatch().code, "equals");
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_check() {
        assert!(check(&ends_with("two"), "one two"));
        assert!(!check(&ends_with("two"), "two one"));
    }

    #[test]
    fn test_assert_wrap_returns_owned_value() {
        let name = String::from("release-notes.md");
        let wrapped = assert_wrap(&ends_with(".md"), name, None).unwrap();
        assert_eq!(wrapped, "release-notes.md");
    }

    #[test]
    fn test_assert_wrap_carries_message() {
        let error = assert_wrap(&ends_with(".md"), String::from("a.txt"), Some("doc file"))
            .unwrap_err();
        assert_eq!(error.message(), Some("doc file"));
        assert!(error.to_string().starts_with("doc file: ends_with:"));
    }

    #[test]
    fn test_check_wrap() {
        assert_eq!(check_wrap(&equals(1u8), 1u8), Some(1));
        assert_eq!(check_wrap(&equals(1u8), 2u8), None);
    }

    #[test]
    fn test_narrowing_with_pattern_match() {
        let lookup: Option<u16> = Some(443);

        let port = match check_wrap(&is_some::<u16>(), lookup) {
            Some(Some(port)) => port,
            _ => 0,
        };
        assert_eq!(port, 443);
    }

    #[test]
    fn test_guard_reuse() {
        let guard = Guard::new(ends_with(".rs")).with_message("source file");
        assert!(guard.check("lib.rs"));
        assert!(guard.assert("lib.rs").is_ok());
        assert_eq!(guard.check_wrap(String::from("lib.go")), None);

        let error = guard.assert_wrap(String::from("lib.go")).unwrap_err();
        assert_eq!(error.message(), Some("source file"));
    }
}
