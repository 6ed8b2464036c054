//! `Option` and `Result` shape predicates
//!
//! These only answer "which variant is it". Getting at the payload is a
//! plain `match` (or `if let`) at the call site once the guard has passed.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::foundation::{Mismatch, Predicate};

crate::predicate! {
    /// Passes for `Some(_)`.
    pub IsSome<T> for Option<T>;
    rule(input) { input.is_some() }
    mismatch(input) { Mismatch::new("is_some", "value is None") }
    fn is_some();
}

crate::predicate! {
    /// Passes for `None`.
    pub IsNone<T> for Option<T>;
    rule(input) { input.is_none() }
    mismatch(input) { Mismatch::new("is_none", "value is Some") }
    fn is_none();
}

/// Passes for `Ok(_)`. The mismatch carries the error's `Debug` text.
pub struct IsOk<T, E> {
    _shape: PhantomData<fn(&Result<T, E>)>,
}

/// Passes for `Err(_)`.
pub struct IsErr<T, E> {
    _shape: PhantomData<fn(&Result<T, E>)>,
}

impl<T, E: Debug> Predicate for IsOk<T, E> {
    type Input = Result<T, E>;

    fn evaluate(&self, input: &Result<T, E>) -> Result<(), Mismatch> {
        match input {
            Ok(_) => Ok(()),
            Err(error) => Err(Mismatch::new("is_ok", "value is Err")
                .with_param("error", format!("{error:?}"))),
        }
    }
}

impl<T, E> Predicate for IsErr<T, E> {
    type Input = Result<T, E>;

    fn evaluate(&self, input: &Result<T, E>) -> Result<(), Mismatch> {
        if input.is_err() {
            Ok(())
        } else {
            Err(Mismatch::new("is_err", "value is Ok"))
        }
    }
}

macro_rules! impl_marker_traits {
    ($($name:ident),+) => {$(
        impl<T, E> Clone for $name<T, E> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T, E> Copy for $name<T, E> {}

        impl<T, E> Default for $name<T, E> {
            fn default() -> Self {
                Self { _shape: PhantomData }
            }
        }

        impl<T, E> Debug for $name<T, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    )+};
}

impl_marker_traits!(IsOk, IsErr);

/// Creates an [`IsOk`] predicate.
#[must_use]
pub const fn is_ok<T, E>() -> IsOk<T, E> {
    IsOk {
        _shape: PhantomData,
    }
}

/// Creates an [`IsErr`] predicate.
#[must_use]
pub const fn is_err<T, E>() -> IsErr<T, E> {
    IsErr {
        _shape: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_shape() {
        assert!(is_some().evaluate(&Some(1)).is_ok());
        assert!(is_some::<i32>().evaluate(&None).is_err());
        assert!(is_none::<i32>().evaluate(&None).is_ok());
        assert!(is_none().evaluate(&Some("x")).is_err());
    }

    #[test]
    fn test_result_shape() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("boom".to_owned());

        assert!(is_ok().evaluate(&ok).is_ok());
        assert!(is_err().evaluate(&err).is_ok());
        assert!(is_err().evaluate(&ok).is_err());

        let mismatch = is_ok().evaluate(&err).unwrap_err();
        assert_eq!(mismatch.param("error"), Some("\"boom\""));
    }
}
