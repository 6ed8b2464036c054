//! Sequence predicates
//!
//! These work on slices, so `Vec<T>`, arrays and boxed slices all pass
//! through `Borrow<[T]>` in the guard adapters and the poller.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::foundation::{Mismatch, Predicate};

crate::predicate! {
    /// Passes when the first element equals `item`.
    pub StartsWithItem<T: PartialEq + Debug> { item: T } for [T];
    rule(self, input) { input.first() == Some(&self.item) }
    mismatch(self, input) {
        Mismatch::new("starts_with_item", "sequence does not start with the expected element")
            .expected_actual(format!("{:?}", self.item), format!("{input:?}"))
    }
    fn starts_with_item(item: T);
}

crate::predicate! {
    /// Passes when the last element equals `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_guard::predicates::ends_with_item;
    /// use warden_guard::foundation::Predicate;
    ///
    /// assert!(ends_with_item("two").evaluate(&["one", "two"]).is_ok());
    /// assert!(ends_with_item("one").evaluate(&["one", "two"]).is_err());
    /// ```
    pub EndsWithItem<T: PartialEq + Debug> { item: T } for [T];
    rule(self, input) { input.last() == Some(&self.item) }
    mismatch(self, input) {
        Mismatch::new("ends_with_item", "sequence does not end with the expected element")
            .expected_actual(format!("{:?}", self.item), format!("{input:?}"))
    }
    fn ends_with_item(item: T);
}

crate::predicate! {
    /// Passes when any element equals `item`.
    pub ContainsItem<T: PartialEq + Debug> { item: T } for [T];
    rule(self, input) { input.contains(&self.item) }
    mismatch(self, input) {
        Mismatch::new("contains_item", "sequence does not contain the expected element")
            .expected_actual(format!("{:?}", self.item), format!("{input:?}"))
    }
    fn contains_item(item: T);
}

crate::predicate! {
    /// Passes when the sequence has no elements.
    pub IsEmpty<T> for [T];
    rule(input) { input.is_empty() }
    mismatch(input) {
        Mismatch::new("is_empty", "sequence is not empty")
            .with_param("len", input.len().to_string())
    }
    fn is_empty();
}

/// Passes when the sequence has exactly `len` elements.
pub struct HasLength<T> {
    /// Required number of elements.
    pub len: usize,
    _element: PhantomData<fn(&T)>,
}

impl<T> HasLength<T> {
    /// Creates a new `HasLength` predicate.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            _element: PhantomData,
        }
    }
}

impl<T> Clone for HasLength<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HasLength<T> {}

impl<T> Debug for HasLength<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HasLength").field("len", &self.len).finish()
    }
}

impl<T> Predicate for HasLength<T> {
    type Input = [T];

    fn evaluate(&self, input: &[T]) -> Result<(), Mismatch> {
        if input.len() == self.len {
            Ok(())
        } else {
            Err(
                Mismatch::new("has_length", "sequence has the wrong number of elements")
                    .expected_actual(self.len.to_string(), input.len().to_string()),
            )
        }
    }
}

/// Creates a [`HasLength`] predicate.
#[must_use]
pub const fn has_length<T>(len: usize) -> HasLength<T> {
    HasLength::new(len)
}
