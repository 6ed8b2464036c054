//! Core predicate types and traits
//!
//! - **Traits**: [`Predicate`], [`PredicateExt`]
//! - **Errors**: [`Mismatch`], [`AssertionError`]
//!
//! A predicate answers one question: does this value satisfy the
//! expectation I carry? How the answer is reported (an error, a `bool`,
//! the value itself, an `Option`, or a retry loop) is decided by the guard
//! adapters in [`crate::guard`] and by the poller crate, never by the
//! predicate.

pub mod error;
pub mod traits;

pub use error::{AssertionError, Mismatch};
pub use traits::{Predicate, PredicateExt};

/// Result type for the throwing guard flavors.
pub type GuardResult<T> = Result<T, AssertionError>;
