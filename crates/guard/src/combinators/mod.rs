//! Predicate combinators
//!
//! - [`And`] / [`Or`] / [`Not`]: logical composition
//! - [`Describe`]: replaces the mismatch message
//! - [`FnPredicate`]: ad-hoc predicate from a closure

pub mod and;
pub mod describe;
pub mod function;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use describe::Describe;
pub use function::{FnPredicate, predicate_fn};
pub use not::{Not, not};
pub use or::{Or, or};
