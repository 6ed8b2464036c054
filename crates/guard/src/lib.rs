//! # warden-guard
//!
//! Pluggable predicates and the guard flavors built on them.
//!
//! ## Quick Start
//!
//! ```rust
//! use warden_guard::prelude::*;
//!
//! // Predicates compose with .and() / .or() / .not()
//! let tag = starts_with("v").and(ends_with("-rc").not());
//!
//! assert!(check(&tag, "v1.2.0"));
//! assert!(assert(&tag, "v1.2.0-rc", Some("release tag")).is_err());
//! assert_eq!(check_wrap(&at_least(3u32), 5u32), Some(5));
//! ```
//!
//! ## Creating Predicates
//!
//! Use the [`predicate!`] macro for zero-boilerplate predicates,
//! [`predicate_fn`](combinators::predicate_fn) for one-off closures,
//! or implement [`Predicate`](foundation::Predicate) manually.
//!
//! ## Guard Flavors
//!
//! [`assert`](guard::assert), [`check`](guard::check),
//! [`assert_wrap`](guard::assert_wrap) and [`check_wrap`](guard::check_wrap)
//! are written once against `Predicate`. The retrying `wait_until` flavor
//! is provided by the `warden-poll` crate.

// Mismatch is the fundamental error type for every predicate; boxing it
// would add indirection to every evaluation.
#![allow(clippy::result_large_err)]
// Nested combinators (And<Or<Not<...>, ...>, ...>) produce complex types
// that are inherent to the combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
pub mod guard;
mod macros;
pub mod predicates;
pub mod prelude;
