//! Prelude for common imports.
//!
//! ```rust
//! use warden_guard::prelude::*;
//! ```

pub use crate::combinators::{And, Describe, FnPredicate, Not, Or, predicate_fn};
pub use crate::foundation::{AssertionError, GuardResult, Mismatch, Predicate, PredicateExt};
pub use crate::guard::{Guard, assert, assert_wrap, check, check_wrap};
pub use crate::predicates::*;
