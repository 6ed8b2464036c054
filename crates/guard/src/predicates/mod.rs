//! Built-in predicates
//!
//! - **Equality**: [`Equals`], [`NotEquals`]
//! - **Numeric**: [`Above`], [`Below`], [`AtLeast`], [`AtMost`], [`InRange`],
//!   [`Approximately`]
//! - **String**: [`StartsWith`], [`EndsWith`], [`Contains`],
//!   [`NotStartsWith`], [`NotEndsWith`], [`IsEmptyStr`], `MatchesRegex`
//! - **Collection**: [`StartsWithItem`], [`EndsWithItem`], [`ContainsItem`],
//!   [`HasLength`], [`IsEmpty`]
//! - **Keyed**: [`HasKey`], [`LacksKey`], [`HasValue`], [`HasEntry`]
//! - **Shape**: [`IsSome`], [`IsNone`], [`IsOk`], [`IsErr`]
//! - **Error**: [`ErrorMessageContains`], [`ErrorChainContains`]

pub mod collection;
pub mod equality;
pub mod error;
pub mod keyed;
pub mod numeric;
pub mod shape;
pub mod string;

pub use collection::{
    ContainsItem, EndsWithItem, HasLength, IsEmpty, StartsWithItem, contains_item, ends_with_item,
    has_length, is_empty, starts_with_item,
};
pub use equality::{Equals, NotEquals, equals, not_equals};
pub use error::{
    ErrorChainContains, ErrorMessageContains, error_chain_contains, error_message_contains,
};
pub use keyed::{
    HasEntry, HasKey, HasValue, Keyed, LacksKey, has_entry, has_key, has_value, lacks_key,
};
pub use numeric::{
    Above, Approximately, AtLeast, AtMost, Below, InRange, above, approximately, at_least,
    at_most, below, in_range,
};
pub use shape::{IsErr, IsNone, IsOk, IsSome, is_err, is_none, is_ok, is_some};
#[cfg(feature = "regex")]
pub use string::{MatchesRegex, matches_regex};
pub use string::{
    Contains, EndsWith, IsEmptyStr, NotEndsWith, NotStartsWith, StartsWith, contains, ends_with,
    is_empty_str, not_ends_with, not_starts_with, starts_with,
};
