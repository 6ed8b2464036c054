//! Macros for declaring predicates with minimal boilerplate.
//!
//! [`predicate!`] produces the struct, its [`Predicate`](crate::foundation::Predicate)
//! implementation and a factory function from one block.
//!
//! # Examples
//!
//! ```rust
//! use warden_guard::predicate;
//! use warden_guard::foundation::{Mismatch, Predicate};
//!
//! // Unit predicate (no fields)
//! predicate! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     mismatch(input) { Mismatch::new("not_blank", "value is blank") }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! predicate! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub LongerThan { len: usize } for str;
//!     rule(self, input) { input.len() > self.len }
//!     mismatch(self, input) {
//!         Mismatch::new("longer_than", "value is too short")
//!             .expected_actual(self.len.to_string(), input.len().to_string())
//!     }
//!     fn longer_than(len: usize);
//! }
//!
//! assert!(not_blank().evaluate("x").is_ok());
//! assert!(longer_than(2).evaluate("ab").is_err());
//! ```

/// Declares a predicate: struct definition, `Predicate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit predicate** (zero-sized, no fields):
/// ```rust,ignore
/// predicate! {
///     pub IsEmptyStr for str;
///     rule(input) { input.is_empty() }
///     mismatch(input) { Mismatch::new("is_empty_str", "string is not empty") }
///     fn is_empty_str();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields), **custom constructor**
/// (`new(..) { .. }` overrides the auto `new`) and **fallible constructor**
/// (`new(..) -> ErrorType { .. }`) follow the same shape.
///
/// **Generic predicate** (one type parameter, identifier bounds):
/// ```rust,ignore
/// predicate! {
///     pub AtLeast<T: PartialOrd + Display> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     mismatch(self, input) { Mismatch::new("at_least", "value is below the minimum") }
///     fn at_least(min: T);
/// }
/// ```
///
/// **Phantom generic unit** (no fields, no bounds, `PhantomData<T>` added):
/// ```rust,ignore
/// predicate! {
///     pub IsSome<T> for Option<T>;
///     rule(input) { input.is_some() }
///     mismatch(input) { Mismatch::new("is_some", "value is None") }
///     fn is_some();
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Variant 1a: Unit predicate (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        mismatch($minp:ident) $mismatch:block
        fn $factory:ident();
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            mismatch($minp) $mismatch
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit predicate (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        mismatch($minp:ident) $mismatch:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            mismatch($self2, $minp) $mismatch
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }
    };

    // ── Variant 3c: Struct with fields + fallible new + fallible factory ─
    //
    // The type after `->` is the constructor's error type; the macro wraps
    // it in `Result`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            mismatch($self2, $minp) $mismatch
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }
    };

    // ── Variant 4a: Generic struct + auto new + factory fn ───────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            mismatch($self2, $minp) $mismatch
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        mismatch($self2:ident, $minp:ident) $mismatch:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Predicate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }
    };

    // ── Variant 5a: Phantom generic unit + factory fn ─────────────────
    //
    // For generic predicates with no fields and no trait bounds on T.
    // Automatically adds `PhantomData<T>` to the struct.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        mismatch($minp:ident) $mismatch:block
        fn $factory:ident();
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name<$gen> for $input;
            rule($inp) $rule
            mismatch($minp) $mismatch
        }

        #[must_use]
        $vis const fn $factory<$gen>() -> $name<$gen> {
            $name { _phantom: ::std::marker::PhantomData }
        }
    };

    // ── Variant 5b: Phantom generic unit, no factory ──────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        mismatch($minp:ident) $mismatch:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _phantom: ::std::marker::PhantomData<fn(&$gen)>,
        }

        impl<$gen> $crate::foundation::Predicate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn evaluate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Mismatch> {
                if $rule {
                    Ok(())
                } else {
                    let $minp = $inp;
                    Err($mismatch)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Mismatch, Predicate};

    predicate! {
        Shouting for str;
        rule(input) { input.chars().all(|c| !c.is_lowercase()) }
        mismatch(input) { Mismatch::new("shouting", "value has lowercase characters") }
        fn shouting();
    }

    predicate! {
        Divides { divisor: u32 } for u32;
        rule(self, input) { self.divisor != 0 && input % self.divisor == 0 }
        mismatch(self, input) {
            Mismatch::new("divides", "value is not a multiple")
                .expected_actual(self.divisor.to_string(), input.to_string())
        }
        fn divides(divisor: u32);
    }

    #[test]
    fn test_unit_variant() {
        assert!(shouting().evaluate("HELLO").is_ok());
        assert!(shouting().evaluate("Hello").is_err());
    }

    #[test]
    fn test_field_variant() {
        assert!(divides(3).evaluate(&9).is_ok());

        let mismatch = divides(3).evaluate(&10).unwrap_err();
        assert_eq!(mismatch.param("expected"), Some("3"));
        assert_eq!(mismatch.param("actual"), Some("10"));
    }
}
