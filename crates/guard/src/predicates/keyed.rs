//! Key and value presence predicates for maps
//!
//! The predicates are generic over the map type through [`Keyed`], which is
//! implemented for `HashMap` and `BTreeMap`.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::foundation::{Mismatch, Predicate};

/// Read-only view over a key-value container.
pub trait Keyed {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Looks up the value stored under `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Iterates over all stored values.
    fn stored_values(&self) -> impl Iterator<Item = &Self::Value>;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn stored_values(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn stored_values(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

macro_rules! keyed_predicate {
    ($(#[$meta:meta])* $name:ident { $field:ident: $fty:ident }) => {
        $(#[$meta])*
        pub struct $name<M: Keyed> {
            #[doc = concat!("Expected `", stringify!($field), "`.")]
            pub $field: M::$fty,
            _map: PhantomData<fn(&M)>,
        }

        impl<M: Keyed> $name<M> {
            /// Creates the predicate.
            pub fn new($field: M::$fty) -> Self {
                Self {
                    $field,
                    _map: PhantomData,
                }
            }
        }

        impl<M> Clone for $name<M>
        where
            M: Keyed,
            M::$fty: Clone,
        {
            fn clone(&self) -> Self {
                Self::new(self.$field.clone())
            }
        }

        impl<M> Debug for $name<M>
        where
            M: Keyed,
            M::$fty: Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field(stringify!($field), &self.$field)
                    .finish()
            }
        }
    };
}

keyed_predicate! {
    /// Passes when the map has an entry for `key`.
    HasKey { key: Key }
}

keyed_predicate! {
    /// Passes when the map has no entry for `key`.
    LacksKey { key: Key }
}

keyed_predicate! {
    /// Passes when any entry stores `value`.
    HasValue { value: Value }
}

impl<M> Predicate for HasKey<M>
where
    M: Keyed,
    M::Key: Debug,
{
    type Input = M;

    fn evaluate(&self, input: &M) -> Result<(), Mismatch> {
        if input.lookup(&self.key).is_some() {
            Ok(())
        } else {
            Err(Mismatch::new("has_key", "map has no entry for the key")
                .with_param("key", format!("{:?}", self.key)))
        }
    }
}

impl<M> Predicate for LacksKey<M>
where
    M: Keyed,
    M::Key: Debug,
{
    type Input = M;

    fn evaluate(&self, input: &M) -> Result<(), Mismatch> {
        if input.lookup(&self.key).is_none() {
            Ok(())
        } else {
            Err(Mismatch::new("lacks_key", "map has an entry for a forbidden key")
                .with_param("key", format!("{:?}", self.key)))
        }
    }
}

impl<M> Predicate for HasValue<M>
where
    M: Keyed,
    M::Value: PartialEq + Debug,
{
    type Input = M;

    fn evaluate(&self, input: &M) -> Result<(), Mismatch> {
        if input.stored_values().any(|value| *value == self.value) {
            Ok(())
        } else {
            Err(Mismatch::new("has_value", "no entry stores the value")
                .with_param("value", format!("{:?}", self.value)))
        }
    }
}

/// Passes when the map stores `value` under `key`.
pub struct HasEntry<M: Keyed> {
    /// Expected key.
    pub key: M::Key,
    /// Expected value under `key`.
    pub value: M::Value,
    _map: PhantomData<fn(&M)>,
}

impl<M: Keyed> HasEntry<M> {
    /// Creates the predicate.
    pub fn new(key: M::Key, value: M::Value) -> Self {
        Self {
            key,
            value,
            _map: PhantomData,
        }
    }
}

impl<M> Debug for HasEntry<M>
where
    M: Keyed,
    M::Key: Debug,
    M::Value: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HasEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<M> Predicate for HasEntry<M>
where
    M: Keyed,
    M::Key: Debug,
    M::Value: PartialEq + Debug,
{
    type Input = M;

    fn evaluate(&self, input: &M) -> Result<(), Mismatch> {
        match input.lookup(&self.key) {
            Some(stored) if *stored == self.value => Ok(()),
            Some(stored) => Err(Mismatch::new("has_entry", "entry stores a different value")
                .with_param("key", format!("{:?}", self.key))
                .expected_actual(format!("{:?}", self.value), format!("{stored:?}"))),
            None => Err(Mismatch::new("has_entry", "map has no entry for the key")
                .with_param("key", format!("{:?}", self.key))),
        }
    }
}

/// Creates a [`HasKey`] predicate.
pub fn has_key<M: Keyed>(key: M::Key) -> HasKey<M> {
    HasKey::new(key)
}

/// Creates a [`LacksKey`] predicate.
pub fn lacks_key<M: Keyed>(key: M::Key) -> LacksKey<M> {
    LacksKey::new(key)
}

/// Creates a [`HasValue`] predicate.
pub fn has_value<M: Keyed>(value: M::Value) -> HasValue<M> {
    HasValue::new(value)
}

/// Creates a [`HasEntry`] predicate.
pub fn has_entry<M: Keyed>(key: M::Key, value: M::Value) -> HasEntry<M> {
    HasEntry::new(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports() -> HashMap<&'static str, u16> {
        HashMap::from([("http", 80), ("https", 443)])
    }

    #[test]
    fn test_has_key() {
        let map = ports();
        assert!(has_key::<HashMap<_, _>>("http").evaluate(&map).is_ok());

        let mismatch = has_key::<HashMap<_, u16>>("ftp").evaluate(&map).unwrap_err();
        assert_eq!(mismatch.param("key"), Some("\"ftp\""));
    }

    #[test]
    fn test_lacks_key() {
        let map = ports();
        assert!(lacks_key::<HashMap<_, u16>>("ftp").evaluate(&map).is_ok());
        assert!(lacks_key::<HashMap<_, u16>>("http").evaluate(&map).is_err());
    }

    #[test]
    fn test_has_value() {
        let map = ports();
        assert!(has_value::<HashMap<&str, _>>(443).evaluate(&map).is_ok());
        assert!(has_value::<HashMap<&str, _>>(21).evaluate(&map).is_err());
    }

    #[test]
    fn test_has_entry_on_btree_map() {
        let map = BTreeMap::from([("retries", 3), ("workers", 8)]);
        assert!(has_entry::<BTreeMap<_, _>>("retries", 3).evaluate(&map).is_ok());

        let mismatch = has_entry::<BTreeMap<_, _>>("retries", 5)
            .evaluate(&map)
            .unwrap_err();
        assert_eq!(mismatch.param("expected"), Some("5"));
        assert_eq!(mismatch.param("actual"), Some("3"));

        let mismatch = has_entry::<BTreeMap<_, _>>("timeout", 1)
            .evaluate(&map)
            .unwrap_err();
        assert_eq!(mismatch.message, "map has no entry for the key");
    }
}
