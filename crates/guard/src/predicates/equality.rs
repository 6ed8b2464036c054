//! Equality predicates
//!
//! [`equals`] is the default comparison used when a caller has a concrete
//! expected value: deep equality through `PartialEq`, so nested
//! collections and structs compare structurally.

use std::fmt::Debug;

use crate::foundation::Mismatch;

crate::predicate! {
    /// Passes when the value equals the expectation.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals<T: PartialEq + Debug> { expected: T } for T;
    rule(self, input) { *input == self.expected }
    mismatch(self, input) {
        Mismatch::new("equals", "values are not equal")
            .expected_actual(format!("{:?}", self.expected), format!("{input:?}"))
    }
    fn equals(expected: T);
}

crate::predicate! {
    /// Passes when the value differs from the given one.
    #[derive(PartialEq, Eq, Hash)]
    pub NotEquals<T: PartialEq + Debug> { unexpected: T } for T;
    rule(self, input) { *input != self.unexpected }
    mismatch(self, input) {
        Mismatch::new("not_equals", "values are equal")
            .with_param("actual", format!("{input:?}"))
    }
    fn not_equals(unexpected: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Predicate;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        tags: Vec<&'static str>,
    }

    #[test]
    fn test_equals_is_deep() {
        let predicate = equals(Point {
            x: 1,
            tags: vec!["a", "b"],
        });
        assert!(
            predicate
                .evaluate(&Point {
                    x: 1,
                    tags: vec!["a", "b"]
                })
                .is_ok()
        );
        assert!(
            predicate
                .evaluate(&Point {
                    x: 1,
                    tags: vec!["a"]
                })
                .is_err()
        );
    }

    #[test]
    fn test_equals_nested_maps() {
        let expected = BTreeMap::from([("a", vec![1, 2]), ("b", vec![])]);
        let actual = BTreeMap::from([("b", vec![]), ("a", vec![1, 2])]);
        assert!(equals(expected).evaluate(&actual).is_ok());
    }

    #[test]
    fn test_equals_mismatch_params() {
        let mismatch = equals("two").evaluate(&"three").unwrap_err();
        assert_eq!(mismatch.param("expected"), Some("\"two\""));
        assert_eq!(mismatch.param("actual"), Some("\"three\""));
    }

    #[test]
    fn test_not_equals() {
        assert!(not_equals(0).evaluate(&1).is_ok());
        assert!(not_equals(0).evaluate(&0).is_err());
    }
}
