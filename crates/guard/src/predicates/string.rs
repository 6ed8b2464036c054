//! String boundary and content predicates

use std::borrow::Cow;

use crate::foundation::Mismatch;

crate::predicate! {
    /// Passes when the string starts with a prefix.
    pub StartsWith { prefix: Cow<'static, str> } for str;
    rule(self, input) { input.starts_with(&*self.prefix) }
    mismatch(self, input) {
        Mismatch::new("starts_with", "string does not start with the expected prefix")
            .expected_actual(self.prefix.clone(), input.to_owned())
    }
    new(prefix: impl Into<Cow<'static, str>>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the string ends with a suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_guard::predicates::ends_with;
    /// use warden_guard::foundation::Predicate;
    ///
    /// assert!(ends_with(".rs").evaluate("main.rs").is_ok());
    /// assert!(ends_with(".rs").evaluate("main.go").is_err());
    /// ```
    pub EndsWith { suffix: Cow<'static, str> } for str;
    rule(self, input) { input.ends_with(&*self.suffix) }
    mismatch(self, input) {
        Mismatch::new("ends_with", "string does not end with the expected suffix")
            .expected_actual(self.suffix.clone(), input.to_owned())
    }
    new(suffix: impl Into<Cow<'static, str>>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the string contains a substring.
    pub Contains { needle: Cow<'static, str> } for str;
    rule(self, input) { input.contains(&*self.needle) }
    mismatch(self, input) {
        Mismatch::new("contains", "string does not contain the expected substring")
            .expected_actual(self.needle.clone(), input.to_owned())
    }
    new(needle: impl Into<Cow<'static, str>>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the string does not start with a prefix.
    pub NotStartsWith { prefix: Cow<'static, str> } for str;
    rule(self, input) { !input.starts_with(&*self.prefix) }
    mismatch(self, input) {
        Mismatch::new("not_starts_with", "string starts with a forbidden prefix")
            .with_param("prefix", self.prefix.clone())
            .with_param("actual", input.to_owned())
    }
    new(prefix: impl Into<Cow<'static, str>>) { Self { prefix: prefix.into() } }
    fn not_starts_with(prefix: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the string does not end with a suffix.
    pub NotEndsWith { suffix: Cow<'static, str> } for str;
    rule(self, input) { !input.ends_with(&*self.suffix) }
    mismatch(self, input) {
        Mismatch::new("not_ends_with", "string ends with a forbidden suffix")
            .with_param("suffix", self.suffix.clone())
            .with_param("actual", input.to_owned())
    }
    new(suffix: impl Into<Cow<'static, str>>) { Self { suffix: suffix.into() } }
    fn not_ends_with(suffix: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the string is empty.
    pub IsEmptyStr for str;
    rule(input) { input.is_empty() }
    mismatch(input) {
        Mismatch::new("is_empty_str", "string is not empty")
            .with_param("actual", input.to_owned())
    }
    fn is_empty_str();
}

#[cfg(feature = "regex")]
crate::predicate! {
    /// Passes when the string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    mismatch(self, input) {
        Mismatch::new("matches_regex", "string does not match the pattern")
            .expected_actual(self.pattern.as_str().to_owned(), input.to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Predicate;
    use rstest::rstest;

    #[rstest]
    #[case("hello world", "hello", true)]
    #[case("hello world", "world", false)]
    #[case("", "", true)]
    fn test_starts_with(#[case] input: &str, #[case] prefix: &'static str, #[case] passes: bool) {
        assert_eq!(starts_with(prefix).evaluate(input).is_ok(), passes);
        assert_eq!(not_starts_with(prefix).evaluate(input).is_ok(), !passes);
    }

    #[rstest]
    #[case("hello world", "world", true)]
    #[case("hello world", "hello", false)]
    fn test_ends_with(#[case] input: &str, #[case] suffix: &'static str, #[case] passes: bool) {
        assert_eq!(ends_with(suffix).evaluate(input).is_ok(), passes);
        assert_eq!(not_ends_with(suffix).evaluate(input).is_ok(), !passes);
    }

    #[test]
    fn test_owned_expectation() {
        let suffix = format!("-{}", 42);
        assert!(ends_with(suffix).evaluate("build-42").is_ok());
    }

    #[test]
    fn test_contains_mismatch() {
        let mismatch = contains("needle").evaluate("haystack").unwrap_err();
        assert_eq!(mismatch.param("expected"), Some("needle"));
        assert_eq!(mismatch.param("actual"), Some("haystack"));
    }

    #[test]
    fn test_is_empty_str() {
        assert!(is_empty_str().evaluate("").is_ok());
        assert!(is_empty_str().evaluate(" ").is_err());
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_matches_regex() {
        let predicate = matches_regex(r"^v\d+\.\d+$").unwrap();
        assert!(predicate.evaluate("v1.2").is_ok());
        assert!(predicate.evaluate("1.2").is_err());
        assert!(matches_regex("(").is_err());
    }
}
