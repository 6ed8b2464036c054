//! Numeric comparison predicates

use std::fmt::Display;

use crate::foundation::Mismatch;

crate::predicate! {
    /// Passes when the value is strictly greater than a bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Above<T: PartialOrd + Display> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    mismatch(self, input) {
        Mismatch::new("above", format!("value must be above {}", self.bound))
            .expected_actual(format!("> {}", self.bound), input.to_string())
    }
    fn above(bound: T);
}

crate::predicate! {
    /// Passes when the value is strictly less than a bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Below<T: PartialOrd + Display> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    mismatch(self, input) {
        Mismatch::new("below", format!("value must be below {}", self.bound))
            .expected_actual(format!("< {}", self.bound), input.to_string())
    }
    fn below(bound: T);
}

crate::predicate! {
    /// Passes when the value is greater than or equal to a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtLeast<T: PartialOrd + Display> { min: T } for T;
    rule(self, input) { *input >= self.min }
    mismatch(self, input) {
        Mismatch::new("at_least", format!("value must be at least {}", self.min))
            .expected_actual(format!(">= {}", self.min), input.to_string())
    }
    fn at_least(min: T);
}

crate::predicate! {
    /// Passes when the value is less than or equal to a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtMost<T: PartialOrd + Display> { max: T } for T;
    rule(self, input) { *input <= self.max }
    mismatch(self, input) {
        Mismatch::new("at_most", format!("value must be at most {}", self.max))
            .expected_actual(format!("<= {}", self.max), input.to_string())
    }
    fn at_most(max: T);
}

crate::predicate! {
    /// Passes when the value lies within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_guard::predicates::in_range;
    /// use warden_guard::foundation::Predicate;
    ///
    /// let percent = in_range(0, 100);
    /// assert!(percent.evaluate(&0).is_ok());
    /// assert!(percent.evaluate(&100).is_ok());
    /// assert!(percent.evaluate(&101).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    mismatch(self, input) {
        Mismatch::new("in_range", format!("value must be within {}..={}", self.min, self.max))
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn in_range(min: T, max: T);
}

crate::predicate! {
    /// Passes when a float is within `delta` of the expectation.
    ///
    /// `NaN` never passes.
    #[derive(Copy, PartialEq)]
    pub Approximately { expected: f64, delta: f64 } for f64;
    rule(self, input) { (*input - self.expected).abs() <= self.delta }
    mismatch(self, input) {
        Mismatch::new("approximately", format!("value must be within {} of {}", self.delta, self.expected))
            .expected_actual(self.expected.to_string(), input.to_string())
    }
    fn approximately(expected: f64, delta: f64);
}
