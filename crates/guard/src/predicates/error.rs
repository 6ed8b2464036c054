//! Error-shape predicates
//!
//! Match on what an error says rather than on its concrete type.

use std::borrow::Cow;
use std::error::Error;

use crate::foundation::Mismatch;

crate::predicate! {
    /// Passes when the error's `Display` text contains a substring.
    pub ErrorMessageContains { needle: Cow<'static, str> } for dyn Error;
    rule(self, input) { input.to_string().contains(&*self.needle) }
    mismatch(self, input) {
        Mismatch::new("error_message_contains", "error message does not contain the expected text")
            .expected_actual(self.needle.clone(), input.to_string())
    }
    new(needle: impl Into<Cow<'static, str>>) { Self { needle: needle.into() } }
    fn error_message_contains(needle: impl Into<Cow<'static, str>>);
}

crate::predicate! {
    /// Passes when the error or any error in its `source()` chain mentions
    /// a substring.
    pub ErrorChainContains { needle: Cow<'static, str> } for dyn Error;
    rule(self, input) { chain(input).any(|error| error.to_string().contains(&*self.needle)) }
    mismatch(self, input) {
        let rendered: Vec<String> = chain(input).map(ToString::to_string).collect();
        Mismatch::new("error_chain_contains", "no error in the chain contains the expected text")
            .expected_actual(self.needle.clone(), rendered.join(" <- "))
    }
    new(needle: impl Into<Cow<'static, str>>) { Self { needle: needle.into() } }
    fn error_chain_contains(needle: impl Into<Cow<'static, str>>);
}

fn chain<'a>(error: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(error), |&error| error.source())
}
