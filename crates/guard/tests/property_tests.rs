//! Property-based tests for warden-guard.

use proptest::prelude::*;
use warden_guard::prelude::*;

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn ends_with_idempotent(s in ".*") {
        let p = ends_with("ab");
        prop_assert_eq!(p.evaluate(&s).is_ok(), p.evaluate(&s).is_ok());
    }

    #[test]
    fn in_range_idempotent(n in any::<i64>()) {
        let p = in_range(-100i64, 100i64);
        prop_assert_eq!(p.evaluate(&n).is_ok(), p.evaluate(&n).is_ok());
    }
}

// ============================================================================
// FLAVOR AGREEMENT: every flavor gives the same verdict
// ============================================================================

proptest! {
    #[test]
    fn flavors_agree_on_numbers(n in any::<i32>(), bound in any::<i32>()) {
        let p = at_least(bound);
        let verdict = check(&p, &n);

        prop_assert_eq!(assert(&p, &n, None).is_ok(), verdict);
        prop_assert_eq!(check_wrap(&p, n), verdict.then_some(n));
        prop_assert_eq!(assert_wrap(&p, n, None).ok(), verdict.then_some(n));
    }

    #[test]
    fn flavors_agree_on_strings(s in "[a-c]{0,6}") {
        let p = starts_with("ab");
        let verdict = check(&p, s.as_str());

        prop_assert_eq!(check_wrap(&p, s.clone()).is_some(), verdict);
        prop_assert_eq!(assert_wrap(&p, s, None).is_ok(), verdict);
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_passes_iff_both_pass(n in any::<i16>()) {
        let a = above(-50i16);
        let b = below(50i16);
        let combined = above(-50i16).and(below(50i16));

        prop_assert_eq!(check(&combined, &n), check(&a, &n) && check(&b, &n));
    }

    #[test]
    fn or_passes_iff_either_passes(s in "[a-z]{0,8}") {
        let combined = starts_with("a").or(ends_with("z"));
        let expected = s.starts_with('a') || s.ends_with('z');

        prop_assert_eq!(check(&combined, s.as_str()), expected);
    }

    #[test]
    fn not_inverts(n in any::<u8>()) {
        prop_assert_eq!(check(&at_most(100u8).not(), &n), !check(&at_most(100u8), &n));
    }
}
