//! Global subscriber installation. Runs in its own process, so the first
//! installer in this file wins.

use warden_log::{Config, LogError, LoggerBuilder, init_test, init_with};

#[test]
fn test_init_is_idempotent_and_second_install_fails() {
    let first = init_test();
    let second = init_test();
    assert!(!second.is_installed());

    // Whoever installed first, a further explicit install must fail.
    let error = init_with(Config::test()).unwrap_err();
    assert!(matches!(error, LogError::Init(_)));
    drop(first);

    warden_log::info!(target: "warden_log::tests", attempts = 3, "still logging");
}

#[test]
fn test_filter_error_display() {
    let error = LoggerBuilder::from_config(Config::test())
        .with_level("warden=nope")
        .filter()
        .unwrap_err();

    insta::assert_snapshot!(
        error.to_string().split(':').next().unwrap_or_default(),
        @"invalid filter 'warden=nope'"
    );
}
