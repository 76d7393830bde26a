#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_uses_system_clock_outside_browser() {
    let before = OffsetDateTime::now_utc();
    let stamped = now();
    assert!(stamped >= before);
}

#[test]
fn effects_are_noops_but_callable() {
    run_effects(&[Effect::Alert("Please enter your name first!".into()), Effect::ScrollIntoView("formOutput")]);
    run_effects(&[]);
}

#[test]
fn report_error_is_noop_but_callable() {
    report_error(&SiteError::EmptyLayout);
}
