//! Reactive bridge between Leptos components and the `site` core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every handler funnels through here so a gesture runs to completion against
//! the state before its effects (alert, scroll) are performed.

use leptos::prelude::*;
use site::{EventKind, Payload, SiteError, SiteLayout, SiteState, UiEvent};

use crate::util::browser;

#[cfg(test)]
#[path = "site_state_test.rs"]
mod site_state_test;

/// The context-provided site state.
pub type SiteSignal = RwSignal<SiteState>;

/// State for the standard four-section layout.
///
/// # Errors
///
/// Returns the layout validation error if the static structure is broken.
pub fn initial_state() -> Result<SiteState, SiteError> {
    SiteState::new(SiteLayout::standard())
}

/// Fetch the site state provided by `App`.
pub fn use_site() -> SiteSignal {
    expect_context::<SiteSignal>()
}

/// Apply a typed event, then perform its effects.
pub fn apply(state: SiteSignal, event: UiEvent) {
    finish(state.try_update(|s| s.handle(event)));
}

/// Apply a raw `(kind, target, payload)` gesture, then perform its effects.
pub fn dispatch(state: SiteSignal, kind: EventKind, target: &str, payload: Payload) {
    finish(state.try_update(|s| s.dispatch(kind, target, payload)));
}

fn finish(result: Option<Result<Vec<site::Effect>, SiteError>>) {
    match result {
        Some(Ok(effects)) => browser::run_effects(&effects),
        Some(Err(e)) => browser::report_error(&e),
        // Signal already disposed; the page is being torn down.
        None => {}
    }
}
