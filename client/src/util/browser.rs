//! Browser side effects requested by the site core.
//!
//! Requires a browser environment; SSR and native test builds fall back to
//! no-ops (or the system clock) so server rendering stays deterministic.

use site::{Effect, SiteError};
use time::OffsetDateTime;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Perform each effect in order.
pub fn run_effects(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::Alert(message) => alert(message),
            Effect::ScrollIntoView(id) => scroll_into_view(id),
        }
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Smoothly scroll the element with `id` to the nearest visible edge.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Surface a structural error from the core.
pub fn report_error(error: &SiteError) {
    #[cfg(feature = "hydrate")]
    {
        log::error!("{error}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = error;
    }
}

/// Current wall-clock time.
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Whether a click landed inside an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn click_hits(ev: &leptos::ev::MouseEvent, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
