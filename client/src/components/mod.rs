//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading and
//! writing the shared `SiteState` signal from Leptos context.

pub mod contact_form;
pub mod form_output;
pub mod greeting_card;
pub mod nav_bar;
