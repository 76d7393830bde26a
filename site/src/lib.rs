//! # site
//!
//! Toolkit-independent core of the brochure website: page navigation,
//! the greeting widget, contact-form validation and the submission summary.
//!
//! DESIGN
//! ======
//! All mutable UI state lives in one [`SiteState`] built from a validated
//! [`SiteLayout`]. Rendering layers translate browser gestures into
//! [`UiEvent`]s (or raw `(kind, target, payload)` triples via
//! [`SiteState::dispatch`]) and perform the returned [`Effect`]s. Nothing in
//! this crate touches the DOM, so every transition is unit-testable.

pub mod dispatch;
pub mod error;
pub mod form;
pub mod greeting;
pub mod layout;
pub mod navigation;
pub mod state;
pub mod submission;
pub mod validation;

pub use dispatch::{EventKind, Payload, UiEvent};
pub use error::SiteError;
pub use form::{ContactForm, FormField, SubmitOutcome};
pub use greeting::{GreetError, Greeting};
pub use layout::SiteLayout;
pub use navigation::{ClickTarget, Navigation};
pub use state::{Effect, SiteState};
pub use submission::FormSubmission;
pub use validation::FieldKind;
