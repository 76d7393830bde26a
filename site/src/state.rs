//! Application state and the event handler that drives it.
//!
//! DESIGN
//! ======
//! One `SiteState` replaces the page-global variables and element handles:
//! it is built once from a validated layout and every gesture is applied to
//! it by [`SiteState::handle`]. Side effects the core cannot perform itself
//! (blocking alerts, scrolling) come back as [`Effect`]s.

use time::OffsetDateTime;

use crate::dispatch::{EventKind, Payload, UiEvent};
use crate::error::SiteError;
use crate::form::{ContactForm, SubmitOutcome};
use crate::greeting::Greeting;
use crate::layout::{SiteLayout, ids};
use crate::navigation::{ClickTarget, Navigation};
use crate::submission::FormSubmission;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Work the rendering layer must do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking message to the user.
    Alert(String),
    /// Smoothly scroll the element with this id into view.
    ScrollIntoView(&'static str),
}

/// Everything the site needs across events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState {
    layout: SiteLayout,
    navigation: Navigation,
    greeting: Greeting,
    form: ContactForm,
    output: Option<FormSubmission>,
}

impl SiteState {
    /// Build state for `layout`, failing fast on structural problems.
    ///
    /// # Errors
    ///
    /// Propagates any [`SiteError`] from layout validation.
    pub fn new(layout: SiteLayout) -> Result<Self, SiteError> {
        let navigation = Navigation::from_layout(&layout)?;
        Ok(Self { layout, navigation, greeting: Greeting::default(), form: ContactForm::new(), output: None })
    }

    #[must_use]
    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The summary currently displayed, if a submit has succeeded.
    #[must_use]
    pub fn output(&self) -> Option<&FormSubmission> {
        self.output.as_ref()
    }

    /// Apply one event to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for navigation to an unknown page
    /// and [`SiteError::Timestamp`] if a submission cannot be stamped.
    pub fn handle(&mut self, event: UiEvent) -> Result<Vec<Effect>, SiteError> {
        match event {
            UiEvent::NavigateTo(page) => self.navigation.select_page(&page)?,
            UiEvent::ToggleMenu => {
                self.navigation.toggle_mobile_menu();
            }
            UiEvent::DocumentClick { inside_nav } => {
                self.navigation.close_mobile_menu_if_outside(ClickTarget::from_inside_nav(inside_nav));
            }
            UiEvent::NameInput(value) => self.greeting.set_input(value),
            UiEvent::NameKeyPress(key) => {
                if key == "Enter" {
                    return Ok(self.greet());
                }
            }
            UiEvent::Greet => return Ok(self.greet()),
            UiEvent::FieldInput { field, value } => self.form.input(field, value),
            UiEvent::FieldBlur(field) => self.form.blur(field),
            UiEvent::Submit { at } => return self.submit(at),
        }
        Ok(Vec::new())
    }

    /// Resolve a raw `(kind, target, payload)` gesture and apply it.
    ///
    /// # Errors
    ///
    /// Returns resolution errors from [`UiEvent::resolve`] and handling
    /// errors from [`SiteState::handle`].
    pub fn dispatch(&mut self, kind: EventKind, target: &str, payload: Payload) -> Result<Vec<Effect>, SiteError> {
        let event = UiEvent::resolve(&self.layout, kind, target, payload).inspect_err(|e| log::warn!("{e}"))?;
        self.handle(event)
    }

    fn greet(&mut self) -> Vec<Effect> {
        match self.greeting.greet_from_input() {
            Ok(_) => Vec::new(),
            Err(e) => vec![Effect::Alert(e.to_string())],
        }
    }

    fn submit(&mut self, at: OffsetDateTime) -> Result<Vec<Effect>, SiteError> {
        match self.form.submit(at)? {
            SubmitOutcome::Accepted(submission) => {
                log::debug!("contact form accepted at {}", submission.timestamp());
                self.output = Some(submission);
                self.form.reset();
                Ok(vec![Effect::ScrollIntoView(ids::FORM_OUTPUT)])
            }
            SubmitOutcome::Rejected(_) => Ok(Vec::new()),
        }
    }
}
