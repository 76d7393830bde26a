//! Toolkit-independent UI event interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering layers describe a browser gesture as `(kind, target, payload)`:
//! the event kind, the id of the element it hit, and whatever value came
//! with it. [`UiEvent::resolve`] turns that triple into a typed event against
//! the layout, rejecting ids nothing is bound to.

use std::fmt;

use time::OffsetDateTime;

use crate::error::SiteError;
use crate::layout::{SiteLayout, ids};
use crate::validation::FieldKind;

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Browser gesture category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyPress,
    Input,
    Blur,
    Submit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Click => "click",
            Self::KeyPress => "keypress",
            Self::Input => "input",
            Self::Blur => "blur",
            Self::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// Data carried by a gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    None,
    /// Current value of a text input.
    Text(String),
    /// `KeyboardEvent.key` of a key press.
    Key(String),
    /// Document click, with whether it hit the navigation container.
    Click { inside_nav: bool },
    /// Form submit, stamped with the time it happened.
    Submit { at: OffsetDateTime },
}

/// A typed state transition request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    NavigateTo(String),
    ToggleMenu,
    DocumentClick { inside_nav: bool },
    NameInput(String),
    NameKeyPress(String),
    Greet,
    FieldInput { field: FieldKind, value: String },
    FieldBlur(FieldKind),
    Submit { at: OffsetDateTime },
}

impl UiEvent {
    /// Map a raw gesture onto the element it targets.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownTarget`] when nothing handles `kind` on
    /// `target`, and [`SiteError::InvalidPayload`] when the payload does not
    /// fit the event.
    pub fn resolve(layout: &SiteLayout, kind: EventKind, target: &str, payload: Payload) -> Result<Self, SiteError> {
        let invalid = || SiteError::InvalidPayload { kind, target: target.to_owned() };
        let field = FieldKind::from_input_id(target);

        match (kind, target) {
            (EventKind::Click, ids::MOBILE_TOGGLE) => Ok(Self::ToggleMenu),
            (EventKind::Click, ids::GREET_BUTTON) => Ok(Self::Greet),
            (EventKind::Click, ids::DOCUMENT) => match payload {
                Payload::Click { inside_nav } => Ok(Self::DocumentClick { inside_nav }),
                _ => Err(invalid()),
            },
            (EventKind::Click, _) => layout
                .nav_link(target)
                .map(|link| Self::NavigateTo(link.page.clone()))
                .ok_or_else(|| SiteError::UnknownTarget { kind, target: target.to_owned() }),
            (EventKind::Input, ids::NAME_INPUT) => match payload {
                Payload::Text(value) => Ok(Self::NameInput(value)),
                _ => Err(invalid()),
            },
            (EventKind::KeyPress, ids::NAME_INPUT) => match payload {
                Payload::Key(key) => Ok(Self::NameKeyPress(key)),
                _ => Err(invalid()),
            },
            (EventKind::Input, _) if field.is_some() => match (field, payload) {
                (Some(field), Payload::Text(value)) => Ok(Self::FieldInput { field, value }),
                _ => Err(invalid()),
            },
            (EventKind::Blur, _) if field.is_some() => field.map(Self::FieldBlur).ok_or_else(invalid),
            (EventKind::Submit, ids::CONTACT_FORM) => match payload {
                Payload::Submit { at } => Ok(Self::Submit { at }),
                _ => Err(invalid()),
            },
            _ => Err(SiteError::UnknownTarget { kind, target: target.to_owned() }),
        }
    }
}
